//! Engine error taxonomy.
//!
//! Only `Configuration` is fatal to a round. `Load` and `HintExhaustion`
//! are recoverable by the caller (fallback catalog, default hint phrase).
//! Transcription noise is never an error: the classifier treats it as
//! a neutral utterance.

use thiserror::Error;

/// Errors produced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TabooError {
    /// Empty or malformed catalog, or an invalid round configuration.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A catalog or configuration document could not be fetched or parsed.
    #[error("Load error: {message}")]
    Load { message: String },

    /// Every hint candidate for the card was filtered out.
    #[error("No safe hint available for \"{word}\"")]
    HintExhaustion { word: String },
}

impl TabooError {
    /// Build a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Build a load error.
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
        }
    }

    /// Whether the caller can recover by substituting a fallback.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Configuration { .. })
    }
}

impl From<serde_json::Error> for TabooError {
    fn from(err: serde_json::Error) -> Self {
        Self::load(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type TabooResult<T> = Result<T, TabooError>;
