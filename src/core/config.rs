//! Round configuration.
//!
//! Games configure a round at startup through `RoundConfig`. Every field has
//! a sensible default, so `RoundConfig::default()` plays the classic
//! 60-second round with a shuffled deck and manual scoring.

use serde::{Deserialize, Serialize};

use super::error::{TabooError, TabooResult};

/// Default round length in clock ticks (seconds).
pub const DEFAULT_ROUND_SECONDS: u32 = 60;

/// Remaining time at or below which the round is flagged as running low.
pub const DEFAULT_LOW_TIME_THRESHOLD: u32 = 10;

/// Phrase spoken when no safe hint can be produced for a card.
pub const DEFAULT_FALLBACK_HINT: &str = "Keep going, you're getting close!";

/// Configuration for a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Length of the round in ticks. Must be positive.
    pub round_seconds: u32,

    /// Shuffle the first pass through the deck.
    ///
    /// Reshuffles after exhaustion are always random.
    pub shuffle: bool,

    /// Score a point automatically when the target word is heard.
    pub target_match: bool,

    /// Remaining ticks at or below which `low_time` is reported.
    pub low_time_threshold: u32,

    /// Speak CPU hints every N ticks on the same card. `None` disables hints.
    pub hint_interval: Option<u32>,

    /// Spoken when the hint generator runs dry.
    pub fallback_hint: String,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_seconds: DEFAULT_ROUND_SECONDS,
            shuffle: true,
            target_match: false,
            low_time_threshold: DEFAULT_LOW_TIME_THRESHOLD,
            hint_interval: None,
            fallback_hint: DEFAULT_FALLBACK_HINT.to_string(),
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round length.
    #[must_use]
    pub fn with_round_seconds(mut self, seconds: u32) -> Self {
        self.round_seconds = seconds;
        self
    }

    /// Enable or disable shuffling of the first pass.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Enable or disable automatic scoring on the target word.
    #[must_use]
    pub fn with_target_match(mut self, enabled: bool) -> Self {
        self.target_match = enabled;
        self
    }

    /// Set the low-time warning threshold.
    #[must_use]
    pub fn with_low_time_threshold(mut self, threshold: u32) -> Self {
        self.low_time_threshold = threshold;
        self
    }

    /// Enable CPU hints every `interval` ticks.
    #[must_use]
    pub fn with_hint_interval(mut self, interval: u32) -> Self {
        self.hint_interval = Some(interval);
        self
    }

    /// Set the phrase used when hints are exhausted.
    #[must_use]
    pub fn with_fallback_hint(mut self, phrase: impl Into<String>) -> Self {
        self.fallback_hint = phrase.into();
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a configuration document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> TabooResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive a round.
    pub fn validate(&self) -> TabooResult<()> {
        if self.round_seconds == 0 {
            return Err(TabooError::configuration("round_seconds must be positive"));
        }
        if self.hint_interval == Some(0) {
            return Err(TabooError::configuration("hint_interval must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoundConfig::default();
        assert_eq!(config.round_seconds, 60);
        assert!(config.shuffle);
        assert!(!config.target_match);
        assert_eq!(config.low_time_threshold, 10);
        assert_eq!(config.hint_interval, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RoundConfig::new()
            .with_round_seconds(30)
            .with_shuffle(false)
            .with_target_match(true)
            .with_hint_interval(5)
            .with_seed(9);

        assert_eq!(config.round_seconds, 30);
        assert!(!config.shuffle);
        assert!(config.target_match);
        assert_eq!(config.hint_interval, Some(5));
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = RoundConfig::new().with_round_seconds(0).validate().unwrap_err();
        assert!(matches!(err, TabooError::Configuration { .. }));
    }

    #[test]
    fn test_zero_hint_interval_rejected() {
        let err = RoundConfig::new().with_hint_interval(0).validate().unwrap_err();
        assert!(matches!(err, TabooError::Configuration { .. }));
    }

    #[test]
    fn test_from_json_partial() {
        let config = RoundConfig::from_json(r#"{ "round_seconds": 90, "target_match": true }"#).unwrap();
        assert_eq!(config.round_seconds, 90);
        assert!(config.target_match);
        assert!(config.shuffle);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            RoundConfig::from_json("{ nope"),
            Err(TabooError::Load { .. })
        ));
        assert!(matches!(
            RoundConfig::from_json(r#"{ "round_seconds": 0 }"#),
            Err(TabooError::Configuration { .. })
        ));
    }
}
