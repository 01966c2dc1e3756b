//! Narrow interfaces to the world outside the engine.
//!
//! The engine pushes state out through these traits and never reads
//! anything back from them. Rendering, speech synthesis and storage live
//! with the caller.
//!
//! - `PresentationSink`: receives a snapshot after every state change
//! - `SpeechSink`: fire-and-forget text to speech
//! - `PreferenceStore`: cosmetic settings such as the theme

pub mod preferences;
pub mod sinks;
pub mod theme;

pub use preferences::{MemoryPreferences, PreferenceStore};
pub use sinks::{PresentationSink, SpeechSink};
pub use theme::{Theme, THEME_PREFERENCE_KEY};
