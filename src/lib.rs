//! # taboo-engine
//!
//! Round engine for a taboo-style word-guessing party game. One player sees
//! a secret word and a few forbidden words and must get a partner to say the
//! secret word before time runs out, without saying anything forbidden.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: Rendering, speech recognition and synthesis, timers and
//!    storage are collaborators behind narrow traits in `ports`.
//!
//! 2. **Explicit Events**: Timer ticks, speech results and button presses are
//!    `RoundEvent` values, so a round can be replayed deterministically in tests.
//!
//! 3. **No Globals**: All state lives in a `RoundEngine` value. Engines are
//!    independent of each other.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Cards, catalog, catalog sources
//! - `deck`: Non-repeating draw order with reshuffle on exhaustion
//! - `clock`: Countdown state machine
//! - `classify`: Whole-word taboo and target matching
//! - `hints`: CPU-assist clue generation
//! - `round`: The round engine
//! - `ports`: Presentation, speech and preference interfaces

pub mod core;
pub mod cards;
pub mod deck;
pub mod clock;
pub mod classify;
pub mod hints;
pub mod round;
pub mod ports;

// Re-export commonly used types
pub use crate::core::{RoundConfig, RoundRng, RoundRngState, TabooError, TabooResult};

pub use crate::cards::{
    load_catalog_or, Card, Catalog, CatalogSource, JsonSource, StaticSource, MAX_FORBIDDEN,
};

pub use crate::deck::Deck;

pub use crate::clock::{ClockEvent, ClockPhase, ClockToken, RoundClock};

pub use crate::classify::{classify, CardMatcher, Verdict};

pub use crate::hints::{generate_hints, HintGenerator, PhraseBank};

pub use crate::round::{RoundEngine, RoundEvent, RoundOutcome, RoundPhase, RoundSnapshot, Transcript};

pub use crate::ports::{MemoryPreferences, PreferenceStore, PresentationSink, SpeechSink, Theme};
