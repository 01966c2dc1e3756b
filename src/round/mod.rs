//! Round orchestration.
//!
//! ## Key Types
//!
//! - `RoundEngine`: Owns score, clock, deck and active card; exposes the actions
//! - `RoundEvent`: External inputs (ticks, speech, typed guesses, buttons)
//! - `RoundOutcome`: What an action did
//! - `RoundSnapshot`: State handed to the presentation layer
//!
//! ## Scoring
//!
//! Correct is +1. A buzz, manual or from a forbidden word, is -1 with the
//! score floored at zero. Passing never changes the score.

pub mod engine;
pub mod event;
pub mod state;
pub mod transcript;

pub use engine::RoundEngine;
pub use event::{RoundEvent, RoundOutcome};
pub use state::{RoundPhase, RoundSnapshot};
pub use transcript::Transcript;
