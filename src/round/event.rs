//! Inputs to and results from the round engine.
//!
//! Timer callbacks, speech results and button presses all become a
//! `RoundEvent`, delivered one at a time to `RoundEngine::handle`. Feeding a
//! recorded list of events replays a round exactly.

use serde::{Deserialize, Serialize};

use crate::clock::ClockToken;

/// Something that happened outside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// One time unit elapsed on the timer scheduled under this token.
    Tick(ClockToken),
    /// Speech recognition produced a partial or final result.
    TranscriptUpdate { text: String, is_final: bool },
    /// A guess was typed in.
    GuessSubmitted(String),
    /// Skip the card without scoring.
    Pass,
    /// Move to the next card without scoring.
    Next,
    /// Manual penalty.
    Buzz,
    /// Manual point.
    Correct,
    /// Abort the round.
    Stop,
}

/// What an action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A new card is active; score unchanged.
    CardAdvanced,
    /// Score decreased (floored at zero) and the card advanced.
    /// `taboo` is the forbidden entry heard, if the buzz was automatic.
    Buzzed { taboo: Option<String> },
    /// Score increased and the card advanced. `word` is the card just scored.
    Correct { word: String },
    /// The input matched nothing on the card.
    NoEffect,
    /// The clock advanced.
    Ticked { remaining: u32 },
    /// The clock ran out. The authoritative end-of-round signal.
    Expired { final_score: u32 },
    /// The round was aborted.
    Stopped,
    /// Hints were spoken for the active card.
    HintsSpoken(Vec<String>),
    /// The round is not running, or the tick was stale. Nothing changed.
    Inactive,
}

impl RoundOutcome {
    /// Whether the action changed round state.
    #[must_use]
    pub fn changed_state(&self) -> bool {
        !matches!(self, RoundOutcome::NoEffect | RoundOutcome::Inactive | RoundOutcome::HintsSpoken(_))
    }
}
