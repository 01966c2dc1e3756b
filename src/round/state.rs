//! Round phase and the snapshot handed to presentation.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Where the round is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Not started, or stopped early.
    #[default]
    Idle,
    /// Clock running; actions are accepted.
    Running,
    /// Clock ran out. State is frozen until the next start.
    Expired,
}

/// Everything the presentation layer needs to draw the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub score: u32,
    pub time_remaining: u32,
    pub active_card: Option<Card>,
    pub phase: RoundPhase,
    /// Remaining time is at or below the configured threshold.
    pub low_time: bool,
    /// Running transcript with buzz markers.
    pub transcript: String,
}
