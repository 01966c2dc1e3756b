//! Round clock state machine.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Clock lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockPhase {
    #[default]
    Idle,
    Running,
    Expired,
}

/// Something observable that happened on a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockEvent {
    /// Remaining time changed to the given value.
    Remaining(u32),
    /// The countdown reached zero. Emitted exactly once per `start`.
    Expired,
}

/// Events produced by one tick. At most two.
pub type ClockEvents = SmallVec<[ClockEvent; 2]>;

/// Identifies the countdown a tick belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockToken(u64);

impl ClockToken {
    /// Get the raw generation value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Countdown state machine driven by external ticks.
///
/// ## Example
///
/// ```
/// use std::num::NonZeroU32;
/// use taboo_engine::clock::{ClockEvent, ClockPhase, RoundClock};
///
/// let mut clock = RoundClock::new();
/// let token = clock.start(NonZeroU32::new(2).unwrap());
///
/// assert_eq!(clock.tick(token).as_slice(), &[ClockEvent::Remaining(1)]);
/// assert_eq!(
///     clock.tick(token).as_slice(),
///     &[ClockEvent::Remaining(0), ClockEvent::Expired]
/// );
/// assert_eq!(clock.phase(), ClockPhase::Expired);
/// assert!(clock.tick(token).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoundClock {
    phase: ClockPhase,
    remaining: u32,
    duration: u32,
    generation: u64,
}

impl RoundClock {
    /// Create an idle clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a countdown of `duration` ticks, abandoning any current one.
    ///
    /// Returns the token the external timer must tag its ticks with.
    pub fn start(&mut self, duration: NonZeroU32) -> ClockToken {
        self.generation += 1;
        self.duration = duration.get();
        self.remaining = self.duration;
        self.phase = ClockPhase::Running;
        self.token()
    }

    /// Stop counting. Idempotent; never emits `Expired`.
    pub fn stop(&mut self) {
        if self.phase != ClockPhase::Idle {
            self.generation += 1;
        }
        self.phase = ClockPhase::Idle;
    }

    /// Advance one unit.
    ///
    /// Ticks are ignored unless the clock is running and `token` belongs to
    /// the current countdown.
    pub fn tick(&mut self, token: ClockToken) -> ClockEvents {
        let mut events = ClockEvents::new();
        if self.phase != ClockPhase::Running || token != self.token() {
            return events;
        }

        self.remaining = self.remaining.saturating_sub(1);
        events.push(ClockEvent::Remaining(self.remaining));

        if self.remaining == 0 {
            self.phase = ClockPhase::Expired;
            events.push(ClockEvent::Expired);
        }
        events
    }

    /// Token of the current countdown.
    #[must_use]
    pub fn token(&self) -> ClockToken {
        ClockToken(self.generation)
    }

    #[must_use]
    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Duration passed to the last `start`.
    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == ClockPhase::Running
    }
}
