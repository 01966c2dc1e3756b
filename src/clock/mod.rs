//! Countdown clock for a round.
//!
//! The clock never reads wall time. An external timer delivers one tick per
//! elapsed unit, tagged with the `ClockToken` it was scheduled under; the
//! clock turns ticks into `ClockEvent`s. Restarting or stopping the clock
//! invalidates outstanding tokens, so a timer that is late to cancel cannot
//! move a fresh countdown.
//!
//! ```text
//! Idle --start(d)--> Running --tick--> Running --tick (0 left)--> Expired
//!   ^                   |                                            |
//!   +------stop()-------+<-----------------start(d)------------------+
//! ```

mod round_clock;

pub use round_clock::{ClockEvent, ClockEvents, ClockPhase, ClockToken, RoundClock};
