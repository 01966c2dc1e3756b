//! Core engine types: RNG, configuration, errors.
//!
//! These are the building blocks every other module depends on.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{RoundConfig, DEFAULT_FALLBACK_HINT, DEFAULT_LOW_TIME_THRESHOLD, DEFAULT_ROUND_SECONDS};
pub use error::{TabooError, TabooResult};
pub use rng::{RoundRng, RoundRngState};
