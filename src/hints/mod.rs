//! CPU-assist hints.
//!
//! Synthesizes short clue sentences for the active card from a `PhraseBank`,
//! never including the target word or a forbidden word.

pub mod bank;
pub mod generator;

pub use bank::PhraseBank;
pub use generator::{generate_hints, HintGenerator, MAX_HINTS};
