//! Deck management: a non-repeating draw order over the catalog.
//!
//! A `Deck` is a permutation of catalog positions plus a cursor. Drawing
//! walks the permutation; when it runs out the deck reshuffles the whole
//! catalog and keeps going, so callers always get a card.
//!
//! Two consecutive passes may come out in the same order. That is an
//! accepted property of independent shuffles.

mod manager;

pub use manager::Deck;
