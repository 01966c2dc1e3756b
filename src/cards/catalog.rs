//! The card store.
//!
//! A `Catalog` is loaded once per session and never mutated. It is backed by
//! a persistent vector, so handing copies to the engine and to tests is O(1).

use im::Vector;
use rustc_hash::FxHashSet;

use super::card::Card;
use super::defaults::default_cards;
use crate::core::{TabooError, TabooResult};

/// Immutable, validated sequence of cards.
///
/// ## Example
///
/// ```
/// use taboo_engine::cards::{Card, Catalog};
///
/// let catalog = Catalog::new(vec![
///     Card::new("Beach", ["Sand", "Sea"]),
///     Card::new("Coffee", ["Cup", "Beans"]),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(1).unwrap().word, "Coffee");
/// assert!(Catalog::new(vec![]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    cards: Vector<Card>,
}

impl Catalog {
    /// Build a catalog, validating every card.
    ///
    /// Fails with a configuration error if the list is empty, a card is
    /// malformed, or two cards share a word (case-insensitively).
    pub fn new(cards: Vec<Card>) -> TabooResult<Self> {
        if cards.is_empty() {
            return Err(TabooError::configuration("catalog is empty"));
        }

        let mut seen = FxHashSet::default();
        for card in &cards {
            card.validate()?;
            if !seen.insert(card.word.to_lowercase()) {
                return Err(TabooError::configuration(format!(
                    "duplicate card word {:?}",
                    card.word
                )));
            }
        }

        Ok(Self {
            cards: cards.into_iter().collect(),
        })
    }

    /// The built-in catalog.
    #[must_use]
    pub fn default_cards() -> Self {
        Self {
            cards: default_cards().into_iter().collect(),
        }
    }

    /// Parse a JSON array of cards.
    ///
    /// Malformed JSON is a load error; well-formed but invalid cards are a
    /// configuration error.
    pub fn from_json(json: &str) -> TabooResult<Self> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// Number of cards. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate over cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find a card by word, ignoring case.
    #[must_use]
    pub fn find(&self, word: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.word.eq_ignore_ascii_case(word))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_cards()
    }
}
