//! Deck implementation.

use tracing::debug;

use crate::cards::{Card, Catalog};
use crate::core::{RoundRng, TabooError, TabooResult};

/// Draw order for one session.
///
/// Holds positions into a `Catalog`, not the cards themselves, so the deck
/// stays valid for as long as the catalog it was built from.
///
/// ## Example
///
/// ```
/// use taboo_engine::cards::Catalog;
/// use taboo_engine::core::RoundRng;
/// use taboo_engine::deck::Deck;
///
/// let catalog = Catalog::default_cards();
/// let mut rng = RoundRng::new(1);
/// let mut deck = Deck::shuffled(&catalog, &mut rng).unwrap();
///
/// let first = deck.draw(&catalog, &mut rng).unwrap().clone();
/// assert!(catalog.iter().any(|c| *c == first));
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    order: Vec<usize>,
    /// Index of the next card to serve.
    cursor: usize,
    /// Completed reshuffles since the deck was created.
    passes: u32,
}

impl Deck {
    /// Create a deck over a uniformly random permutation of the catalog.
    pub fn shuffled(catalog: &Catalog, rng: &mut RoundRng) -> TabooResult<Self> {
        let mut deck = Self::ordered(catalog)?;
        rng.shuffle(&mut deck.order);
        Ok(deck)
    }

    /// Create a deck whose first pass follows catalog order.
    ///
    /// Reshuffles after exhaustion are still random.
    pub fn ordered(catalog: &Catalog) -> TabooResult<Self> {
        if catalog.is_empty() {
            return Err(TabooError::configuration("cannot build a deck from an empty catalog"));
        }
        Ok(Self {
            order: (0..catalog.len()).collect(),
            cursor: 0,
            passes: 0,
        })
    }

    /// Draw the next card, reshuffling first if the current pass is spent.
    ///
    /// Fails only if `catalog` is not the catalog this deck was built from
    /// (a position falls outside it).
    pub fn draw<'c>(&mut self, catalog: &'c Catalog, rng: &mut RoundRng) -> TabooResult<&'c Card> {
        let index = self.draw_index(rng);
        catalog.get(index).ok_or_else(|| {
            TabooError::configuration(format!(
                "deck position {index} is outside a catalog of {} cards",
                catalog.len()
            ))
        })
    }

    /// Draw the next catalog position.
    pub fn draw_index(&mut self, rng: &mut RoundRng) -> usize {
        if self.cursor >= self.order.len() {
            rng.shuffle(&mut self.order);
            self.cursor = 0;
            self.passes += 1;
            debug!(passes = self.passes, cards = self.order.len(), "deck exhausted, reshuffled");
        }
        let index = self.order[self.cursor];
        self.cursor += 1;
        index
    }

    /// Cards left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// Number of cards in one pass.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false: decks are never built over an empty catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Completed reshuffles.
    #[must_use]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// The current pass's permutation.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn small_catalog() -> Catalog {
        Catalog::new(vec![
            Card::new("A", ["x"]),
            Card::new("B", ["x"]),
            Card::new("C", ["x"]),
            Card::new("D", ["x"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_ordered_first_pass() {
        let catalog = small_catalog();
        let mut rng = RoundRng::new(1);
        let mut deck = Deck::ordered(&catalog).unwrap();

        let words: Vec<_> = (0..4)
            .map(|_| deck.draw(&catalog, &mut rng).unwrap().word.clone())
            .collect();
        assert_eq!(words, vec!["A", "B", "C", "D"]);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let catalog = Catalog::default_cards();
        let mut rng = RoundRng::new(99);
        let deck = Deck::shuffled(&catalog, &mut rng).unwrap();

        let mut order = deck.order().to_vec();
        order.sort_unstable();
        assert_eq!(order, (0..catalog.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_no_repeat_within_pass() {
        let catalog = Catalog::default_cards();
        let mut rng = RoundRng::new(5);
        let mut deck = Deck::shuffled(&catalog, &mut rng).unwrap();

        let mut seen = rustc_hash::FxHashSet::default();
        for _ in 0..catalog.len() {
            assert!(seen.insert(deck.draw_index(&mut rng)));
        }
        assert_eq!(deck.passes(), 0);
    }

    #[test]
    fn test_reshuffles_on_exhaustion() {
        let catalog = small_catalog();
        let mut rng = RoundRng::new(11);
        let mut deck = Deck::shuffled(&catalog, &mut rng).unwrap();

        for _ in 0..4 {
            deck.draw_index(&mut rng);
        }
        assert_eq!(deck.remaining(), 0);

        // The stream never runs dry
        for _ in 0..10 {
            assert!(deck.draw(&catalog, &mut rng).is_ok());
        }
        assert_eq!(deck.passes(), 3);
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn test_single_card_catalog() {
        let catalog = Catalog::new(vec![Card::new("Solo", ["x"])]).unwrap();
        let mut rng = RoundRng::new(0);
        let mut deck = Deck::shuffled(&catalog, &mut rng).unwrap();

        for _ in 0..3 {
            assert_eq!(deck.draw(&catalog, &mut rng).unwrap().word, "Solo");
        }
    }

    #[test]
    fn test_foreign_catalog_errors() {
        let big = Catalog::default_cards();
        let tiny = Catalog::new(vec![Card::new("Solo", ["x"])]).unwrap();
        let mut rng = RoundRng::new(0);
        let mut deck = Deck::ordered(&big).unwrap();

        deck.draw_index(&mut rng);
        assert!(matches!(deck.draw(&tiny, &mut rng), Err(TabooError::Configuration { .. })));
    }
}
