//! Hint generation with taboo filtering.
//!
//! Filtering is stricter than classification: a fragment is dropped if the
//! normalized text of the target word or any forbidden word occurs anywhere
//! in it, even inside a longer word. Every whole-word match is also a
//! substring match of the normalized text, so a surviving hint can never
//! trip the classifier.

use tracing::{debug, warn};

use super::bank::{PhraseBank, SLOT};
use crate::cards::Card;
use crate::classify::normalize;
use crate::core::{RoundRng, TabooError, TabooResult};

/// Most sentences produced for one request.
pub const MAX_HINTS: usize = 3;

/// Normalized terms a hint must not contain.
struct Banned {
    terms: Vec<String>,
}

impl Banned {
    fn for_card(card: &Card) -> Self {
        let terms = std::iter::once(&card.word)
            .chain(card.forbidden.iter())
            .map(|t| normalize(t))
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    fn leaks(&self, text: &str) -> bool {
        let text = normalize(text);
        self.terms.iter().any(|term| text.contains(term.as_str()))
    }
}

/// Build 1 to `MAX_HINTS` clue sentences for `card`.
///
/// Fails with `HintExhaustion` when no template or no fragment survives the
/// filter.
pub fn generate_hints(card: &Card, bank: &PhraseBank, rng: &mut RoundRng) -> TabooResult<Vec<String>> {
    let banned = Banned::for_card(card);
    let exhausted = || TabooError::HintExhaustion {
        word: card.word.clone(),
    };

    let templates: Vec<&String> = bank
        .templates()
        .iter()
        .filter(|t| !banned.leaks(&t.replace(SLOT, " ")))
        .collect();
    let fragments: Vec<&String> = bank
        .fragments_for(&card.word)
        .filter(|f| !banned.leaks(f))
        .collect();

    if templates.is_empty() || fragments.is_empty() {
        warn!(word = %card.word, "no safe hint material");
        return Err(exhausted());
    }

    let count = rng.gen_range_usize(1..MAX_HINTS + 1).min(fragments.len());
    let mut hints = Vec::with_capacity(count);
    for fragment in rng.choose_multiple(&fragments, count) {
        let Some(template) = rng.choose(&templates) else {
            break;
        };
        let sentence = template.replacen(SLOT, fragment, 1);
        // Joining can glue text across the slot boundary
        if !banned.leaks(&sentence) {
            hints.push(sentence);
        }
    }

    if hints.is_empty() {
        warn!(word = %card.word, "every hint sentence leaked a banned term");
        return Err(exhausted());
    }

    debug!(word = %card.word, count = hints.len(), "hints generated");
    Ok(hints)
}

/// A phrase bank plus its own random stream.
#[derive(Clone, Debug)]
pub struct HintGenerator {
    bank: PhraseBank,
    rng: RoundRng,
}

impl HintGenerator {
    pub fn new(bank: PhraseBank, rng: RoundRng) -> Self {
        Self { bank, rng }
    }

    /// Generate hints for `card`.
    pub fn generate(&mut self, card: &Card) -> TabooResult<Vec<String>> {
        generate_hints(card, &self.bank, &mut self.rng)
    }

    /// Replace the random stream, e.g. when a new round is seeded.
    pub fn reseed(&mut self, rng: RoundRng) {
        self.rng = rng;
    }

    #[must_use]
    pub fn bank(&self) -> &PhraseBank {
        &self.bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, Verdict};

    fn birthday() -> Card {
        Card::new("Birthday", ["Cake", "Party", "Gift", "Candles", "Celebrate"])
    }

    #[test]
    fn test_generates_one_to_three() {
        let bank = PhraseBank::default_bank();
        let mut rng = RoundRng::new(1);

        for _ in 0..50 {
            let hints = generate_hints(&birthday(), &bank, &mut rng).unwrap();
            assert!((1..=MAX_HINTS).contains(&hints.len()));
        }
    }

    #[test]
    fn test_filters_leaky_fragments() {
        let bank = PhraseBank::new(["Think of {}."])
            .with_clues("Birthday", ["a party hat", "a yearly occasion"]);
        let mut rng = RoundRng::new(2);

        for _ in 0..20 {
            let hints = generate_hints(&birthday(), &bank, &mut rng).unwrap();
            assert_eq!(hints, vec!["Think of a yearly occasion.".to_string()]);
        }
    }

    #[test]
    fn test_filter_is_substring_based() {
        // "partygoers" is not a whole-word hit but is still filtered
        let bank = PhraseBank::new(["{}"]).with_clues("Birthday", ["partygoers"]);
        let mut rng = RoundRng::new(3);

        assert_eq!(
            generate_hints(&birthday(), &bank, &mut rng),
            Err(TabooError::HintExhaustion { word: "Birthday".into() })
        );
    }

    #[test]
    fn test_leaky_templates_dropped() {
        let bank = PhraseBank::new(["Bring a gift for {}.", "Think of {}."])
            .with_generic(["a special day"]);
        let mut rng = RoundRng::new(4);

        for _ in 0..20 {
            let hints = generate_hints(&birthday(), &bank, &mut rng).unwrap();
            assert_eq!(hints, vec!["Think of a special day.".to_string()]);
        }
    }

    #[test]
    fn test_no_templates_exhausts() {
        let bank = PhraseBank::new(["It is a {} cake"]).with_generic(["thing"]);
        let mut rng = RoundRng::new(5);
        assert!(matches!(
            generate_hints(&birthday(), &bank, &mut rng),
            Err(TabooError::HintExhaustion { .. })
        ));
    }

    #[test]
    fn test_default_bank_never_trips_classifier() {
        let bank = PhraseBank::default_bank();
        let mut generator = HintGenerator::new(bank, RoundRng::new(6));

        for card in crate::cards::default_cards() {
            for _ in 0..25 {
                for hint in generator.generate(&card).unwrap() {
                    assert_eq!(classify(&hint, &card, true), Verdict::Neutral, "{hint} leaks on {card}");
                }
            }
        }
    }
}
