//! Utterance classification against the active card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tokenizer::{contains_phrase, tokenize, Tokens};
use crate::cards::{Card, MAX_FORBIDDEN};

/// Outcome of classifying one utterance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// A forbidden word was said. Carries the entry as declared on the card.
    TabooHit(String),
    /// The target word was said and target matching is enabled.
    TargetMatch,
    /// Nothing on the card was said.
    Neutral,
}

impl Verdict {
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        matches!(self, Verdict::Neutral)
    }
}

/// A card with its patterns tokenized once.
///
/// Speech transcription reclassifies the same card on every partial result,
/// so the engine keeps one of these for the active card.
#[derive(Clone, Debug)]
pub struct CardMatcher {
    forbidden: SmallVec<[(String, Tokens); MAX_FORBIDDEN]>,
    target: Tokens,
}

impl CardMatcher {
    pub fn new(card: &Card) -> Self {
        Self {
            forbidden: card
                .forbidden
                .iter()
                .map(|word| (word.clone(), tokenize(word)))
                .collect(),
            target: tokenize(&card.word),
        }
    }

    /// Classify an utterance.
    ///
    /// Forbidden entries are checked in declared order and win over the
    /// target word, so "birthday cake" on the Birthday card is a buzz.
    pub fn classify(&self, utterance: &str, target_match: bool) -> Verdict {
        let spoken = tokenize(utterance);
        if spoken.is_empty() {
            return Verdict::Neutral;
        }

        if let Some((word, _)) = self
            .forbidden
            .iter()
            .find(|(_, pattern)| contains_phrase(&spoken, pattern))
        {
            return Verdict::TabooHit(word.clone());
        }

        if target_match && contains_phrase(&spoken, &self.target) {
            return Verdict::TargetMatch;
        }

        Verdict::Neutral
    }
}

/// Classify `utterance` against `card`.
///
/// ```
/// use taboo_engine::cards::Card;
/// use taboo_engine::classify::{classify, Verdict};
///
/// let card = Card::new("Birthday", ["Cake", "Party", "Gift", "Candles", "Celebrate"]);
///
/// assert_eq!(classify("I love cake and candles", &card, true), Verdict::TabooHit("Cake".into()));
/// assert_eq!(classify("it is his birthday", &card, true), Verdict::TargetMatch);
/// assert_eq!(classify("it is his birthday", &card, false), Verdict::Neutral);
/// ```
pub fn classify(utterance: &str, card: &Card, target_match: bool) -> Verdict {
    CardMatcher::new(card).classify(utterance, target_match)
}
