//! Card values: a target word plus its forbidden words.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{TabooError, TabooResult};

/// Maximum number of forbidden words a card may carry.
pub const MAX_FORBIDDEN: usize = 6;

/// Inline storage for a card's forbidden words.
pub type ForbiddenList = SmallVec<[String; MAX_FORBIDDEN]>;

/// One word-guessing unit.
///
/// Cards are immutable values. Words and forbidden entries compare
/// case-insensitively when matched against utterances; the declared
/// spelling is kept for display and feedback.
///
/// ## Example
///
/// ```
/// use taboo_engine::cards::Card;
///
/// let card = Card::new("Pizza", ["Cheese", "Slice", "Sauce"]);
/// assert_eq!(card.word, "Pizza");
/// assert_eq!(card.forbidden.len(), 3);
/// assert!(card.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    /// The secret word the describer is trying to get guessed.
    pub word: String,

    /// Words or phrases that must not be said, in priority order.
    #[serde(alias = "taboo")]
    pub forbidden: ForbiddenList,
}

impl Card {
    /// Create a card.
    pub fn new<I, S>(word: impl Into<String>, forbidden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            word: word.into(),
            forbidden: forbidden.into_iter().map(Into::into).collect(),
        }
    }

    /// Check the card can be matched against utterances.
    pub fn validate(&self) -> TabooResult<()> {
        if !has_word_content(&self.word) {
            return Err(TabooError::configuration(format!(
                "card word {:?} has no letters or digits",
                self.word
            )));
        }
        if self.forbidden.is_empty() {
            return Err(TabooError::configuration(format!(
                "card {:?} has no forbidden words",
                self.word
            )));
        }
        if self.forbidden.len() > MAX_FORBIDDEN {
            return Err(TabooError::configuration(format!(
                "card {:?} has {} forbidden words (max {})",
                self.word,
                self.forbidden.len(),
                MAX_FORBIDDEN
            )));
        }
        if let Some(bad) = self.forbidden.iter().find(|f| !has_word_content(f)) {
            return Err(TabooError::configuration(format!(
                "card {:?} has an empty forbidden entry {:?}",
                self.word, bad
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.word.to_uppercase(), self.forbidden.join(", "))
    }
}

fn has_word_content(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}
