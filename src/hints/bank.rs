//! Phrase templates and clue fragments for CPU hints.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Placeholder a template's clue fragment is substituted into.
pub const SLOT: &str = "{}";

/// Raw material for hint sentences.
///
/// A hint is a template with its `{}` slot replaced by a clue fragment.
/// Fragments come from the card's own clue list plus a generic list that
/// applies to any card.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PhraseBank {
    templates: Vec<String>,
    /// Card-specific fragments keyed by lowercase card word.
    clues: FxHashMap<String, Vec<String>>,
    generic: Vec<String>,
}

impl PhraseBank {
    /// Create a bank with the given sentence templates.
    pub fn new<I, S>(templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            templates: templates.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add clue fragments for one card word (builder pattern).
    #[must_use]
    pub fn with_clues<I, S>(mut self, word: &str, clues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clues
            .entry(word.to_lowercase())
            .or_default()
            .extend(clues.into_iter().map(Into::into));
        self
    }

    /// Add fragments usable for every card (builder pattern).
    #[must_use]
    pub fn with_generic<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generic.extend(fragments.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// Every fragment that may describe `word`: its own clues, then generic ones.
    pub fn fragments_for<'a>(&'a self, word: &str) -> impl Iterator<Item = &'a String> + 'a {
        self.clues
            .get(&word.to_lowercase())
            .into_iter()
            .flatten()
            .chain(self.generic.iter())
    }

    /// The bank shipped with the built-in catalog.
    ///
    /// Some clues deliberately mention a forbidden word; the generator
    /// filters those out.
    #[must_use]
    pub fn default_bank() -> Self {
        Self::new([
            "Think about {}.",
            "It has something to do with {}.",
            "Picture {}.",
            "People often connect it with {}.",
        ])
        .with_generic(["something most people know", "an everyday thing"])
        .with_clues("Birthday", ["getting a year older", "a yearly occasion", "a party hat", "blowing out a flame"])
        .with_clues("Pizza", ["a round dish from the oven", "dough and tomato", "delivery on a Friday night"])
        .with_clues("Laptop", ["a folding machine with a battery", "a screen you can carry", "typing on the train"])
        .with_clues("Doctor", ["someone in a white coat", "a checkup", "a stethoscope"])
        .with_clues("Cricket", ["eleven players a side", "a chirping insect", "a long summer match"])
        .with_clues("Guitar", ["six tuned wires", "a campfire song", "a rock band"])
        .with_clues("Coffee", ["an espresso machine", "a barista", "a morning habit"])
        .with_clues("Airplane", ["boarding passes", "a runway", "a window seat high above the clouds"])
        .with_clues("Library", ["a due date", "silence please", "rows of novels"])
        .with_clues("Dinosaur", ["millions of years ago", "a museum skeleton", "a T-Rex roar"])
        .with_clues("Robot", ["beeps and gears", "a droid", "science fiction helpers"])
        .with_clues("Camera", ["saying cheese", "a flash", "a tripod"])
        .with_clues("Beach", ["a towel and sunscreen", "building castles", "the coast"])
        .with_clues("Football", ["a penalty shot", "ninety minutes", "the World Cup"])
        .with_clues("Chocolate", ["a treat from cacao", "melting in your hand", "a dessert bar"])
    }
}
