//! Word tokenization for whole-word matching.
//!
//! Text is split on every non-alphanumeric character and lowercased. A phrase
//! matches when its tokens appear as a contiguous run in the text's tokens,
//! so "cat" never matches inside "catalog" and "t-rex" matches "T Rex".

use smallvec::SmallVec;

/// Tokens of one utterance or phrase. Most phrases are a few words long.
pub type Tokens = SmallVec<[String; 8]>;

/// Split `text` into lowercase alphanumeric tokens.
///
/// ```
/// use taboo_engine::classify::tokenize;
///
/// assert_eq!(tokenize("It's a T-Rex!").as_slice(), &["it", "s", "a", "t", "rex"]);
/// assert!(tokenize(" ...? ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Tokens {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Canonical text form: tokens joined by single spaces.
#[must_use]
pub fn normalize(text: &str) -> String {
    tokenize(text).join(" ")
}

/// Whether `pattern` occurs as a contiguous token run in `haystack`.
///
/// An empty pattern never matches.
#[must_use]
pub fn contains_phrase(haystack: &[String], pattern: &[String]) -> bool {
    if pattern.is_empty() || pattern.len() > haystack.len() {
        return false;
    }
    haystack.windows(pattern.len()).any(|window| window == pattern)
}
