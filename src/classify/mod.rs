//! Utterance classification.
//!
//! Decides whether a piece of text (typed guess or speech transcript) says a
//! forbidden word, the target word, or neither. Matching is whole-word and
//! tokenizer-based; no patterns are built from catalog strings.

pub mod classifier;
pub mod tokenizer;

pub use classifier::{classify, CardMatcher, Verdict};
pub use tokenizer::{contains_phrase, normalize, tokenize, Tokens};
