//! Running speech transcript shown during a round.
//!
//! Finalized chunks accumulate; the latest interim chunk is shown after them
//! until a final result replaces it.

/// Display buffer for transcribed speech.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    finals: String,
    interim: String,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized chunk and drop the pending interim text.
    pub fn push_final(&mut self, text: &str) {
        append(&mut self.finals, text.trim());
        self.interim.clear();
    }

    /// Replace the pending interim text.
    pub fn set_interim(&mut self, text: &str) {
        self.interim = text.trim().to_string();
    }

    /// Mark that a forbidden word was caught.
    pub fn mark_buzz(&mut self, word: &str) {
        append(&mut self.finals, &format!("[BUZZ: {}]", word.to_uppercase()));
    }

    pub fn clear(&mut self) {
        self.finals.clear();
        self.interim.clear();
    }

    /// Text to display.
    #[must_use]
    pub fn display(&self) -> String {
        let mut out = self.finals.clone();
        append(&mut out, &self.interim);
        out
    }
}

fn append(buf: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !buf.is_empty() {
        buf.push(' ');
    }
    buf.push_str(text);
}
