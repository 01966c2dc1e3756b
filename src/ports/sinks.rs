//! Output sinks.

use crate::round::RoundSnapshot;

/// Renders round state. Called with a fresh snapshot after every change.
pub trait PresentationSink {
    fn render(&mut self, snapshot: &RoundSnapshot);
}

/// Speaks text aloud. No acknowledgment is expected.
pub trait SpeechSink {
    fn speak(&mut self, text: &str);
}

impl<F> PresentationSink for F
where
    F: FnMut(&RoundSnapshot),
{
    fn render(&mut self, snapshot: &RoundSnapshot) {
        self(snapshot)
    }
}

impl<F> SpeechSink for F
where
    F: FnMut(&str),
{
    fn speak(&mut self, text: &str) {
        self(text)
    }
}
