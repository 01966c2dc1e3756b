//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use once_cell::sync::OnceCell;
use taboo_engine::{Catalog, PresentationSink, RoundConfig, RoundEngine, RoundSnapshot, SpeechSink};
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Keeps every snapshot the engine renders.
#[derive(Clone, Default)]
pub struct RecordingPresentation {
    pub snapshots: Rc<RefCell<Vec<RoundSnapshot>>>,
}

impl PresentationSink for RecordingPresentation {
    fn render(&mut self, snapshot: &RoundSnapshot) {
        self.snapshots.borrow_mut().push(snapshot.clone());
    }
}

impl RecordingPresentation {
    pub fn last(&self) -> Option<RoundSnapshot> {
        self.snapshots.borrow().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.snapshots.borrow().len()
    }
}

/// Keeps everything the engine speaks.
#[derive(Clone, Default)]
pub struct RecordingSpeech {
    pub spoken: Rc<RefCell<Vec<String>>>,
}

impl SpeechSink for RecordingSpeech {
    fn speak(&mut self, text: &str) {
        self.spoken.borrow_mut().push(text.to_string());
    }
}

impl RecordingSpeech {
    pub fn lines(&self) -> Vec<String> {
        self.spoken.borrow().clone()
    }
}

/// Seeded engine over the built-in catalog, in catalog order.
pub fn ordered_engine(config: RoundConfig) -> RoundEngine {
    init_logging();
    RoundEngine::new(Catalog::default_cards(), config.with_shuffle(false).with_seed(42))
        .expect("valid config")
}
