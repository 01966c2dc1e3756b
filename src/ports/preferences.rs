//! Cosmetic preference storage.
//!
//! Game state is never stored here; a restart always begins a fresh round.

use rustc_hash::FxHashMap;

/// Key-value store for cosmetic settings.
pub trait PreferenceStore {
    fn load_preference(&self, key: &str) -> Option<String>;
    fn save_preference(&mut self, key: &str, value: &str);
}

/// In-memory store, for tests and hosts without persistent storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: FxHashMap<String, String>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_preference(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save_preference(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
