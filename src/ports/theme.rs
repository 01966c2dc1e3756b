//! Visual theme preference.

use serde::{Deserialize, Serialize};

use super::preferences::PreferenceStore;

/// Preference key the theme is stored under.
pub const THEME_PREFERENCE_KEY: &str = "taboo_theme";

/// Available visual themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Harry,
    Batman,
    Superman,
    Avatar,
    Marvel,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Default,
        Theme::Harry,
        Theme::Batman,
        Theme::Superman,
        Theme::Avatar,
        Theme::Marvel,
    ];

    /// Stored preference value.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Harry => "harry",
            Theme::Batman => "batman",
            Theme::Superman => "superman",
            Theme::Avatar => "avatar",
            Theme::Marvel => "marvel",
        }
    }

    /// Style class the presentation layer applies.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Theme::Default => "theme-default",
            Theme::Harry => "theme-harry",
            Theme::Batman => "theme-batman",
            Theme::Superman => "theme-superman",
            Theme::Avatar => "theme-avatar",
            Theme::Marvel => "theme-marvel",
        }
    }

    /// Parse a stored value. Unknown values yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Saved theme, or `Default` when nothing usable is stored.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        store
            .load_preference(THEME_PREFERENCE_KEY)
            .and_then(|v| Self::from_key(&v))
            .unwrap_or_default()
    }

    pub fn save(self, store: &mut dyn PreferenceStore) {
        store.save_preference(THEME_PREFERENCE_KEY, self.key());
    }
}
