//! Light/dark theme preference.
//!
//! The preference is an explicit value handed to whatever renders the UI.
//! It is read once at start-up (stored choice, then the system setting, then
//! light) and written back through its store on every change.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Storage key used for the persisted preference.
pub const THEME_STORAGE_KEY: &str = "darkMode";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        Theme::from_dark(!self.is_dark())
    }

    /// Glyph for the control that switches away from this theme.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

/// Where the user's choice is persisted between sessions.
pub trait PreferenceStore {
    /// The stored choice, if any.
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme);
}

/// A store that keeps the `darkMode` flag as JSON text under
/// [`THEME_STORAGE_KEY`], the way browser local storage does.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        let raw = self.get(THEME_STORAGE_KEY)?;
        match serde_json::from_str::<bool>(raw) {
            Ok(dark) => Some(Theme::from_dark(dark)),
            Err(err) => {
                debug!(%err, raw, "ignoring unreadable theme preference");
                None
            }
        }
    }

    fn save(&mut self, theme: Theme) {
        self.set(THEME_STORAGE_KEY, theme.is_dark().to_string());
    }
}

/// The active theme plus the store it is persisted to.
#[derive(Debug)]
pub struct ThemePreference<S> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Resolve the starting theme: stored choice, then `system`, then light.
    pub fn initialize(store: S, system: Option<Theme>) -> Self {
        let theme = store.load().or(system).unwrap_or_default();
        debug!(?theme, "initialised theme");
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Change the theme and persist it.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.save(theme);
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_choice_wins() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "false");
        let pref = ThemePreference::initialize(store, Some(Theme::Dark));
        assert_eq!(pref.theme(), Theme::Light);
    }

    #[test]
    fn test_system_used_without_stored_choice() {
        let pref = ThemePreference::initialize(MemoryStore::new(), Some(Theme::Dark));
        assert_eq!(pref.theme(), Theme::Dark);
    }

    #[test]
    fn test_defaults_to_light() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "not json");
        let pref = ThemePreference::initialize(store, None);
        assert_eq!(pref.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut pref = ThemePreference::initialize(MemoryStore::new(), None);
        assert_eq!(pref.theme().toggle_icon(), "🌙");
        assert_eq!(pref.toggle(), Theme::Dark);
        assert_eq!(pref.store().get(THEME_STORAGE_KEY), Some("true"));
        assert_eq!(pref.theme().toggle_icon(), "☀️");
    }
}
