//! Light/dark theme selection and its persisted form.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the persisted theme.
pub const THEME_KEY: &str = "theme";

/// The presentation theme. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other theme. `t.toggled().toggled() == t`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Persisted and CSS class form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted theme string that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Resolves the startup theme and writes changes back to a store.
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    store: S,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Theme to start with.
    ///
    /// A valid persisted value wins. Otherwise the platform dark-mode signal
    /// decides, and `light` is used when that signal is unavailable (`None`).
    /// An unreadable store or a garbled value counts as "nothing persisted".
    pub fn initial(&self, platform_dark: Option<bool>) -> ThemeMode {
        let persisted = self
            .store
            .get(THEME_KEY)
            .ok()
            .flatten()
            .and_then(|value| value.parse::<ThemeMode>().ok());

        match (persisted, platform_dark) {
            (Some(mode), _) => mode,
            (None, Some(true)) => ThemeMode::Dark,
            (None, _) => ThemeMode::Light,
        }
    }

    /// Writes `mode` under [`THEME_KEY`].
    pub fn persist(&mut self, mode: ThemeMode) -> Result<(), StorageError> {
        self.store.set(THEME_KEY, mode.as_str())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_toggle_is_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" dark\n".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(
            "blue".parse::<ThemeMode>(),
            Err(ThemeParseError("blue".to_string()))
        );
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn test_persisted_value_wins_over_platform() {
        let pref = ThemePreference::new(MemoryStore::with_entry(THEME_KEY, "light"));
        assert_eq!(pref.initial(Some(true)), ThemeMode::Light);

        let pref = ThemePreference::new(MemoryStore::with_entry(THEME_KEY, "dark"));
        assert_eq!(pref.initial(Some(false)), ThemeMode::Dark);
    }

    #[test]
    fn test_platform_signal_used_when_nothing_persisted() {
        let pref = ThemePreference::new(MemoryStore::new());
        assert_eq!(pref.initial(Some(true)), ThemeMode::Dark);
        assert_eq!(pref.initial(Some(false)), ThemeMode::Light);
        assert_eq!(pref.initial(None), ThemeMode::Light);
    }

    #[test]
    fn test_garbled_or_unreadable_value_is_ignored() {
        let pref = ThemePreference::new(MemoryStore::with_entry(THEME_KEY, "sepia"));
        assert_eq!(pref.initial(Some(true)), ThemeMode::Dark);

        let pref = ThemePreference::new(MemoryStore::unavailable());
        assert_eq!(pref.initial(None), ThemeMode::Light);
        assert_eq!(pref.initial(Some(true)), ThemeMode::Dark);
    }

    #[test]
    fn test_persist_writes_through() {
        let mut pref = ThemePreference::new(MemoryStore::new());
        pref.persist(ThemeMode::Dark).unwrap();
        assert_eq!(pref.store().peek(THEME_KEY), Some("dark"));
        assert_eq!(pref.initial(None), ThemeMode::Dark);
    }

    #[test]
    fn test_persist_reports_unavailable_store() {
        let mut pref = ThemePreference::new(MemoryStore::unavailable());
        assert_eq!(pref.persist(ThemeMode::Dark), Err(StorageError::Unavailable));
    }
}
