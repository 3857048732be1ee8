//! Light/dark theme preference.
//!
//! The preference is a single string under [`THEME_STORAGE_KEY`], read once
//! at startup and written on every toggle. Storage sits behind
//! [`PreferenceStore`] so the browser's `localStorage` and an in-memory map
//! are interchangeable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage key for the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// How long the colour transition stays on `<html>` after a toggle.
pub const THEME_TRANSITION_MS: u32 = 300;

/// CSS transition applied while the theme changes.
pub const THEME_TRANSITION_CSS: &str = "background-color 0.3s ease, color 0.3s ease";

/// Error returned when parsing a persisted theme string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ThemeError(pub String);

/// Failure reading or writing the preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage backend is available (private mode, disabled storage).
    #[error("preference storage is unavailable")]
    Unavailable,
    /// The backend rejected the write.
    #[error("failed to write preference {key:?}: {reason}")]
    WriteFailed { key: String, reason: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Value written to `data-theme` and to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError(other.to_owned())),
        }
    }
}

/// Pick the starting theme: a valid saved value wins, otherwise follow the
/// system preference (dark unless the system asks for light).
#[must_use]
pub fn resolve_initial(saved: Option<&str>, system_prefers_dark: bool) -> Theme {
    if let Some(Ok(theme)) = saved.map(str::parse::<Theme>) {
        return theme;
    }
    if system_prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend is missing or rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and for pages without `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Current theme plus the store it persists to.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the saved preference once and resolve the starting theme.
    pub fn load(store: S, system_prefers_dark: bool) -> Self {
        let saved = store.get(THEME_STORAGE_KEY);
        let theme = resolve_initial(saved.as_deref(), system_prefers_dark);
        Self { store, theme }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip the theme and persist it.
    ///
    /// The in-memory theme flips even when persisting fails, so the page
    /// still switches; only the saved value is stale.
    ///
    /// # Errors
    ///
    /// Returns the store's [`StoreError`] when the write fails.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        self.theme = self.theme.toggled();
        self.store.set(THEME_STORAGE_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }
}
