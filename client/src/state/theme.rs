//! Light/dark theme ownership.
//!
//! DESIGN
//! ======
//! `ThemeController` is the single owner of the theme flag for a page
//! session. It resolves the initial value from a `ThemeStore`, persists on
//! every toggle, and fans the new value out to observers synchronously.
//! Persistence is best-effort: the in-memory value is authoritative and
//! storage failures only produce a warning.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Active color palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted and `data-theme` representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a [`ThemeStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("theme storage unavailable")]
    Unavailable,
    #[error("theme storage read failed: {0}")]
    Read(String),
    #[error("theme storage write failed: {0}")]
    Write(String),
}

/// Key/value persistence for the theme preference.
pub trait ThemeStore {
    /// Read the raw persisted value, `Ok(None)` when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist the raw value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing storage rejects the write.
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// Callback invoked with the new theme after every change.
pub type ThemeObserver = Box<dyn Fn(Theme) + Send + Sync>;

/// Owner of the theme flag for one page session.
pub struct ThemeController<S> {
    theme: Theme,
    store: S,
    observers: Vec<ThemeObserver>,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Create a controller whose initial theme is read from `store`.
    ///
    /// Missing, unreadable, or unrecognised values fall back to [`Theme::Light`].
    pub fn init(store: S) -> Self {
        let theme = resolve_initial(&store);
        Self { theme, store, observers: Vec::new() }
    }

    /// Create a controller with a known theme, without touching storage.
    ///
    /// Used for server rendering where no browser storage exists.
    pub fn with_theme(store: S, theme: Theme) -> Self {
        Self { theme, store, observers: Vec::new() }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register an observer. It is not called for the current value.
    pub fn subscribe(&mut self, observer: impl Fn(Theme) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Flip the theme, persist it, and notify observers. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.theme = next;
        if let Err(e) = self.store.save(next.as_str()) {
            leptos::logging::warn!("theme not persisted ({next}): {e}");
        }
        self.notify();
        next
    }

    /// Re-read the persisted preference and notify observers if it differs.
    ///
    /// Hydration starts from the server-rendered default and calls this once
    /// the browser storage is reachable.
    pub fn reload(&mut self) -> Theme {
        let stored = resolve_initial(&self.store);
        if stored != self.theme {
            self.theme = stored;
            self.notify();
        }
        self.theme
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(self.theme);
        }
    }
}

impl<S> fmt::Debug for ThemeController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("theme", &self.theme)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

fn resolve_initial<S: ThemeStore>(store: &S) -> Theme {
    match store.load() {
        Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_default(),
        Ok(None) => Theme::default(),
        Err(e) => {
            leptos::logging::warn!("theme preference unreadable, using default: {e}");
            Theme::default()
        }
    }
}
