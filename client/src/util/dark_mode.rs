//! Browser side of the theme: `localStorage` persistence and the `data-theme`
//! attribute on `<html>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeHandle` is created once in `App` and shared through context. It owns
//! the page's `ThemeController` and mirrors the current theme into a signal
//! so components can react to it.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic. The server always
//! renders the light theme and hydration re-reads storage.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use leptos::prelude::*;

use crate::config::THEME_STORAGE_KEY;
use crate::state::theme::{StorageError, Theme, ThemeController, ThemeStore};

/// `ThemeStore` backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeStore;

impl ThemeStore for BrowserThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(THEME_STORAGE_KEY)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(THEME_STORAGE_KEY, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Ok(())
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Inline script for `<head>` that sets `data-theme` before first paint, so
/// a stored dark preference does not flash light while the WASM loads. The
/// stored value is normalised the same way as [`Theme::parse`].
#[must_use]
pub fn preload_script() -> String {
    format!(
        "try{{if((localStorage.getItem('{THEME_STORAGE_KEY}')||'').trim().toLowerCase()==='dark'){{document.documentElement.setAttribute('data-theme','dark')}}}}catch(e){{}}"
    )
}

/// Shared theme owner provided through Leptos context.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    controller: StoredValue<ThemeController<BrowserThemeStore>>,
    theme: RwSignal<Theme>,
}

impl ThemeHandle {
    /// Handle starting from the default theme. Storage is read later by
    /// [`ThemeHandle::sync_from_storage`], once running in the browser.
    #[must_use]
    pub fn new() -> Self {
        let mut controller = ThemeController::with_theme(BrowserThemeStore, Theme::default());
        let theme = RwSignal::new(controller.theme());
        controller.subscribe(move |next| {
            apply(next);
            theme.set(next);
        });
        Self { controller: StoredValue::new(controller), theme }
    }

    /// Create the handle and put it in context for descendants.
    pub fn provide() -> Self {
        let handle = Self::new();
        provide_context(handle);
        handle
    }

    /// Reactive theme.
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }

    pub fn toggle(&self) {
        self.controller.update_value(|controller| {
            controller.toggle();
        });
    }

    /// Pick up the persisted preference and stamp `data-theme`.
    pub fn sync_from_storage(&self) {
        self.controller.update_value(|controller| {
            let theme = controller.reload();
            apply(theme);
        });
    }
}

impl Default for ThemeHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Theme handle provided by `App`.
pub fn use_theme() -> ThemeHandle {
    expect_context::<ThemeHandle>()
}
