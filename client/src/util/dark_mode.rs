//! Dark mode initialization and application.
//!
//! Reads the stored `userSettings.dark_mode` flag and applies a `data-theme`
//! attribute to the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Without a stored preference the system color scheme decides. SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::ui::UiState;
use crate::util::storage::LocalStore;

/// Stored dark mode preference, or the system preference when none is stored.
pub fn read_preference() -> bool {
    if let Some(settings) = UiState::stored_settings(&LocalStore) {
        return settings.dark_mode;
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(query)) => query.matches(),
            _ => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// `data-theme` value for a dark mode flag.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(e) = el.set_attribute("data-theme", theme_name(enabled)) {
                leptos::logging::warn!("set data-theme failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
