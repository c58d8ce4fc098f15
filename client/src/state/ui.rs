//! Local UI chrome state: stored preferences and the mobile nav toggle.
//!
//! DESIGN
//! ======
//! Preferences live under `userSettings` and are per-browser only; nothing is
//! sent to the backend. Presentation toggles stay out of `auth` so the nav
//! bar can change without touching session state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use roster::storage::{keys, load_json, save_json};
use roster::{KeyValueStore, StorageError};

use crate::net::types::UserSettings;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub settings: UserSettings,
    pub nav_open: bool,
}

impl UiState {
    /// Settings previously saved in this browser, if any.
    pub fn stored_settings<S: KeyValueStore + ?Sized>(store: &S) -> Option<UserSettings> {
        load_json(store, keys::USER_SETTINGS)
    }

    /// Replace and persist the settings blob.
    ///
    /// # Errors
    ///
    /// Returns the storage failure; the new settings still apply to this tab.
    pub fn save_settings<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        settings: UserSettings,
    ) -> Result<(), StorageError> {
        self.settings = settings;
        save_json(store, keys::USER_SETTINGS, &self.settings)
    }

    /// Flip dark mode, persist, and return the new value.
    ///
    /// # Errors
    ///
    /// Returns the storage failure from [`Self::save_settings`].
    pub fn toggle_dark_mode<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> Result<bool, StorageError> {
        let next = UserSettings { dark_mode: !self.settings.dark_mode, ..self.settings.clone() };
        self.save_settings(store, next)?;
        Ok(self.settings.dark_mode)
    }
}
