//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` is provided at the app root. Route guards read
//! it to decide on `/login` redirects; API calls read the token from
//! `localStorage` directly, so the persisted pair (`auth_token`,
//! `user_data`) is the source of truth across reloads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use roster::storage::{keys, load_json, save_json};
use roster::{KeyValueStore, StorageError};

use crate::net::types::{AuthResponse, User};

/// Authentication state tracking the current user, token and loading status.
///
/// `loading` starts `true` and drops once the persisted session has been
/// read in the browser, so guards never redirect during hydration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, token: None, loading: true }
    }
}

impl AuthState {
    /// Read the persisted session. A token without a decodable user (or the
    /// reverse) counts as signed out.
    pub fn restore<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let token = store.get_item(keys::AUTH_TOKEN).filter(|t| !t.is_empty());
        let user = load_json::<_, User>(store, keys::USER_DATA);
        match (token, user) {
            (Some(token), Some(user)) => Self { user: Some(user), token: Some(token), loading: false },
            _ => Self { user: None, token: None, loading: false },
        }
    }

    /// Adopt a login/register response and persist it.
    ///
    /// # Errors
    ///
    /// Returns the storage failure; in-memory state is updated regardless so
    /// the current tab stays signed in.
    pub fn sign_in<S: KeyValueStore + ?Sized>(&mut self, store: &S, response: AuthResponse) -> Result<(), StorageError> {
        let persisted = store
            .set_item(keys::AUTH_TOKEN, &response.token)
            .and_then(|()| save_json(store, keys::USER_DATA, &response.user));
        self.token = Some(response.token);
        self.user = Some(response.user);
        self.loading = false;
        persisted
    }

    /// Forget the session locally.
    pub fn sign_out<S: KeyValueStore + ?Sized>(&mut self, store: &S) {
        store.remove_item(keys::AUTH_TOKEN);
        store.remove_item(keys::USER_DATA);
        self.user = None;
        self.token = None;
        self.loading = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Name shown in the nav bar.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map(User::display_name).unwrap_or_default()
    }
}
