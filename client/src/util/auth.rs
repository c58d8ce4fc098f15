//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except the landing, login and register pages applies the same
//! unauthenticated redirect. Sign-out also lives here so the nav bar and the
//! 401 handling in pages share one path.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use roster::ApiError;

use crate::state::auth::AuthState;
use crate::util::storage::LocalStore;

/// True once auth has loaded and there is no signed-in user.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Drop the local session. The server-side logout call is best effort.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::logout().await {
            leptos::logging::warn!("logout request failed: {e}");
        }
    });
    auth.update(|state| state.sign_out(&LocalStore));
}

/// Sign out when a request came back 401 so the guard sends the user to
/// `/login`. Returns whether the error was handled that way.
pub fn expire_on_unauthorized(auth: RwSignal<AuthState>, error: &ApiError) -> bool {
    if matches!(error, ApiError::Unauthorized) {
        auth.update(|state| state.sign_out(&LocalStore));
        return true;
    }
    false
}
