//! Backend origin resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The REST API and chat socket live on an external backend. Its origin is
//! baked in at build time from `ROLLCALL_API_URL`; unset builds talk to a
//! local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use roster::endpoints;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Backend origin without a trailing slash.
pub fn api_base() -> String {
    resolve_api_base(option_env!("ROLLCALL_API_URL"))
}

/// Absolute URL for an API path.
pub fn api_url(path: &str) -> String {
    endpoints::join(&api_base(), path)
}

/// `ws://` / `wss://` origin matching the API origin.
pub fn socket_base() -> String {
    endpoints::socket_base(&api_base())
}

fn resolve_api_base(raw: Option<&str>) -> String {
    let base = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    base.trim_end_matches('/').to_owned()
}
