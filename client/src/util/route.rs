//! Route parameter helpers.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Parse an `:event_id` segment. Non-numeric ids read as `None`.
pub fn parse_event_id(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim).and_then(|v| v.parse::<i64>().ok()).filter(|id| *id > 0)
}

/// Reactive `:event_id` of the current route.
pub fn use_event_id() -> Memo<Option<i64>> {
    let params = use_params_map();
    Memo::new(move |_| parse_event_id(params.read().get("event_id").as_deref()))
}

pub fn event_path(event_id: i64) -> String {
    format!("/events/{event_id}")
}

pub fn check_in_path(event_id: i64) -> String {
    format!("/events/{event_id}/check-in")
}

pub fn communication_path(event_id: i64) -> String {
    format!("/events/{event_id}/communication")
}

pub fn activities_path(event_id: i64) -> String {
    format!("/events/{event_id}/activities")
}
