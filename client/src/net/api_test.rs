use super::*;
use roster::MemoryStore;

#[test]
fn authorization_uses_token_scheme() {
    let store = MemoryStore::new();
    store.set_item(keys::AUTH_TOKEN, "9f1c").expect("seed");
    assert_eq!(authorization(&store).as_deref(), Some("Token 9f1c"));
}

#[test]
fn authorization_absent_without_token() {
    let store = MemoryStore::new();
    assert_eq!(authorization(&store), None);
    store.set_item(keys::AUTH_TOKEN, "").expect("seed");
    assert_eq!(authorization(&store), None);
}

#[test]
fn network_error_keeps_transport_message() {
    let err = network_error("connection refused");
    assert!(err.is_network());
    assert_eq!(err.to_string(), "Network error: connection refused");
}

#[test]
fn decode_body_reads_paginated_list() {
    let body = r#"{"count":1,"results":[{"id":3,"name":"Mixer","date":"2026-06-01","attendee_count":2}]}"#;
    let events = decode_body::<Listing<Event>>(body).expect("decode").into_vec();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Mixer");
}

#[test]
fn decode_body_reports_bad_json_as_decode_error() {
    let err = decode_body::<Event>("<html>").expect_err("must fail");
    assert!(matches!(err, ApiError::Decode(_)));
}
