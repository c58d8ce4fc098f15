use super::*;

#[test]
fn show_replaces_current_notice() {
    let mut state = NoticeState::default();
    state.show(NoticeKind::Info, "first");
    state.show(NoticeKind::Success, "second");
    let current = state.current.expect("notice");
    assert_eq!(current.text, "second");
    assert_eq!(current.kind, NoticeKind::Success);
}

#[test]
fn stale_dismiss_keeps_newer_notice() {
    let mut state = NoticeState::default();
    let old = state.show(NoticeKind::Info, "first");
    let new = state.show(NoticeKind::Info, "second");
    assert!(!state.dismiss(old));
    assert!(state.current.is_some());
    assert!(state.dismiss(new));
    assert!(state.current.is_none());
}

#[test]
fn show_error_uses_user_facing_message() {
    let mut state = NoticeState::default();
    state.show_error(&ApiError::Unauthorized);
    let current = state.current.expect("notice");
    assert_eq!(current.kind, NoticeKind::Error);
    assert_eq!(current.text, "Your session has expired. Please log in again.");
}

#[test]
fn show_error_adds_connection_hint_for_network_failures() {
    let mut state = NoticeState::default();
    state.show_error(&ApiError::Network("Failed to fetch".to_owned()));
    let current = state.current.expect("notice");
    assert_eq!(current.kind, NoticeKind::Error);
    assert_eq!(current.text, "Network error: Failed to fetch. Check your connection and try again.");
}

#[test]
fn css_class_per_kind() {
    assert_eq!(NoticeKind::Error.css_class(), "notice notice--error");
    assert_eq!(NoticeKind::Success.css_class(), "notice notice--success");
}
