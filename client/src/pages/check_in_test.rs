use super::*;
use roster::checkin::offline_record;

fn submit(code: &str) -> ScanDecision {
    ScanDecision::Submit(code.to_owned())
}

#[test]
fn scan_gate_drops_repeated_frames() {
    let mut gate = ScanGate::default();
    assert_eq!(gate.decide("abc", false), submit("abc"));
    assert_eq!(gate.decide("abc", false), ScanDecision::Repeat);
    assert_eq!(gate.decide("def", false), submit("def"));
    assert_eq!(gate.decide("abc", false), submit("abc"));
}

#[test]
fn scan_gate_reset_allows_same_code_again() {
    let mut gate = ScanGate::default();
    assert_eq!(gate.decide("abc", false), submit("abc"));
    gate.reset();
    assert_eq!(gate.decide("abc", false), submit("abc"));
}

#[test]
fn scan_during_request_is_retried_on_next_frame() {
    let mut gate = ScanGate::default();
    assert_eq!(gate.decide("A", false), submit("A"));
    assert_eq!(gate.decide("B", true), ScanDecision::Busy);
    assert_eq!(gate.decide("B", true), ScanDecision::Busy);
    assert_eq!(gate.decide("B", false), submit("B"));
}

#[test]
fn scan_gate_keys_on_normalised_code() {
    let mut gate = ScanGate::default();
    assert_eq!(gate.decide("\"abc\"", false), submit("abc"));
    assert_eq!(gate.decide(" abc ", false), ScanDecision::Repeat);
    assert_eq!(gate.decide("abc", false), ScanDecision::Repeat);
    assert_eq!(gate.decide(" '' ", false), ScanDecision::Empty);
}

#[test]
fn push_recent_prepends_and_caps() {
    let mut recent = Vec::new();
    for n in 0..25 {
        push_recent(&mut recent, offline_record(&format!("code-{n}")));
    }
    assert_eq!(recent.len(), RECENT_LIMIT);
    assert_eq!(recent[0].qr_code.as_deref(), Some("code-24"));
}

#[test]
fn connectivity_message_reports_pending_count() {
    assert_eq!(connectivity_message(ConnectivityChange::Unchanged), None);
    assert_eq!(
        connectivity_message(ConnectivityChange::CameOnline { pending: 0 }).as_deref(),
        Some("Back online.")
    );
    let message = connectivity_message(ConnectivityChange::CameOnline { pending: 3 }).unwrap();
    assert!(message.contains("3 check-in(s) waiting"));
    assert!(connectivity_message(ConnectivityChange::WentOffline).unwrap().contains("offline"));
}
