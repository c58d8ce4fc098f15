use super::*;

#[test]
fn parse_event_id_accepts_positive_integers() {
    assert_eq!(parse_event_id(Some("42")), Some(42));
    assert_eq!(parse_event_id(Some(" 7 ")), Some(7));
}

#[test]
fn parse_event_id_rejects_junk() {
    assert_eq!(parse_event_id(None), None);
    assert_eq!(parse_event_id(Some("new")), None);
    assert_eq!(parse_event_id(Some("0")), None);
    assert_eq!(parse_event_id(Some("-3")), None);
}

#[test]
fn event_paths() {
    assert_eq!(event_path(5), "/events/5");
    assert_eq!(check_in_path(5), "/events/5/check-in");
    assert_eq!(communication_path(5), "/events/5/communication");
    assert_eq!(activities_path(5), "/events/5/activities");
}
