use super::*;

#[test]
fn prepare_response_trims_and_rejects_blank() {
    assert_eq!(prepare_response("  red  ").as_deref(), Some("red"));
    assert_eq!(prepare_response(" \n "), None);
}

#[test]
fn awarded_message_includes_total_when_known() {
    let with_total = ActivityResponse { points_awarded: 10, total_points: Some(35) };
    assert_eq!(awarded_message(&with_total), "+10 points (35 total)");
    let bare = ActivityResponse { points_awarded: 5, total_points: None };
    assert_eq!(awarded_message(&bare), "+5 points");
}
