use super::*;

#[test]
fn tabs_start_on_messages() {
    assert_eq!(HubTab::default(), HubTab::Messages);
}

#[test]
fn tab_labels_are_unique_and_ordered() {
    let labels = HubTab::ALL.iter().map(|t| t.label()).collect::<Vec<_>>();
    assert_eq!(labels, vec!["Messages", "Announcements", "Forum", "Q&A"]);
}
