use super::*;

fn event(id: i64, name: &str) -> Event {
    Event {
        id,
        name: name.to_owned(),
        description: String::new(),
        date: "2026-05-01".to_owned(),
        time: None,
        location: String::new(),
        capacity: None,
        attendee_count: 0,
    }
}

#[test]
fn merge_synced_prepends_created_events() {
    let merged = merge_synced(vec![event(1, "old")], vec![event(2, "new")]);
    let ids = merged.iter().map(|e| e.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn merge_synced_replaces_stale_copy() {
    let merged = merge_synced(vec![event(1, "stale"), event(3, "other")], vec![event(1, "fresh")]);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].name, "fresh");
    assert_eq!(merged[1].id, 3);
}

#[test]
fn merge_synced_with_nothing_created_keeps_order() {
    let merged = merge_synced(vec![event(4, "a"), event(5, "b")], Vec::new());
    let ids = merged.iter().map(|e| e.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![4, 5]);
}
