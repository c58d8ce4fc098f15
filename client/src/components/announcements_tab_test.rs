use super::*;

fn announcement(id: i64, pinned: bool) -> Announcement {
    Announcement {
        id,
        title: format!("a{id}"),
        content: String::new(),
        author_name: "host".to_owned(),
        created_at: String::new(),
        is_pinned: pinned,
    }
}

#[test]
fn pinned_first_keeps_backend_order_within_groups() {
    let sorted = pinned_first(vec![
        announcement(1, false),
        announcement(2, true),
        announcement(3, false),
        announcement(4, true),
    ]);
    let ids = sorted.iter().map(|a| a.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![2, 4, 1, 3]);
}
