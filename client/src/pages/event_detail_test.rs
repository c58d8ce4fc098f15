use super::*;

fn event(capacity: Option<i64>, attendee_count: i64) -> Event {
    Event {
        id: 7,
        name: "Meetup".to_owned(),
        description: String::new(),
        date: "2026-03-14".to_owned(),
        time: Some("18:00".to_owned()),
        location: "Hall B".to_owned(),
        capacity,
        attendee_count,
    }
}

#[test]
fn cached_source_is_ready_without_fetch() {
    let cached = event(None, 3);
    assert_eq!(DetailStatus::from_source(EventSource::Cache(cached.clone())), DetailStatus::Ready(cached));
}

#[test]
fn fetch_source_starts_loading_and_unavailable_passes_through() {
    assert_eq!(DetailStatus::from_source(EventSource::Fetch), DetailStatus::Loading);
    assert_eq!(DetailStatus::from_source(EventSource::Unavailable), DetailStatus::Unavailable);
}

#[test]
fn capacity_line_shows_spots_left_when_capped() {
    assert_eq!(capacity_line(&event(Some(50), 20)), "20 / 50 attending (30 spots left)");
    assert_eq!(capacity_line(&event(Some(10), 12)), "12 / 10 attending (0 spots left)");
}

#[test]
fn capacity_line_for_uncapped_event() {
    assert_eq!(capacity_line(&event(None, 4)), "4 attending");
}
