use super::*;

fn form() -> EventForm {
    EventForm {
        name: "  Launch party ".to_owned(),
        description: " Drinks ".to_owned(),
        date: "2026-06-01".to_owned(),
        time: String::new(),
        location: "Rooftop".to_owned(),
        capacity: String::new(),
    }
}

#[test]
fn build_new_event_trims_and_leaves_optionals_empty() {
    let draft = build_new_event(&form()).unwrap();
    assert_eq!(draft.name, "Launch party");
    assert_eq!(draft.description, "Drinks");
    assert_eq!(draft.time, None);
    assert_eq!(draft.capacity, None);
}

#[test]
fn build_new_event_parses_time_and_capacity() {
    let input = EventForm { time: "19:30".to_owned(), capacity: " 120 ".to_owned(), ..form() };
    let draft = build_new_event(&input).unwrap();
    assert_eq!(draft.time.as_deref(), Some("19:30"));
    assert_eq!(draft.capacity, Some(120));
}

#[test]
fn build_new_event_requires_name_and_date() {
    let input = EventForm { name: "   ".to_owned(), ..form() };
    assert_eq!(build_new_event(&input), Err("Name and date are required."));
    let input = EventForm { date: String::new(), ..form() };
    assert_eq!(build_new_event(&input), Err("Name and date are required."));
}

#[test]
fn build_new_event_rejects_bad_capacity() {
    for raw in ["0", "-5", "lots", "2.5"] {
        let input = EventForm { capacity: raw.to_owned(), ..form() };
        assert_eq!(build_new_event(&input), Err("Capacity must be a positive whole number."), "{raw}");
    }
}
