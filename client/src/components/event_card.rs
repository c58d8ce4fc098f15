//! Card for an event on the dashboard.
//!
//! DESIGN
//! ======
//! Confirmed events link to their detail page. Events created offline have
//! no id yet, so they render the same card without a link and with a
//! "pending sync" marker.

use leptos::prelude::*;

use crate::net::types::{Event, NewEvent};
use crate::util::route::{check_in_path, event_path};

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let href = event_path(event.id);
    let check_in = check_in_path(event.id);
    let location = Some(event.location.clone()).filter(|l| !l.is_empty());
    let seats = match event.spots_left() {
        Some(left) => format!("{} attending, {left} spots left", event.attendee_count),
        None => format!("{} attending", event.attendee_count),
    };

    view! {
        <article class="event-card">
            <a class="event-card__title" href=href>{event.name.clone()}</a>
            <p class="event-card__when">{event.when()}</p>
            {location.map(|location| view! { <p class="event-card__location">{location}</p> })}
            <p class="event-card__seats">{seats}</p>
            <a class="btn event-card__check-in" href=check_in>"Check in guests"</a>
        </article>
    }
}

#[component]
pub fn PendingEventCard(draft: NewEvent) -> impl IntoView {
    let when = match draft.time.as_deref() {
        Some(time) if !time.is_empty() => format!("{} {time}", draft.date),
        _ => draft.date.clone(),
    };

    view! {
        <article class="event-card event-card--pending">
            <span class="event-card__title">{draft.name}</span>
            <p class="event-card__when">{when}</p>
            <p class="event-card__location">{draft.location}</p>
            <span class="event-card__badge">"Pending sync"</span>
        </article>
    }
}
