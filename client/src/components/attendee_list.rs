//! Attendee table for the event detail page.

use leptos::prelude::*;
use roster::cache::checked_in_count;

use crate::net::types::Attendee;

#[component]
pub fn AttendeeList(#[prop(into)] attendees: Signal<Vec<Attendee>>) -> impl IntoView {
    let summary = move || {
        let list = attendees.get();
        format!("{} of {} checked in", checked_in_count(&list), list.len())
    };

    view! {
        <section class="attendee-list">
            <header class="attendee-list__header">
                <h2>"Attendees"</h2>
                <span class="muted">{summary}</span>
            </header>
            <Show
                when=move || !attendees.get().is_empty()
                fallback=|| view! { <p class="muted">"No attendees yet."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            attendees
                                .get()
                                .into_iter()
                                .map(|a| {
                                    let status = match (a.checked_in, a.check_in_time) {
                                        (true, Some(at)) => format!("Checked in {at}"),
                                        (true, None) => "Checked in".to_owned(),
                                        (false, _) => "Invited".to_owned(),
                                    };
                                    view! {
                                        <tr class:attendee--checked-in=a.checked_in>
                                            <td>{a.name}</td>
                                            <td>{a.email}</td>
                                            <td>{status}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
