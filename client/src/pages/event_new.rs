//! Create-event form. Offline submissions are queued under `pending_events`
//! and confirmed later from the dashboard.

#[cfg(test)]
#[path = "event_new_test.rs"]
mod event_new_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use roster::cache::upsert_cached_event;
use roster::pending::PendingQueue;

use crate::components::notice_banner::{flash, flash_error};
use crate::net::types::NewEvent;
use crate::state::auth::AuthState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::auth::{expire_on_unauthorized, install_unauth_redirect};
use crate::util::connectivity::Online;
use crate::util::route::event_path;
use crate::util::storage::{LocalStore, log_storage_error};

/// Raw form input, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub capacity: String,
}

/// Validate the form into a create payload. Name and date are required; a
/// capacity, when given, must be a positive whole number.
pub fn build_new_event(form: &EventForm) -> Result<NewEvent, &'static str> {
    let name = form.name.trim();
    let date = form.date.trim();
    if name.is_empty() || date.is_empty() {
        return Err("Name and date are required.");
    }
    let capacity = match form.capacity.trim() {
        "" => None,
        raw => match raw.parse::<i64>() {
            Ok(n) if n > 0 => Some(n),
            _ => return Err("Capacity must be a positive whole number."),
        },
    };
    let time = Some(form.time.trim().to_owned()).filter(|t| !t.is_empty());
    Ok(NewEvent {
        name: name.to_owned(),
        description: form.description.trim().to_owned(),
        date: date.to_owned(),
        time,
        location: form.location.trim().to_owned(),
        capacity,
    })
}

#[component]
pub fn EventNewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let Online(online) = expect_context::<Online>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let form = RwSignal::new(EventForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = match build_new_event(&form.get_untracked()) {
            Ok(draft) => draft,
            Err(msg) => {
                flash(notice, NoticeKind::Error, msg);
                return;
            }
        };

        if !online.get_untracked() {
            let mut queue = PendingQueue::events(&LocalStore);
            match queue.push(&LocalStore, draft) {
                Ok(()) => {
                    flash(notice, NoticeKind::Info, "Saved offline. Sync it from the dashboard when you are back online.");
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(e) => flash(notice, NoticeKind::Error, e.to_string()),
            }
            return;
        }

        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::create_event(&draft).await {
                Ok(event) => {
                    log_storage_error(upsert_cached_event(&LocalStore, &event));
                    flash(notice, NoticeKind::Success, format!("Created {}.", event.name));
                    navigate(&event_path(event.id), NavigateOptions::default());
                }
                Err(e) => {
                    if !expire_on_unauthorized(auth, &e) {
                        flash_error(notice, &e);
                    }
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="event-new-page">
            <h1>"New event"</h1>
            <Show when=move || !online.get()>
                <p class="muted">"You are offline. The event will be saved on this device until you sync."</p>
            </Show>
            <form class="event-form" on:submit=on_submit>
                <label class="field">
                    <span>"Name"</span>
                    <input
                        class="input"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Description"</span>
                    <textarea
                        class="input"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="field-row">
                    <label class="field">
                        <span>"Date"</span>
                        <input
                            class="input"
                            type="date"
                            prop:value=move || form.with(|f| f.date.clone())
                            on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Time"</span>
                        <input
                            class="input"
                            type="time"
                            prop:value=move || form.with(|f| f.time.clone())
                            on:input=move |ev| form.update(|f| f.time = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="field">
                    <span>"Location"</span>
                    <input
                        class="input"
                        type="text"
                        prop:value=move || form.with(|f| f.location.clone())
                        on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Capacity"</span>
                    <input
                        class="input"
                        type="number"
                        min="1"
                        prop:value=move || form.with(|f| f.capacity.clone())
                        on:input=move |ev| form.update(|f| f.capacity = event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create event" }}
                </button>
            </form>
        </div>
    }
}
