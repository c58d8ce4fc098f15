//! Event detail page: event summary, invitations and attendees.
//!
//! SYSTEM CONTEXT
//! ==============
//! Offline, the page renders from the `events` cache without touching the
//! network, or says the event is unavailable when it was never cached.
//! Online, the event is fetched and written back to the cache. Invitation
//! and attendee lists follow the same pattern under per-event keys.

#[cfg(test)]
#[path = "event_detail_test.rs"]
mod event_detail_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use roster::cache::{EventSource, InvitationList, event_source, load_attendees, save_attendees, upsert_cached_event};
use roster::pending::PendingQueue;
use roster::storage::keys;
use roster::ApiError;

use crate::components::attendee_list::AttendeeList;
use crate::components::invitation_sidebar::InvitationSidebar;
use crate::components::notice_banner::{flash, flash_error};
use crate::net::types::{Attendee, Event, NewInvitation};
use crate::state::auth::AuthState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::auth::{expire_on_unauthorized, install_unauth_redirect};
use crate::util::connectivity::Online;
use crate::util::route::{activities_path, check_in_path, communication_path, use_event_id};
use crate::util::storage::{LocalStore, log_storage_error};

/// What the summary panel shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailStatus {
    Loading,
    Ready(Event),
    /// Offline with nothing cached for this id.
    Unavailable,
    Failed(String),
}

impl DetailStatus {
    /// Initial status for a load decision. `Fetch` stays loading until the
    /// request settles.
    pub fn from_source(source: EventSource) -> Self {
        match source {
            EventSource::Cache(event) => Self::Ready(event),
            EventSource::Unavailable => Self::Unavailable,
            EventSource::Fetch => Self::Loading,
        }
    }
}

/// Capacity line for the summary panel.
pub fn capacity_line(event: &Event) -> String {
    match (event.capacity, event.spots_left()) {
        (Some(cap), Some(left)) => format!("{} / {cap} attending ({left} spots left)", event.attendee_count),
        _ => format!("{} attending", event.attendee_count),
    }
}

fn log_list_error(auth: RwSignal<AuthState>, what: &str, error: &ApiError) {
    if !expire_on_unauthorized(auth, error) {
        leptos::logging::warn!("{what} not refreshed: {error}");
    }
}

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let Online(online) = expect_context::<Online>();
    install_unauth_redirect(auth, use_navigate());

    let event_id = use_event_id();
    let status = RwSignal::new(DetailStatus::Loading);
    let invitations = RwSignal::new(InvitationList::default());
    let pending = RwSignal::new(PendingQueue::empty(keys::PENDING_INVITATIONS));
    let attendees = RwSignal::new(Vec::<Attendee>::new());
    let syncing = RwSignal::new(false);
    let offline = Signal::derive(move || !online.get());

    Effect::new(move || {
        if !auth.with(AuthState::is_authenticated) {
            return;
        }
        let Some(id) = event_id.get() else {
            status.set(DetailStatus::Failed("This event link is not valid.".to_owned()));
            return;
        };
        let source = event_source(&LocalStore, id, offline.get());
        invitations.set(InvitationList::load(&LocalStore, id));
        pending.set(PendingQueue::invitations(&LocalStore));
        attendees.set(load_attendees(&LocalStore, id));
        let fetch = matches!(source, EventSource::Fetch);
        status.set(DetailStatus::from_source(source));
        if !fetch {
            return;
        }

        leptos::task::spawn_local(async move {
            match crate::net::api::get_event(id).await {
                Ok(event) => {
                    log_storage_error(upsert_cached_event(&LocalStore, &event));
                    status.set(DetailStatus::Ready(event));
                }
                Err(e) => {
                    if !expire_on_unauthorized(auth, &e) {
                        status.set(DetailStatus::Failed(e.to_string()));
                    }
                    return;
                }
            }
            match crate::net::api::list_invitations(id).await {
                Ok(items) => {
                    let mut cached = Ok(());
                    invitations.update(|list| cached = list.replace(&LocalStore, items));
                    log_storage_error(cached);
                }
                Err(e) => log_list_error(auth, "invitations", &e),
            }
            match crate::net::api::list_attendees(id).await {
                Ok(list) => {
                    log_storage_error(save_attendees(&LocalStore, id, &list));
                    attendees.set(list);
                }
                Err(e) => log_list_error(auth, "attendees", &e),
            }
        });
    });

    let sync_invitations = move |_: leptos::ev::MouseEvent| {
        if syncing.get_untracked() || offline.get_untracked() {
            return;
        }
        syncing.set(true);
        leptos::task::spawn_local(async move {
            let mut queue = pending.get_untracked();
            let report = queue
                .flush(&LocalStore, |draft: NewInvitation| async move {
                    crate::net::api::create_invitation(&draft).await
                })
                .await;
            pending.set(queue);
            if let Some(e) = &report.storage_error {
                leptos::logging::warn!("pending invitations not saved: {e}");
            }
            let current = event_id.get_untracked();
            for invitation in report.created.iter().filter(|inv| Some(inv.event) == current) {
                let mut cached = Ok(());
                invitations.update(|list| cached = list.record_created(&LocalStore, invitation.clone()));
                log_storage_error(cached);
            }
            if let Some(e) = report.errors.first() {
                if !expire_on_unauthorized(auth, e) {
                    flash_error(notice, e);
                }
            } else {
                flash(notice, NoticeKind::Success, report.summary("invitations"));
            }
            syncing.set(false);
        });
    };

    let summary = move || match status.get() {
        DetailStatus::Loading => view! { <p class="muted">"Loading event..."</p> }.into_any(),
        DetailStatus::Unavailable => view! {
            <p class="muted">"This event is not available offline. Reconnect to load it."</p>
        }
        .into_any(),
        DetailStatus::Failed(msg) => view! { <p class="error">{msg}</p> }.into_any(),
        DetailStatus::Ready(event) => {
            let capacity = capacity_line(&event);
            let location = Some(event.location.clone()).filter(|l| !l.is_empty());
            let description = Some(event.description.clone()).filter(|d| !d.is_empty());
            view! {
                <header class="event-detail__header">
                    <h1>{event.name.clone()}</h1>
                    <p class="event-detail__when">{event.when()}</p>
                    {location.map(|l| view! { <p class="event-detail__location">{l}</p> })}
                    <p class="event-detail__capacity">{capacity}</p>
                    {description.map(|d| view! { <p class="event-detail__description">{d}</p> })}
                    <nav class="event-detail__links">
                        <A href=check_in_path(event.id) attr:class="btn btn--primary">"Check-in"</A>
                        <A href=communication_path(event.id) attr:class="btn">"Communication"</A>
                        <A href=activities_path(event.id) attr:class="btn">"Icebreakers"</A>
                    </nav>
                </header>
            }
            .into_any()
        }
    };

    view! {
        <div class="event-detail-page">
            <Show when=move || offline.get()>
                <p class="muted">"Offline: showing data saved on this device."</p>
            </Show>
            <div class="event-detail">
                <main class="event-detail__main">
                    {summary}
                    <AttendeeList attendees=attendees/>
                </main>
                {move || {
                    event_id
                        .get()
                        .map(|id| {
                            view! {
                                <div class="event-detail__side">
                                    <InvitationSidebar
                                        event_id=id
                                        invitations=invitations
                                        pending=pending
                                        offline=offline
                                    />
                                    <Show when=move || !pending.get().for_event(id).is_empty()>
                                        <button
                                            class="btn"
                                            on:click=sync_invitations
                                            disabled=move || syncing.get() || offline.get()
                                        >
                                            {move || if syncing.get() { "Syncing..." } else { "Sync pending invitations" }}
                                        </button>
                                    </Show>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
