//! Dashboard page listing the organizer's events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Online loads refresh the `events` cache; offline (or failed) loads fall
//! back to it. Events created offline sit in `pending_events` and render as
//! pending cards until the organizer syncs them from here.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use roster::cache::{load_events, save_events};
use roster::pending::PendingQueue;
use roster::storage::keys;

use crate::components::event_card::{EventCard, PendingEventCard};
use crate::components::notice_banner::{flash, flash_error};
use crate::net::types::Event;
use crate::state::auth::AuthState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::auth::{expire_on_unauthorized, install_unauth_redirect};
use crate::util::connectivity::Online;
use crate::util::storage::{LocalStore, log_storage_error};

/// Prepend newly created events, replacing any stale copy with the same id.
pub fn merge_synced(existing: Vec<Event>, created: Vec<Event>) -> Vec<Event> {
    let fresh = created.iter().map(|e| e.id).collect::<Vec<_>>();
    let mut merged = created;
    merged.extend(existing.into_iter().filter(|e| !fresh.contains(&e.id)));
    merged
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let Online(online) = expect_context::<Online>();
    install_unauth_redirect(auth, use_navigate());

    let events = RwSignal::new(Vec::<Event>::new());
    let loading = RwSignal::new(true);
    let from_cache = RwSignal::new(false);
    let pending = RwSignal::new(PendingQueue::empty(keys::PENDING_EVENTS));
    let syncing = RwSignal::new(false);

    Effect::new(move || pending.set(PendingQueue::events(&LocalStore)));

    Effect::new(move || {
        if !auth.with(AuthState::is_authenticated) {
            return;
        }
        if !online.get() {
            events.set(load_events(&LocalStore));
            from_cache.set(true);
            loading.set(false);
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::list_events().await {
                Ok(list) => {
                    log_storage_error(save_events(&LocalStore, &list));
                    events.set(list);
                    from_cache.set(false);
                }
                Err(e) => {
                    if !expire_on_unauthorized(auth, &e) {
                        flash_error(notice, &e);
                        events.set(load_events(&LocalStore));
                        from_cache.set(true);
                    }
                }
            }
            loading.set(false);
        });
    });

    let sync_pending = move |_: leptos::ev::MouseEvent| {
        if syncing.get_untracked() || !online.get_untracked() {
            return;
        }
        syncing.set(true);
        leptos::task::spawn_local(async move {
            let mut queue = pending.get_untracked();
            let report = queue
                .flush(&LocalStore, |draft| async move { crate::net::api::create_event(&draft).await })
                .await;
            pending.set(queue);
            if let Some(e) = &report.storage_error {
                leptos::logging::warn!("pending events not saved: {e}");
            }
            if report.errors.iter().any(|e| expire_on_unauthorized(auth, e)) {
                syncing.set(false);
                return;
            }
            if !report.created.is_empty() {
                let merged = merge_synced(events.get_untracked(), report.created.clone());
                log_storage_error(save_events(&LocalStore, &merged));
                events.set(merged);
            }
            let kind = if report.errors.is_empty() { NoticeKind::Success } else { NoticeKind::Error };
            flash(notice, kind, report.summary("events"));
            syncing.set(false);
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Your events"</h1>
                <A href="/events/new" attr:class="btn btn--primary">"New event"</A>
            </header>
            <Show when=move || from_cache.get()>
                <p class="muted">"Showing events saved on this device."</p>
            </Show>
            <Show when=move || !pending.get().is_empty()>
                <section class="dashboard-page__pending">
                    <div class="dashboard-page__pending-head">
                        <h2>{move || format!("Pending sync ({})", pending.get().len())}</h2>
                        <button
                            class="btn"
                            on:click=sync_pending
                            disabled=move || syncing.get() || !online.get()
                        >
                            {move || if syncing.get() { "Syncing..." } else { "Sync pending" }}
                        </button>
                    </div>
                    <div class="event-grid">
                        {move || {
                            pending
                                .get()
                                .items()
                                .iter()
                                .cloned()
                                .map(|draft| view! { <PendingEventCard draft=draft/> })
                                .collect_view()
                        }}
                    </div>
                </section>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted">"Loading events..."</p> }
            >
                <Show
                    when=move || !events.get().is_empty()
                    fallback=|| view! { <p class="muted">"No events yet. Create your first one."</p> }
                >
                    <div class="event-grid">
                        {move || {
                            events.get().into_iter().map(|event| view! { <EventCard event=event/> }).collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
