//! Door check-in page: camera scanner, manual entry and the offline queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Online scans POST straight to the check-in endpoint. Offline scans go to
//! the `offline_checkins` queue and show a synthetic record. Reconnecting
//! only announces how much is waiting; the operator replays the queue with
//! "Sync Now".

#[cfg(test)]
#[path = "check_in_test.rs"]
mod check_in_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use roster::checkin::{Connectivity, ConnectivityChange, OfflineQueue, SyncReport, sync_offline_check_ins};
use roster::qr::normalize_payload;

use crate::components::notice_banner::{flash, flash_error};
use crate::components::qr_scanner::QrScanner;
use crate::components::sync_panel::SyncPanel;
use crate::net::types::CheckInRecord;
use crate::state::auth::AuthState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::auth::{expire_on_unauthorized, install_unauth_redirect};
use crate::util::connectivity::Online;
use crate::util::route::{event_path, use_event_id};
use crate::util::storage::LocalStore;

/// Most recent check-ins kept on screen.
const RECENT_LIMIT: usize = 20;

/// What to do with one camera frame's decoded payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanDecision {
    Submit(String),
    /// Same code as the previous frame.
    Repeat,
    /// A check-in is still in flight; the code is not remembered.
    Busy,
    Empty,
}

/// Camera scanners report the same code on every frame while it stays in
/// view. Only a change of code counts as a new scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanGate {
    last: Option<String>,
}

impl ScanGate {
    /// Gate a raw payload on its normalised code. A busy page never records
    /// the code, so the next frame of it is tried again.
    pub fn decide(&mut self, raw: &str, busy: bool) -> ScanDecision {
        let Some(code) = normalize_payload(raw) else {
            return ScanDecision::Empty;
        };
        if self.last.as_deref() == Some(code.as_str()) {
            return ScanDecision::Repeat;
        }
        if busy {
            return ScanDecision::Busy;
        }
        self.last = Some(code.clone());
        ScanDecision::Submit(code)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Prepend `record`, keeping at most [`RECENT_LIMIT`] rows.
pub fn push_recent(recent: &mut Vec<CheckInRecord>, record: CheckInRecord) {
    recent.insert(0, record);
    recent.truncate(RECENT_LIMIT);
}

/// Banner text for a connectivity transition, if it deserves one.
pub fn connectivity_message(change: ConnectivityChange) -> Option<String> {
    match change {
        ConnectivityChange::Unchanged => None,
        ConnectivityChange::WentOffline => Some("You are offline. Scans will be saved on this device.".to_owned()),
        ConnectivityChange::CameOnline { pending: 0 } => Some("Back online.".to_owned()),
        ConnectivityChange::CameOnline { pending } => {
            Some(format!("Back online. {pending} check-in(s) waiting; press Sync Now to send them."))
        }
    }
}

#[component]
pub fn CheckInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let Online(online) = expect_context::<Online>();
    install_unauth_redirect(auth, use_navigate());

    let event_id = use_event_id();
    let offline = Signal::derive(move || !online.get());
    let queue = RwSignal::new(OfflineQueue::default());
    let connectivity = RwSignal::new(Connectivity::new(online.get_untracked()));
    let gate = RwSignal::new(ScanGate::default());
    let recent = RwSignal::new(Vec::<CheckInRecord>::new());
    let manual_code = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let syncing = RwSignal::new(false);
    let last_report = RwSignal::new(None::<SyncReport>);

    Effect::new(move || queue.set(OfflineQueue::load(&LocalStore)));

    Effect::new(move || {
        let now_online = online.get();
        let change = queue.with_untracked(|q| connectivity.try_update(|c| c.set_online(now_online, q)));
        if let Some(message) = change.and_then(connectivity_message) {
            flash(notice, NoticeKind::Info, message);
        }
    });

    Effect::new(move || {
        if !auth.with(AuthState::is_authenticated) || offline.get() {
            return;
        }
        let Some(id) = event_id.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::list_check_ins(id).await {
                Ok(mut records) => {
                    records.truncate(RECENT_LIMIT);
                    recent.set(records);
                }
                Err(e) => {
                    if !expire_on_unauthorized(auth, &e) {
                        leptos::logging::warn!("recent check-ins not loaded: {e}");
                    }
                }
            }
        });
    });

    let submit_code = move |raw: String| {
        let Some(code) = normalize_payload(&raw) else {
            flash(notice, NoticeKind::Error, "The scanned code is empty.");
            return;
        };

        if offline.get_untracked() {
            match queue.try_update(|q| q.enqueue(&LocalStore, &code)) {
                Some(Ok(record)) => {
                    recent.update(|list| push_recent(list, record));
                    flash(notice, NoticeKind::Info, "Saved offline. Sync when you are back online.");
                }
                Some(Err(e)) => flash(notice, NoticeKind::Error, e.to_string()),
                None => {}
            }
            return;
        }

        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::check_in(&code).await {
                Ok(record) => {
                    flash(notice, NoticeKind::Success, format!("Checked in {}.", record.guest_name));
                    recent.update(|list| push_recent(list, record));
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

    let on_scan = Callback::new(move |raw: String| {
        let in_flight = busy.get_untracked() && !offline.get_untracked();
        match gate.try_update(|g| g.decide(&raw, in_flight)) {
            Some(ScanDecision::Submit(code)) => submit_code(code),
            Some(ScanDecision::Busy) => {
                flash(notice, NoticeKind::Info, "Still checking in the previous guest. Hold the code up again.");
            }
            Some(ScanDecision::Empty) => flash(notice, NoticeKind::Error, "The scanned code is empty."),
            Some(ScanDecision::Repeat) | None => {}
        }
    });

    let on_manual = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = manual_code.get_untracked();
        manual_code.set(String::new());
        gate.update(ScanGate::reset);
        submit_code(raw);
    };

    let on_sync = Callback::new(move |()| {
        if syncing.get_untracked() || offline.get_untracked() {
            return;
        }
        syncing.set(true);
        leptos::task::spawn_local(async move {
            let mut pending = queue.get_untracked();
            let report = sync_offline_check_ins(&mut pending, &LocalStore, |id| async move {
                crate::net::api::check_in(&id).await
            })
            .await;
            queue.set(pending);
            gate.update(ScanGate::reset);
            let kind = if report.is_clean() { NoticeKind::Success } else { NoticeKind::Error };
            flash(notice, kind, report.summary());
            last_report.set(Some(report));
            syncing.set(false);
        });
    });

    view! {
        <div class="check-in-page">
            <header class="check-in-page__header">
                <h1>"Check-in"</h1>
                {move || event_id.get().map(|id| view! { <A href=event_path(id)>"Back to event"</A> })}
            </header>
            <SyncPanel
                offline=offline
                queue=queue
                syncing=syncing
                last_report=last_report
                on_sync=on_sync
            />
            <div class="check-in-page__body">
                <section class="check-in-page__scan">
                    <QrScanner on_scan=on_scan/>
                    <form class="manual-entry" on:submit=on_manual>
                        <input
                            class="input"
                            type="text"
                            placeholder="Enter code manually"
                            prop:value=move || manual_code.get()
                            on:input=move |ev| manual_code.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit" disabled=move || busy.get()>
                            "Check in"
                        </button>
                    </form>
                </section>
                <section class="check-in-page__recent">
                    <h2>"Recent check-ins"</h2>
                    <Show
                        when=move || !recent.get().is_empty()
                        fallback=|| view! { <p class="muted">"No check-ins yet."</p> }
                    >
                        <ul class="check-in-list">
                            {move || {
                                recent
                                    .get()
                                    .into_iter()
                                    .map(|record| {
                                        let detail = record
                                            .check_in_time
                                            .clone()
                                            .or_else(|| record.qr_code.clone())
                                            .unwrap_or_default();
                                        view! {
                                            <li class="check-in" class:check-in--offline=record.offline>
                                                <span class="check-in__guest">{record.guest_name}</span>
                                                <span class="check-in__detail muted">{detail}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </section>
            </div>
        </div>
    }
}
