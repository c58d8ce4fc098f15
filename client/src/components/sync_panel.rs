//! Offline status and "Sync Now" control for queued check-ins.

use leptos::prelude::*;
use roster::checkin::{OfflineQueue, SyncReport};

#[component]
pub fn SyncPanel(
    #[prop(into)] offline: Signal<bool>,
    #[prop(into)] queue: Signal<OfflineQueue>,
    #[prop(into)] syncing: Signal<bool>,
    #[prop(into)] last_report: Signal<Option<SyncReport>>,
    #[prop(into)] on_sync: Callback<()>,
) -> impl IntoView {
    let pending = move || queue.get().len();

    view! {
        <section class="sync-panel" class:sync-panel--offline=move || offline.get()>
            <p class="sync-panel__status">
                {move || {
                    if offline.get() {
                        "Offline: check-ins are saved on this device.".to_owned()
                    } else {
                        "Online".to_owned()
                    }
                }}
            </p>
            <Show when=move || { pending() > 0 }>
                <p class="sync-panel__pending">{move || format!("{} check-in(s) waiting to sync", pending())}</p>
                <ul class="sync-panel__queue">
                    {move || queue.get().ids().iter().map(|id| view! { <li>{id.clone()}</li> }).collect_view()}
                </ul>
            </Show>
            <button
                class="btn sync-panel__sync"
                on:click=move |_| on_sync.run(())
                disabled=move || syncing.get() || offline.get() || pending() == 0
            >
                {move || if syncing.get() { "Syncing..." } else { "Sync Now" }}
            </button>
            {move || {
                last_report
                    .get()
                    .map(|report| {
                        let failed = report.failed.clone();
                        view! {
                            <div class="sync-panel__report">
                                <p>{report.summary()}</p>
                                <ul class="sync-panel__failed">
                                    {failed
                                        .into_iter()
                                        .map(|f| view! { <li>{format!("{}: {}", f.id, f.reason)}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
