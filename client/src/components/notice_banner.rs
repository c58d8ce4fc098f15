//! Transient notice banner under the nav bar.

use leptos::prelude::*;
use roster::ApiError;

use crate::state::notice::{NOTICE_TIMEOUT_MS, NoticeKind, NoticeState};

/// Show a notice and schedule its dismissal.
pub fn flash(notice: RwSignal<NoticeState>, kind: NoticeKind, text: impl Into<String>) {
    let text = text.into();
    let seq = notice.try_update(|n| n.show(kind, text));
    dismiss_later(notice, seq);
}

/// Show an API failure.
pub fn flash_error(notice: RwSignal<NoticeState>, error: &ApiError) {
    leptos::logging::warn!("request failed: {error}");
    let seq = notice.try_update(|n| n.show_error(error));
    dismiss_later(notice, seq);
}

fn dismiss_later(notice: RwSignal<NoticeState>, seq: Option<u64>) {
    #[cfg(feature = "hydrate")]
    if let Some(seq) = seq {
        gloo_timers::callback::Timeout::new(NOTICE_TIMEOUT_MS, move || {
            notice.try_update(|n| n.dismiss(seq));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (seq, NOTICE_TIMEOUT_MS);
    }
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    view! {
        {move || {
            notice
                .get()
                .current
                .map(|n| {
                    view! {
                        <div class=n.kind.css_class() role="status">
                            <span class="notice__text">{n.text}</span>
                            <button class="notice__close" on:click=move |_| notice.update(NoticeState::clear)>
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
