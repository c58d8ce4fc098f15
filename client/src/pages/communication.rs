//! Communication hub for one event: chat, announcements, forum and Q&A.

#[cfg(test)]
#[path = "communication_test.rs"]
mod communication_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::announcements_tab::AnnouncementsTab;
use crate::components::forum_tab::ForumTab;
use crate::components::messages_tab::MessagesTab;
use crate::components::qa_tab::QaTab;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::connectivity::Online;
use crate::util::route::{event_path, use_event_id};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HubTab {
    #[default]
    Messages,
    Announcements,
    Forum,
    Qa,
}

impl HubTab {
    pub const ALL: [Self; 4] = [Self::Messages, Self::Announcements, Self::Forum, Self::Qa];

    pub fn label(self) -> &'static str {
        match self {
            Self::Messages => "Messages",
            Self::Announcements => "Announcements",
            Self::Forum => "Forum",
            Self::Qa => "Q&A",
        }
    }
}

#[component]
pub fn CommunicationPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let Online(online) = expect_context::<Online>();
    install_unauth_redirect(auth, use_navigate());

    let event_id = use_event_id();
    let tab = RwSignal::new(HubTab::default());

    let panel = move || {
        let Some(id) = event_id.get() else {
            return view! { <p class="error">"This event link is not valid."</p> }.into_any();
        };
        if !auth.with(AuthState::is_authenticated) {
            return ().into_any();
        }
        match tab.get() {
            HubTab::Messages => view! { <MessagesTab event_id=id/> }.into_any(),
            HubTab::Announcements => view! { <AnnouncementsTab event_id=id/> }.into_any(),
            HubTab::Forum => view! { <ForumTab event_id=id/> }.into_any(),
            HubTab::Qa => view! { <QaTab event_id=id/> }.into_any(),
        }
    };

    view! {
        <div class="communication-page">
            <header class="communication-page__header">
                <h1>"Communication"</h1>
                {move || event_id.get().map(|id| view! { <A href=event_path(id)>"Back to event"</A> })}
            </header>
            <Show when=move || !online.get()>
                <p class="muted">"You are offline. Messages and posts need a connection."</p>
            </Show>
            <nav class="tabs" role="tablist">
                {HubTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == t
                                role="tab"
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <section class="communication-page__panel">{panel}</section>
        </div>
    }
}
