//! Announcements tab: pinned-first list and the organizer post form.

#[cfg(test)]
#[path = "announcements_tab_test.rs"]
mod announcements_tab_test;

use leptos::prelude::*;

use crate::components::notice_banner::{flash, flash_error};
use crate::net::types::{Announcement, NewAnnouncement};
use crate::state::notice::{NoticeKind, NoticeState};

/// Pinned announcements first, otherwise backend order.
pub fn pinned_first(mut items: Vec<Announcement>) -> Vec<Announcement> {
    items.sort_by_key(|a| !a.is_pinned);
    items
}

#[component]
pub fn AnnouncementsTab(event_id: i64) -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();
    let items = RwSignal::new(Vec::<Announcement>::new());
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::list_announcements(event_id).await {
                Ok(list) => items.set(list),
                Err(e) => flash_error(notice, &e),
            }
        });
    });

    let on_post = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = NewAnnouncement {
            event: event_id,
            title: title.get_untracked().trim().to_owned(),
            content: content.get_untracked().trim().to_owned(),
        };
        if body.title.is_empty() || body.content.is_empty() {
            flash(notice, NoticeKind::Error, "An announcement needs a title and a message.");
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::create_announcement(&body).await {
                Ok(created) => {
                    items.update(|list| list.insert(0, created));
                    title.set(String::new());
                    content.set(String::new());
                }
                Err(e) => flash_error(notice, &e),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="announcements-tab">
            <form class="stack" on:submit=on_post>
                <input
                    class="input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="input"
                    placeholder="Message to all attendees"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <button class="btn" type="submit" disabled=move || busy.get()>"Post announcement"</button>
            </form>
            <ul class="announcement-list">
                {move || {
                    pinned_first(items.get())
                        .into_iter()
                        .map(|a| {
                            view! {
                                <li class="announcement" class:announcement--pinned=a.is_pinned>
                                    <h3>{a.title}</h3>
                                    <p>{a.content}</p>
                                    <span class="muted">{format!("{} · {}", a.author_name, a.created_at)}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
