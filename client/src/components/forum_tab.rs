//! Forum tab: thread list, thread view with replies, and new-thread form.

use leptos::prelude::*;

use crate::components::notice_banner::{flash, flash_error};
use crate::net::types::{ForumPost, ForumThread, NewPost, NewThread};
use crate::state::notice::{NoticeKind, NoticeState};

#[component]
pub fn ForumTab(event_id: i64) -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();
    let threads = RwSignal::new(Vec::<ForumThread>::new());
    let open_thread = RwSignal::new(None::<ForumThread>);
    let posts = RwSignal::new(Vec::<ForumPost>::new());
    let new_title = RwSignal::new(String::new());
    let new_content = RwSignal::new(String::new());
    let reply = RwSignal::new(String::new());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::list_threads(event_id).await {
                Ok(list) => threads.set(list),
                Err(e) => flash_error(notice, &e),
            }
        });
    });

    let open = move |thread: ForumThread| {
        let thread_id = thread.id;
        open_thread.set(Some(thread));
        posts.set(Vec::new());
        leptos::task::spawn_local(async move {
            match crate::net::api::list_posts(thread_id).await {
                Ok(list) => {
                    if open_thread.get_untracked().is_some_and(|t| t.id == thread_id) {
                        posts.set(list);
                    }
                }
                Err(e) => flash_error(notice, &e),
            }
        });
    };

    let on_new_thread = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = NewThread {
            event: event_id,
            title: new_title.get_untracked().trim().to_owned(),
            content: new_content.get_untracked().trim().to_owned(),
        };
        if body.title.is_empty() {
            flash(notice, NoticeKind::Error, "A thread needs a title.");
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::create_thread(&body).await {
                Ok(thread) => {
                    threads.update(|list| list.insert(0, thread));
                    new_title.set(String::new());
                    new_content.set(String::new());
                }
                Err(e) => flash_error(notice, &e),
            }
        });
    };

    let on_reply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(thread) = open_thread.get_untracked() else {
            return;
        };
        let content = reply.get_untracked().trim().to_owned();
        if content.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::create_post(thread.id, &NewPost { content }).await {
                Ok(post) => {
                    posts.update(|list| list.push(post));
                    threads.update(|list| {
                        if let Some(t) = list.iter_mut().find(|t| t.id == thread.id) {
                            t.post_count += 1;
                        }
                    });
                    reply.set(String::new());
                }
                Err(e) => flash_error(notice, &e),
            }
        });
    };

    view! {
        <div class="forum-tab">
            <Show
                when=move || open_thread.get().is_some()
                fallback=move || {
                    view! {
                        <form class="stack" on:submit=on_new_thread>
                            <input
                                class="input"
                                type="text"
                                placeholder="Thread title"
                                prop:value=move || new_title.get()
                                on:input=move |ev| new_title.set(event_target_value(&ev))
                            />
                            <textarea
                                class="input"
                                placeholder="Start the discussion"
                                prop:value=move || new_content.get()
                                on:input=move |ev| new_content.set(event_target_value(&ev))
                            ></textarea>
                            <button class="btn" type="submit">"New thread"</button>
                        </form>
                        <ul class="thread-list">
                            {move || {
                                threads
                                    .get()
                                    .into_iter()
                                    .map(|t| {
                                        let summary = format!("{} replies · {}", t.post_count, t.author_name);
                                        let title = t.title.clone();
                                        view! {
                                            <li class="thread" on:click=move |_| open(t.clone())>
                                                <span class="thread__title">{title}</span>
                                                <span class="muted">{summary}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    }
                }
            >
                <button class="btn btn--link" on:click=move |_| open_thread.set(None)>"← All threads"</button>
                {move || {
                    open_thread
                        .get()
                        .map(|t| {
                            view! {
                                <article class="thread-view">
                                    <h3>{t.title}</h3>
                                    <p>{t.content}</p>
                                    <span class="muted">{t.author_name}</span>
                                </article>
                            }
                        })
                }}
                <ul class="post-list">
                    {move || {
                        posts
                            .get()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <li class="post">
                                        <span class="post__author">{p.author_name}</span>
                                        <p>{p.content}</p>
                                        <span class="muted">{p.created_at}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <form class="stack" on:submit=on_reply>
                    <textarea
                        class="input"
                        placeholder="Write a reply"
                        prop:value=move || reply.get()
                        on:input=move |ev| reply.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn" type="submit">"Reply"</button>
                </form>
            </Show>
        </div>
    }
}
