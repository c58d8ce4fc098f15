//! Messages tab: conversation list and the live chat for the selected one.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selecting a conversation loads its history over REST and replaces the
//! `ChatSender`, which closes the previous socket. Sending prefers the socket
//! and falls back to a POST when it is not open; the POSTed message is
//! prepended locally.

use leptos::prelude::*;
use roster::chat::MessageFeed;

use crate::components::notice_banner::flash_error;
use crate::net::chat_socket::{ChatSender, open_chat_socket};
use crate::net::types::Conversation;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;

#[component]
pub fn MessagesTab(event_id: i64) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let conversations = RwSignal::new(Vec::<Conversation>::new());
    let loading = RwSignal::new(true);
    let feed = RwSignal::new(MessageFeed::default());
    let sender = RwSignal::new(ChatSender::default());
    let draft = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<i64>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::list_conversations(event_id).await {
                Ok(list) => conversations.set(list),
                Err(e) => flash_error(notice, &e),
            }
            loading.set(false);
        });
    });

    let select = move |conversation_id: i64| {
        if selected.get_untracked() == Some(conversation_id) {
            return;
        }
        selected.set(Some(conversation_id));
        // Replacing the sender drops the old channel and closes its socket.
        sender.set(ChatSender::default());
        feed.update(MessageFeed::close);
        leptos::task::spawn_local(async move {
            let history = crate::net::api::list_messages(conversation_id).await;
            if selected.get_untracked() != Some(conversation_id) {
                return;
            }
            match history {
                Ok(history) => feed.update(|f| f.open(conversation_id, history)),
                Err(e) => {
                    flash_error(notice, &e);
                    return;
                }
            }
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            sender.set(open_chat_socket(event_id, &token, feed));
        });
    };

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked().trim().to_owned();
        let Some(conversation_id) = feed.get_untracked().conversation_id() else {
            return;
        };
        if text.is_empty() {
            return;
        }
        draft.set(String::new());
        if sender.get_untracked().send_chat(conversation_id, &text) {
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::send_message(conversation_id, &text).await {
                Ok(message) => feed.update(|f| {
                    f.prepend(message);
                }),
                Err(e) => flash_error(notice, &e),
            }
        });
    };

    view! {
        <div class="messages-tab">
            <aside class="conversation-list">
                <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading conversations..."</p> }>
                    <Show
                        when=move || !conversations.get().is_empty()
                        fallback=|| view! { <p class="muted">"No conversations yet."</p> }
                    >
                        <ul>
                            {move || {
                                conversations
                                    .get()
                                    .into_iter()
                                    .map(|c| {
                                        let id = c.id;
                                        let label = c.label();
                                        let preview = c.last_message.clone().unwrap_or_default();
                                        view! {
                                            <li
                                                class="conversation"
                                                class:conversation--active=move || selected.get() == Some(id)
                                                on:click=move |_| select(id)
                                            >
                                                <span class="conversation__label">{label}</span>
                                                <span class="conversation__preview muted">{preview}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </Show>
            </aside>
            <section class="chat">
                <Show
                    when=move || feed.get().conversation_id().is_some()
                    fallback=|| view! { <p class="muted">"Select a conversation."</p> }
                >
                    <form class="chat__compose" on:submit=on_send>
                        <input
                            class="input"
                            type="text"
                            placeholder="Write a message"
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit">"Send"</button>
                        <span class="chat__live muted">
                            {move || if sender.get().is_open() { "live" } else { "" }}
                        </span>
                    </form>
                    <ul class="chat__messages">
                        {move || {
                            feed.get()
                                .messages()
                                .iter()
                                .map(|m| {
                                    view! {
                                        <li class="chat__message">
                                            <span class="chat__sender">{m.sender_name.clone()}</span>
                                            <span class="chat__content">{m.content.clone()}</span>
                                            <span class="chat__time muted">{m.created_at.clone()}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </section>
        </div>
    }
}
