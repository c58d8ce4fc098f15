//! Q&A tab: questions ranked by upvotes, with answers, ask and answer forms.

#[cfg(test)]
#[path = "qa_tab_test.rs"]
mod qa_tab_test;

use leptos::prelude::*;

use crate::components::notice_banner::flash_error;
use crate::net::types::{NewAnswer, NewQuestion, QaQuestion};
use crate::state::notice::NoticeState;

/// Unanswered questions first, then by upvotes (stable within ties).
pub fn order_questions(mut questions: Vec<QaQuestion>) -> Vec<QaQuestion> {
    questions.sort_by(|a, b| a.is_answered.cmp(&b.is_answered).then(b.upvotes.cmp(&a.upvotes)));
    questions
}

#[component]
pub fn QaTab(event_id: i64) -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();
    let questions = RwSignal::new(Vec::<QaQuestion>::new());
    let ask = RwSignal::new(String::new());

    let reload = move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::list_questions(event_id).await {
                Ok(list) => questions.set(list),
                Err(e) => flash_error(notice, &e),
            }
        });
    };

    Effect::new(move || reload());

    let on_ask = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let content = ask.get_untracked().trim().to_owned();
        if content.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::ask_question(&NewQuestion { event: event_id, content }).await {
                Ok(question) => {
                    questions.update(|list| list.push(question));
                    ask.set(String::new());
                }
                Err(e) => flash_error(notice, &e),
            }
        });
    };

    let upvote = move |question_id: i64| {
        leptos::task::spawn_local(async move {
            match crate::net::api::upvote_question(question_id).await {
                Ok(()) => reload(),
                Err(e) => flash_error(notice, &e),
            }
        });
    };

    let answer = move |question_id: i64, content: String| {
        leptos::task::spawn_local(async move {
            match crate::net::api::answer_question(question_id, &NewAnswer { content }).await {
                Ok(created) => questions.update(|list| {
                    if let Some(q) = list.iter_mut().find(|q| q.id == question_id) {
                        q.answers.push(created);
                        q.is_answered = true;
                    }
                }),
                Err(e) => flash_error(notice, &e),
            }
        });
    };

    view! {
        <div class="qa-tab">
            <form class="stack" on:submit=on_ask>
                <textarea
                    class="input"
                    placeholder="Ask the organizers a question"
                    prop:value=move || ask.get()
                    on:input=move |ev| ask.set(event_target_value(&ev))
                ></textarea>
                <button class="btn" type="submit">"Ask"</button>
            </form>
            <ul class="question-list">
                {move || {
                    order_questions(questions.get())
                        .into_iter()
                        .map(|q| {
                            let id = q.id;
                            let draft = RwSignal::new(String::new());
                            let on_answer = move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                let content = draft.get_untracked().trim().to_owned();
                                if !content.is_empty() {
                                    draft.set(String::new());
                                    answer(id, content);
                                }
                            };
                            view! {
                                <li class="question" class:question--answered=q.is_answered>
                                    <div class="question__head">
                                        <button class="btn btn--small" on:click=move |_| upvote(id)>
                                            {format!("▲ {}", q.upvotes)}
                                        </button>
                                        <p class="question__content">{q.content}</p>
                                        <span class="muted">{q.author_name}</span>
                                    </div>
                                    <ul class="answer-list">
                                        {q
                                            .answers
                                            .into_iter()
                                            .map(|a| {
                                                view! {
                                                    <li class="answer">
                                                        <p>{a.content}</p>
                                                        <span class="muted">{a.author_name}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                    <form class="answer-form" on:submit=on_answer>
                                        <input
                                            class="input"
                                            type="text"
                                            placeholder="Answer"
                                            prop:value=move || draft.get()
                                            on:input=move |ev| draft.set(event_target_value(&ev))
                                        />
                                        <button class="btn btn--small" type="submit">"Answer"</button>
                                    </form>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
