//! Icebreaker activities and the event leaderboard.
//!
//! Points are awarded by the backend; the page shows what came back and
//! reloads the leaderboard after each response.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::leaderboard::Leaderboard;
use crate::components::notice_banner::{flash, flash_error};
use crate::net::types::{Activity, ActivityResponse, LeaderboardEntry};
use crate::state::auth::AuthState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::auth::{expire_on_unauthorized, install_unauth_redirect};
use crate::util::route::{event_path, use_event_id};

/// Trimmed response text, or `None` when there is nothing to send.
pub fn prepare_response(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

pub fn awarded_message(response: &ActivityResponse) -> String {
    match response.total_points {
        Some(total) => format!("+{} points ({total} total)", response.points_awarded),
        None => format!("+{} points", response.points_awarded),
    }
}

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    install_unauth_redirect(auth, use_navigate());

    let event_id = use_event_id();
    let activities = RwSignal::new(Vec::<Activity>::new());
    let leaderboard = RwSignal::new(Vec::<LeaderboardEntry>::new());
    let loading = RwSignal::new(true);

    let reload_leaderboard = move |id: i64| {
        leptos::task::spawn_local(async move {
            match crate::net::api::leaderboard(id).await {
                Ok(entries) => leaderboard.set(entries),
                Err(e) => {
                    if !expire_on_unauthorized(auth, &e) {
                        leptos::logging::warn!("leaderboard not loaded: {e}");
                    }
                }
            }
        });
    };

    Effect::new(move || {
        if !auth.with(AuthState::is_authenticated) {
            return;
        }
        let Some(id) = event_id.get() else {
            loading.set(false);
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::list_activities(id).await {
                Ok(list) => activities.set(list),
                Err(e) => {
                    if !expire_on_unauthorized(auth, &e) {
                        flash_error(notice, &e);
                    }
                }
            }
            loading.set(false);
        });
        reload_leaderboard(id);
    });

    let respond = move |activity_id: i64, raw: String| {
        let Some(text) = prepare_response(&raw) else {
            flash(notice, NoticeKind::Error, "Enter a response first.");
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::respond_to_activity(activity_id, &text).await {
                Ok(result) => {
                    flash(notice, NoticeKind::Success, awarded_message(&result));
                    if let Some(id) = event_id.get_untracked() {
                        reload_leaderboard(id);
                    }
                }
                Err(e) => {
                    if !expire_on_unauthorized(auth, &e) {
                        flash_error(notice, &e);
                    }
                }
            }
        });
    };

    view! {
        <div class="activities-page">
            <header class="activities-page__header">
                <h1>"Icebreakers"</h1>
                {move || event_id.get().map(|id| view! { <A href=event_path(id)>"Back to event"</A> })}
            </header>
            <div class="activities-page__body">
                <section class="activity-list">
                    <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading activities..."</p> }>
                        {move || {
                            let list = activities.get();
                            if list.iter().all(|a| !a.is_active) {
                                return view! { <p class="muted">"No active icebreakers right now."</p> }.into_any();
                            }
                            list.into_iter()
                                .filter(|a| a.is_active)
                                .map(|activity| {
                                    view! { <ActivityCard activity=activity on_respond=Callback::new(move |(id, text): (i64, String)| respond(id, text))/> }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </Show>
                </section>
                <Leaderboard entries=leaderboard/>
            </div>
        </div>
    }
}

#[component]
fn ActivityCard(activity: Activity, on_respond: Callback<(i64, String)>) -> impl IntoView {
    let answer = RwSignal::new(String::new());
    let id = activity.id;
    let input = if activity.kind.has_options() {
        activity
            .options
            .iter()
            .cloned()
            .map(|option| {
                let value = option.clone();
                let chosen = option.clone();
                view! {
                    <label class="activity__option">
                        <input
                            type="radio"
                            name=format!("activity-{id}")
                            prop:checked=move || answer.get() == value
                            on:change=move |_| answer.set(chosen.clone())
                        />
                        <span>{option}</span>
                    </label>
                }
            })
            .collect_view()
            .into_any()
    } else {
        view! {
            <textarea
                class="input"
                placeholder="Your answer"
                prop:value=move || answer.get()
                on:input=move |ev| answer.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    };
    let description = Some(activity.description.clone()).filter(|d| !d.is_empty());
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_respond.run((id, answer.get_untracked()));
        answer.set(String::new());
    };

    view! {
        <article class="activity">
            <header class="activity__header">
                <span class="activity__kind">{activity.kind.label()}</span>
                <h2>{activity.title}</h2>
                <span class="activity__points">{format!("{} pts", activity.points)}</span>
            </header>
            {description.map(|d| view! { <p class="activity__description">{d}</p> })}
            <form class="activity__form" on:submit=on_submit>
                {input}
                <button class="btn" type="submit">"Submit"</button>
            </form>
        </article>
    }
}
