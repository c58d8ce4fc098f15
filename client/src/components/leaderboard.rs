//! Icebreaker leaderboard. Rendered in backend order; scoring is server-side.

use leptos::prelude::*;
use roster::types::ranked;

use crate::net::types::LeaderboardEntry;

#[component]
pub fn Leaderboard(#[prop(into)] entries: Signal<Vec<LeaderboardEntry>>) -> impl IntoView {
    view! {
        <section class="leaderboard">
            <h2>"Leaderboard"</h2>
            <Show
                when=move || !entries.get().is_empty()
                fallback=|| view! { <p class="muted">"No points awarded yet."</p> }
            >
                <ol class="leaderboard__list">
                    {move || {
                        let entries = entries.get();
                        ranked(&entries)
                            .into_iter()
                            .map(|(rank, entry)| {
                                view! {
                                    <li class="leaderboard__row">
                                        <span class="leaderboard__rank">{format!("#{rank}")}</span>
                                        <span class="leaderboard__name">{entry.user_name.clone()}</span>
                                        <span class="leaderboard__points">{format!("{} pts", entry.points)}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ol>
            </Show>
        </section>
    }
}
