//! Per-browser preferences. Nothing here is sent to the backend.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notice_banner::flash;
use crate::net::types::UserSettings;
use crate::state::auth::AuthState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::dark_mode;
use crate::util::storage::LocalStore;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());

    let save = move |change: fn(&mut UserSettings, bool), value: bool| {
        let mut next = ui.get_untracked().settings;
        change(&mut next, value);
        let dark = next.dark_mode;
        match ui.try_update(|state| state.save_settings(&LocalStore, next)) {
            Some(Err(e)) => flash(notice, NoticeKind::Error, format!("Settings apply to this tab only: {e}")),
            Some(Ok(())) => flash(notice, NoticeKind::Success, "Settings saved."),
            None => {}
        }
        dark_mode::apply(dark);
    };

    let toggle = move |label: &'static str,
                       read: fn(&UserSettings) -> bool,
                       change: fn(&mut UserSettings, bool)| {
        view! {
            <label class="toggle">
                <input
                    type="checkbox"
                    prop:checked=move || ui.with(|state| read(&state.settings))
                    on:change=move |ev| save(change, event_target_checked(&ev))
                />
                <span>{label}</span>
            </label>
        }
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <section class="settings-page__account">
                <h2>"Account"</h2>
                {move || {
                    auth.get()
                        .user
                        .map(|user| {
                            view! {
                                <p>{user.display_name()}</p>
                                <p class="muted">{user.email}</p>
                            }
                        })
                }}
            </section>
            <section class="settings-page__prefs">
                <h2>"Preferences"</h2>
                {toggle("Dark mode", |s| s.dark_mode, |s, v| s.dark_mode = v)}
                {toggle("Email notifications", |s| s.email_notifications, |s, v| s.email_notifications = v)}
                {toggle("Push notifications", |s| s.push_notifications, |s, v| s.push_notifications = v)}
                <p class="muted">"Preferences are stored in this browser only."</p>
            </section>
        </div>
    }
}
