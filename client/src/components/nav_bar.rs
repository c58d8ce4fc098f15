//! Top navigation bar: brand, section links, theme toggle and session.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::connectivity::Online;
use crate::util::storage::LocalStore;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let Online(online) = expect_context::<Online>();
    let navigate = use_navigate();

    let on_toggle_theme = move |_| {
        let mut saved = Ok(false);
        ui.update(|u| saved = u.toggle_dark_mode(&LocalStore));
        crate::util::dark_mode::apply(ui.get_untracked().settings.dark_mode);
        if let Err(e) = saved {
            leptos::logging::warn!("theme preference not saved: {e}");
        }
    };

    let on_logout = move |_| {
        crate::util::auth::sign_out(auth);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">"Rollcall"</A>
            <Show when=move || !online.get()>
                <span class="nav-bar__offline" title="Changes are saved locally until you sync">
                    "Offline"
                </span>
            </Show>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| {
                    view! {
                        <A href="/login" attr:class="nav-bar__link">"Log in"</A>
                        <A href="/register" attr:class="nav-bar__link">"Sign up"</A>
                    }
                }
            >
                <A href="/dashboard" attr:class="nav-bar__link">"Dashboard"</A>
                <A href="/settings" attr:class="nav-bar__link">"Settings"</A>
                <span class="nav-bar__user">{move || auth.get().display_name()}</span>
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </Show>
            <button class="btn nav-bar__theme" on:click=on_toggle_theme title="Toggle dark mode">
                {move || if ui.get().settings.dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
