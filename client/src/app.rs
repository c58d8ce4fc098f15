//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Script, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::notice_banner::NoticeBanner;
use crate::pages::{
    activities::ActivitiesPage, check_in::CheckInPage, communication::CommunicationPage, dashboard::DashboardPage,
    event_detail::EventDetailPage, event_new::EventNewPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage, register::RegisterPage, settings::SettingsPage,
};
use crate::state::{auth::AuthState, notice::NoticeState, ui::UiState};
use crate::util::connectivity::{self, Online};

/// Browser build of the camera-scanning library used by the check-in page.
const QR_LIBRARY_SRC: &str = "https://unpkg.com/html5-qrcode@2.3.8/html5-qrcode.min.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, restores the persisted session and
/// theme in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notice = RwSignal::new(NoticeState::default());
    let ui = RwSignal::new(UiState::default());
    let online = RwSignal::new(true);

    provide_context(auth);
    provide_context(notice);
    provide_context(ui);
    provide_context(Online(online));

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let store = crate::util::storage::LocalStore;
        auth.set(AuthState::restore(&store));
        let dark_mode = crate::util::dark_mode::read_preference();
        ui.update(|u| {
            u.settings = UiState::stored_settings(&store).unwrap_or_default();
            u.settings.dark_mode = dark_mode;
        });
        crate::util::dark_mode::apply(dark_mode);
        connectivity::install_listeners(online);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/rollcall.css"/>
        <Script src=QR_LIBRARY_SRC/>
        <Title text="Rollcall"/>

        <Router>
            <NavBar/>
            <NoticeBanner/>
            <main class="page">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=(StaticSegment("events"), StaticSegment("new")) view=EventNewPage/>
                    <Route path=(StaticSegment("events"), ParamSegment("event_id")) view=EventDetailPage/>
                    <Route
                        path=(StaticSegment("events"), ParamSegment("event_id"), StaticSegment("check-in"))
                        view=CheckInPage
                    />
                    <Route
                        path=(StaticSegment("events"), ParamSegment("event_id"), StaticSegment("communication"))
                        view=CommunicationPage
                    />
                    <Route
                        path=(StaticSegment("events"), ParamSegment("event_id"), StaticSegment("activities"))
                        view=ActivitiesPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
