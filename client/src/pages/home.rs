//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Rollcall"</h1>
                <p class="hero__lead">
                    "Invite guests, check them in at the door with a QR scan, and keep the room talking."
                </p>
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <div class="hero__actions">
                                <A href="/register" attr:class="btn btn--primary">"Get started"</A>
                                <A href="/login" attr:class="btn">"Log in"</A>
                            </div>
                        }
                    }
                >
                    <div class="hero__actions">
                        <A href="/dashboard" attr:class="btn btn--primary">"Go to dashboard"</A>
                    </div>
                </Show>
            </section>
            <section class="features">
                <article class="feature">
                    <h2>"Invitations"</h2>
                    <p>"Every guest gets a personal QR code."</p>
                </article>
                <article class="feature">
                    <h2>"Door check-in"</h2>
                    <p>"Scan with any camera. Keeps working when the venue Wi-Fi drops."</p>
                </article>
                <article class="feature">
                    <h2>"Engagement"</h2>
                    <p>"Chat, announcements, a forum, live Q&A and icebreakers with a leaderboard."</p>
                </article>
            </section>
        </div>
    }
}
