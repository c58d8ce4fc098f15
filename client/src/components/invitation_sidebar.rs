//! Invitation sidebar on the event detail page: guest list with QR codes and
//! the create-invitation form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is an `InvitationList` mirrored to `invitations_{event}`. A
//! successful POST is prepended locally with no follow-up GET. While offline
//! the payload goes to `pending_invitations` and is shown as pending until
//! the organizer syncs.

use leptos::prelude::*;
use roster::cache::InvitationList;
use roster::pending::PendingQueue;

use crate::components::notice_banner::{flash, flash_error};
use crate::net::types::{Invitation, NewInvitation};
use crate::state::notice::{NoticeKind, NoticeState};
use crate::util::storage::{LocalStore, log_storage_error};

#[component]
pub fn InvitationSidebar(
    event_id: i64,
    invitations: RwSignal<InvitationList>,
    pending: RwSignal<PendingQueue<NewInvitation>>,
    #[prop(into)] offline: Signal<bool>,
) -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();
    let guest_name = RwSignal::new(String::new());
    let guest_email = RwSignal::new(String::new());
    let guest_phone = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name = guest_name.get_untracked().trim().to_owned();
        let email = guest_email.get_untracked().trim().to_owned();
        if name.is_empty() || email.is_empty() {
            flash(notice, NoticeKind::Error, "Guest name and email are required.");
            return;
        }
        let phone = guest_phone.get_untracked().trim().to_owned();
        let draft = NewInvitation {
            event: event_id,
            guest_name: name,
            guest_email: email,
            guest_phone: Some(phone).filter(|p| !p.is_empty()),
        };
        let clear_form = move || {
            guest_name.set(String::new());
            guest_email.set(String::new());
            guest_phone.set(String::new());
        };

        if offline.get_untracked() {
            let mut saved = Ok(());
            pending.update(|q| saved = q.push(&LocalStore, draft));
            match saved {
                Ok(()) => {
                    clear_form();
                    flash(notice, NoticeKind::Info, "You are offline. The invitation will be sent when you sync.");
                }
                Err(e) => flash(notice, NoticeKind::Error, format!("Could not save the invitation offline: {e}")),
            }
            return;
        }

        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::create_invitation(&draft).await {
                Ok(invitation) => {
                    let guest = invitation.guest_name.clone();
                    let mut cached = Ok(());
                    invitations.update(|list| cached = list.record_created(&LocalStore, invitation));
                    log_storage_error(cached);
                    clear_form();
                    flash(notice, NoticeKind::Success, format!("Invitation created for {guest}."));
                }
                Err(e) => flash_error(notice, &e),
            }
            busy.set(false);
        });
    };

    view! {
        <aside class="invitation-sidebar">
            <h2>"Invitations"</h2>
            <form class="invitation-form" on:submit=on_submit>
                <input
                    class="input"
                    type="text"
                    placeholder="Guest name"
                    prop:value=move || guest_name.get()
                    on:input=move |ev| guest_name.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="email"
                    placeholder="guest@example.com"
                    prop:value=move || guest_email.get()
                    on:input=move |ev| guest_email.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="tel"
                    placeholder="Phone (optional)"
                    prop:value=move || guest_phone.get()
                    on:input=move |ev| guest_phone.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create invitation" }}
                </button>
            </form>

            <ul class="invitation-list">
                {move || {
                    pending
                        .get()
                        .for_event(event_id)
                        .into_iter()
                        .map(|draft| {
                            view! {
                                <li class="invitation invitation--pending">
                                    <span class="invitation__name">{draft.guest_name.clone()}</span>
                                    <span class="invitation__email">{draft.guest_email.clone()}</span>
                                    <span class="invitation__badge">"Pending sync"</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    invitations.get().items().iter().cloned().map(|inv| view! { <InvitationRow invitation=inv/> }).collect_view()
                }}
            </ul>
            <Show when=move || invitations.get().is_empty() && pending.get().for_event(event_id).is_empty()>
                <p class="muted">"No invitations yet."</p>
            </Show>
        </aside>
    }
}

#[component]
fn InvitationRow(invitation: Invitation) -> impl IntoView {
    let qr = invitation.qr_code_url.clone().filter(|url| !url.is_empty());
    let alt = format!("QR code for {}", invitation.guest_name);

    view! {
        <li class="invitation">
            <span class="invitation__name">{invitation.guest_name}</span>
            <span class="invitation__email">{invitation.guest_email}</span>
            {invitation.guest_phone.map(|phone| view! { <span class="invitation__phone">{phone}</span> })}
            {qr.map(|src| view! { <img class="invitation__qr" src=src alt=alt/> })}
        </li>
    }
}
