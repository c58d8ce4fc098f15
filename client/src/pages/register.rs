//! Registration page. Server validation errors are shown next to the field
//! they name; there is no client-side re-validation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use roster::error::{NON_FIELD_ERRORS, field_message};
use roster::{ApiError, FieldErrors};

use crate::net::types::RegisterRequest;
use crate::state::auth::AuthState;
use crate::util::storage::{LocalStore, log_storage_error};

/// Form fields in display order: (payload key, label, input type).
const FIELDS: &[(&str, &str, &str)] = &[
    ("username", "Username", "text"),
    ("email", "Email", "email"),
    ("first_name", "First name", "text"),
    ("last_name", "Last name", "text"),
    ("password", "Password", "password"),
    ("password2", "Confirm password", "password"),
];

/// Message for the form banner: non-field errors, or the error text when the
/// failure was not a validation error.
pub fn form_message(error: &ApiError) -> String {
    match error.field_errors() {
        Some(errors) => field_message(errors, NON_FIELD_ERRORS)
            .or_else(|| field_message(errors, "detail"))
            .unwrap_or_else(|| "Please fix the highlighted fields.".to_owned()),
        None => error.to_string(),
    }
}

fn field_value(form: &RegisterRequest, key: &str) -> String {
    match key {
        "username" => form.username.clone(),
        "email" => form.email.clone(),
        "first_name" => form.first_name.clone(),
        "last_name" => form.last_name.clone(),
        "password" => form.password.clone(),
        "password2" => form.password2.clone(),
        _ => String::new(),
    }
}

fn set_field(form: &mut RegisterRequest, key: &str, value: String) {
    match key {
        "username" => form.username = value,
        "email" => form.email = value,
        "first_name" => form.first_name = value,
        "last_name" => form.last_name = value,
        "password" => form.password = value,
        "password2" => form.password2 = value,
        _ => {}
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterRequest::default());
    let errors = RwSignal::new(FieldErrors::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = form.get_untracked();
        busy.set(true);
        errors.set(FieldErrors::new());
        message.set(String::new());
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&request).await {
                Ok(response) => {
                    let mut saved = Ok(());
                    auth.update(|a| saved = a.sign_in(&LocalStore, response));
                    log_storage_error(saved);
                }
                Err(e) => {
                    if let Some(fields) = e.field_errors() {
                        errors.set(fields.clone());
                    }
                    message.set(form_message(&e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {FIELDS
                        .iter()
                        .map(|&(key, label, kind)| {
                            view! {
                                <label class="field" class:field--error=move || errors.get().contains_key(key)>
                                    <span>{label}</span>
                                    <input
                                        class="input"
                                        type=kind
                                        prop:value=move || form.with(|f| field_value(f, key))
                                        on:input=move |ev| form.update(|f| set_field(f, key, event_target_value(&ev)))
                                    />
                                    {move || {
                                        errors
                                            .with(|e| field_message(e, key))
                                            .map(|msg| view! { <span class="field__error">{msg}</span> })
                                    }}
                                </label>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-card__message">{move || message.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <A href="/login">"Log in"</A>
                </p>
            </div>
        </div>
    }
}
