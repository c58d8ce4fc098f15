//! REST API helpers for the external Rollcall backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, authenticated with
//! `Authorization: Token <token>` read from `localStorage`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `ApiError::Network`; non-2xx bodies go through
//! `ApiError::from_response` so 401s, DRF field errors and `detail` messages
//! reach the page as typed variants. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use roster::KeyValueStore;
#[cfg(any(test, feature = "hydrate"))]
use roster::storage::keys;
use roster::{ApiError, endpoints};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    ActivityAnswer, ActivityResponse, Activity, Announcement, Attendee, AuthResponse, CheckInRecord, CheckInRequest,
    Conversation, Event, ForumPost, ForumThread, Invitation, LeaderboardEntry, Listing, LoginRequest, Message,
    NewAnnouncement, NewAnswer, NewEvent, NewInvitation, NewMessage, NewPost, NewQuestion, NewThread, QaAnswer,
    QaQuestion, RegisterRequest,
};

/// `Authorization` header value for the stored session, if any.
#[cfg(any(test, feature = "hydrate"))]
fn authorization<S: KeyValueStore + ?Sized>(store: &S) -> Option<String> {
    store
        .get_item(keys::AUTH_TOKEN)
        .filter(|token| !token.is_empty())
        .map(|token| endpoints::auth_header(&token))
}

#[cfg(any(test, feature = "hydrate"))]
fn network_error(error: impl std::fmt::Display) -> ApiError {
    ApiError::Network(error.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_error(error: impl std::fmt::Display) -> ApiError {
    ApiError::Decode(error.to_string())
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match authorization(&crate::util::storage::LocalStore) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<String, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(network_error)?;
    if resp.ok() {
        Ok(body)
    } else {
        Err(ApiError::from_response(status, &body))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(decode_error)
}

/// `GET path` and decode the JSON body.
///
/// # Errors
///
/// Network, status or decode failure; `Unavailable` during SSR.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::api_url(path);
        let resp = with_auth(gloo_net::http::Request::get(&url)).send().await.map_err(network_error)?;
        decode_body(&read_response(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `GET path` for a list, accepting bare arrays and paginated bodies.
///
/// # Errors
///
/// Same as [`get_json`].
pub async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    get_json::<Listing<T>>(path).await.map(Listing::into_vec)
}

/// `POST path` with a JSON body and decode the JSON response.
///
/// # Errors
///
/// Network, status or decode failure; `Unavailable` during SSR.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::api_url(path);
        let request = with_auth(gloo_net::http::Request::post(&url)).json(body).map_err(decode_error)?;
        let resp = request.send().await.map_err(network_error)?;
        decode_body(&read_response(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `POST path` without a body, ignoring the response body.
///
/// # Errors
///
/// Network or status failure; `Unavailable` during SSR.
pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::api_url(path);
        let resp = with_auth(gloo_net::http::Request::post(&url)).send().await.map_err(network_error)?;
        read_response(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// # Errors
///
/// `Status` with the backend's detail on bad credentials.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    post_json(endpoints::LOGIN, request).await
}

/// # Errors
///
/// `Validation` with per-field messages when the form is rejected.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    post_json(endpoints::REGISTER, request).await
}

/// # Errors
///
/// Transport or status failure; callers clear the local session regardless.
pub async fn logout() -> Result<(), ApiError> {
    post_empty(endpoints::LOGOUT).await
}

// =============================================================================
// EVENTS, INVITATIONS, ATTENDANCE
// =============================================================================

/// # Errors
///
/// See [`get_json`].
pub async fn list_events() -> Result<Vec<Event>, ApiError> {
    get_list(endpoints::EVENTS).await
}

/// # Errors
///
/// See [`get_json`].
pub async fn get_event(event_id: i64) -> Result<Event, ApiError> {
    get_json(&endpoints::event(event_id)).await
}

/// # Errors
///
/// See [`post_json`].
pub async fn create_event(event: &NewEvent) -> Result<Event, ApiError> {
    post_json(endpoints::EVENTS, event).await
}

/// # Errors
///
/// See [`get_json`].
pub async fn list_invitations(event_id: i64) -> Result<Vec<Invitation>, ApiError> {
    get_list(&endpoints::event_invitations(event_id)).await
}

/// # Errors
///
/// See [`post_json`].
pub async fn create_invitation(invitation: &NewInvitation) -> Result<Invitation, ApiError> {
    post_json(endpoints::INVITATIONS, invitation).await
}

/// # Errors
///
/// See [`get_json`].
pub async fn list_attendees(event_id: i64) -> Result<Vec<Attendee>, ApiError> {
    get_list(&endpoints::event_attendees(event_id)).await
}

/// # Errors
///
/// See [`get_json`].
pub async fn list_check_ins(event_id: i64) -> Result<Vec<CheckInRecord>, ApiError> {
    get_list(&endpoints::event_check_ins(event_id)).await
}

/// Submit one scanned or typed code.
///
/// # Errors
///
/// `Status` with the backend's detail for unknown or already-used codes.
pub async fn check_in(qr_code: &str) -> Result<CheckInRecord, ApiError> {
    let request = CheckInRequest { qr_code: qr_code.to_owned() };
    post_json(endpoints::CHECK_IN, &request).await
}

// =============================================================================
// COMMUNICATION
// =============================================================================

/// # Errors
///
/// See [`get_json`].
pub async fn list_conversations(event_id: i64) -> Result<Vec<Conversation>, ApiError> {
    get_list(&endpoints::event_conversations(event_id)).await
}

/// # Errors
///
/// See [`get_json`].
pub async fn list_messages(conversation_id: i64) -> Result<Vec<Message>, ApiError> {
    get_list(&endpoints::conversation_messages(conversation_id)).await
}

/// REST fallback used when the chat socket is not open.
///
/// # Errors
///
/// See [`post_json`].
pub async fn send_message(conversation_id: i64, content: &str) -> Result<Message, ApiError> {
    let body = NewMessage { content: content.to_owned() };
    post_json(&endpoints::conversation_messages(conversation_id), &body).await
}

/// # Errors
///
/// See [`get_json`].
pub async fn list_announcements(event_id: i64) -> Result<Vec<Announcement>, ApiError> {
    get_list(&endpoints::event_announcements(event_id)).await
}

/// # Errors
///
/// See [`post_json`].
pub async fn create_announcement(announcement: &NewAnnouncement) -> Result<Announcement, ApiError> {
    post_json(endpoints::ANNOUNCEMENTS, announcement).await
}

/// # Errors
///
/// See [`get_json`].
pub async fn list_threads(event_id: i64) -> Result<Vec<ForumThread>, ApiError> {
    get_list(&endpoints::event_threads(event_id)).await
}

/// # Errors
///
/// See [`post_json`].
pub async fn create_thread(thread: &NewThread) -> Result<ForumThread, ApiError> {
    post_json(endpoints::FORUM_THREADS, thread).await
}

/// # Errors
///
/// See [`get_json`].
pub async fn list_posts(thread_id: i64) -> Result<Vec<ForumPost>, ApiError> {
    get_list(&endpoints::thread_posts(thread_id)).await
}

/// # Errors
///
/// See [`post_json`].
pub async fn create_post(thread_id: i64, post: &NewPost) -> Result<ForumPost, ApiError> {
    post_json(&endpoints::thread_posts(thread_id), post).await
}

/// # Errors
///
/// See [`get_json`].
pub async fn list_questions(event_id: i64) -> Result<Vec<QaQuestion>, ApiError> {
    get_list(&endpoints::event_questions(event_id)).await
}

/// # Errors
///
/// See [`post_json`].
pub async fn ask_question(question: &NewQuestion) -> Result<QaQuestion, ApiError> {
    post_json(endpoints::QA_QUESTIONS, question).await
}

/// # Errors
///
/// See [`post_json`].
pub async fn answer_question(question_id: i64, answer: &NewAnswer) -> Result<QaAnswer, ApiError> {
    post_json(&endpoints::question_answers(question_id), answer).await
}

/// # Errors
///
/// See [`post_empty`].
pub async fn upvote_question(question_id: i64) -> Result<(), ApiError> {
    post_empty(&endpoints::question_upvote(question_id)).await
}

// =============================================================================
// ICEBREAKERS
// =============================================================================

/// # Errors
///
/// See [`get_json`].
pub async fn list_activities(event_id: i64) -> Result<Vec<Activity>, ApiError> {
    get_list(&endpoints::event_activities(event_id)).await
}

/// # Errors
///
/// See [`post_json`].
pub async fn respond_to_activity(activity_id: i64, response: &str) -> Result<ActivityResponse, ApiError> {
    let body = ActivityAnswer { response: response.to_owned() };
    post_json(&endpoints::activity_respond(activity_id), &body).await
}

/// # Errors
///
/// See [`get_json`].
pub async fn leaderboard(event_id: i64) -> Result<Vec<LeaderboardEntry>, ApiError> {
    get_list(&endpoints::event_leaderboard(event_id)).await
}
