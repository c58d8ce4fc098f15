//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `notice`, `ui`) and provided as
//! `RwSignal`s from the app root so pages depend on small focused models.
//! Page-local data (events, messages, queues) stays in page signals.

pub mod auth;
pub mod notice;
pub mod ui;
