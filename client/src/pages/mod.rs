//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth guard, loads, offline
//! fallbacks) and delegates rendering details to `components`.

pub mod activities;
pub mod check_in;
pub mod communication;
pub mod dashboard;
pub mod event_detail;
pub mod event_new;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod settings;
