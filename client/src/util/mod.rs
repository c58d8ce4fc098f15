//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, theme,
//! connectivity, route params) from page and component logic.

pub mod auth;
pub mod connectivity;
pub mod dark_mode;
pub mod route;
pub mod storage;
