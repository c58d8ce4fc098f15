//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the event surfaces (invitations,
//! scanner, communication tabs) while reading shared state from Leptos
//! context providers.

pub mod announcements_tab;
pub mod attendee_list;
pub mod event_card;
pub mod forum_tab;
pub mod invitation_sidebar;
pub mod leaderboard;
pub mod messages_tab;
pub mod nav_bar;
pub mod notice_banner;
pub mod qa_tab;
pub mod qr_scanner;
pub mod sync_panel;
