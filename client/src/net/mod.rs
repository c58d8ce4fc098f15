//! Networking modules for the REST API and live chat socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `chat_socket` manages the per-conversation
//! websocket, and `types` re-exports the shared wire schema.

pub mod api;
pub mod chat_socket;
pub mod types;
