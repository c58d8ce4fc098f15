//! Wire DTOs used by pages and components.
//!
//! DESIGN
//! ======
//! The shapes live in `roster::types` so the offline queue and caches can be
//! tested without a browser; this module re-exports them under the client's
//! `net` namespace.

pub use roster::types::*;
