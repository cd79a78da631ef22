//! Axum middleware stack.
//!
//! Order on a protected route: `logging` → `authenticate` and `session`
//! (attach credentials) → `authorize` (route layer) → handler.

pub mod authenticate;
pub mod authorize;
pub mod logging;
pub mod session;
