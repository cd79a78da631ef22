//! # clinic-api
//!
//! Axum HTTP layer for the clinic: the upstream credential middleware, the
//! authorization guard middleware, advisory request-context extractors, and
//! the router that binds guards to routes.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use middleware::authorize::{Gate, Gatekeeper};
pub use router::build_router;
pub use state::AppState;
