//! The two redirect destinations.
//!
//! Rendering the real sign-in and access-denied views belongs to the web
//! front end; these endpoints give the redirects a concrete landing point.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Body served at a redirect destination.
#[derive(Debug, Clone, Serialize)]
pub struct DestinationPage {
    /// Which destination this is.
    pub page: &'static str,
    /// Where the caller can sign in.
    pub login: String,
}

/// Login destination.
pub async fn login(State(state): State<AppState>) -> Json<DestinationPage> {
    Json(DestinationPage {
        page: "login",
        login: state.gatekeeper.targets().login.path(),
    })
}

/// Access-denied destination.
pub async fn access_denied(State(state): State<AppState>) -> Json<DestinationPage> {
    Json(DestinationPage {
        page: "access_denied",
        login: state.gatekeeper.targets().login.path(),
    })
}
