//! Placeholder body for guarded routes: echoes the request context the
//! guard established.

use axum::Json;
use axum::extract::MatchedPath;
use axum::http::Method;
use serde::Serialize;

use crate::extractors::{CurrentUserId, CurrentUserRole};

/// What the guard let through.
#[derive(Debug, Clone, Serialize)]
pub struct AreaResponse {
    /// Matched route template.
    pub route: String,
    /// Request method.
    pub method: String,
    /// Role stored by the guard.
    pub role: String,
    /// User id stored by session guards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Echoes the admitted principal.
pub async fn show(
    method: Method,
    path: MatchedPath,
    CurrentUserRole(role): CurrentUserRole,
    user_id: Option<CurrentUserId>,
) -> Json<AreaResponse> {
    Json(AreaResponse {
        route: path.as_str().to_string(),
        method: method.to_string(),
        role,
        user_id: user_id.map(|CurrentUserId(id)| id),
    })
}
