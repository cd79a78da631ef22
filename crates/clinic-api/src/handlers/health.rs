//! Liveness probe.

use axum::Json;
use serde_json::{Value, json};

/// Always-200 liveness check. Unguarded.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}
