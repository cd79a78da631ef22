//! Bearer-token middleware: attaches a [`ClaimsIdentity`] to the request.
//!
//! This never rejects. No `Authorization` header means no identity; a
//! header that fails verification means an unauthenticated identity. The
//! guards decide what either case means for a given route.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use clinic_auth::principal::ClaimsIdentity;

use crate::state::AppState;

/// Verifies a `Bearer` token, if present, and stores the identity in the
/// request extensions.
pub async fn bearer_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.to_str().unwrap_or_default().to_string());

    if let Some(header) = header {
        let identity = match header.strip_prefix("Bearer ") {
            Some(token) => match state.jwt_decoder.decode(token.trim()) {
                Ok(claims) => ClaimsIdentity::from(claims),
                Err(rejection) => {
                    debug!(%rejection, "Bearer token rejected");
                    ClaimsIdentity::anonymous()
                }
            },
            None => {
                debug!("Authorization header is not a bearer token");
                ClaimsIdentity::anonymous()
            }
        };
        request.extensions_mut().insert(identity);
    }

    next.run(request).await
}
