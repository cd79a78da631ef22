//! Session-cookie middleware: attaches a [`SessionHandle`] to the request.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::{Cookie, HeaderMapExt};

use clinic_auth::principal::SessionHandle;

use crate::state::AppState;

/// Reads the configured session cookie and stores its id in the request
/// extensions. Requests without the cookie pass through untouched.
pub async fn attach_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let session_id = request
        .headers()
        .typed_get::<Cookie>()
        .and_then(|cookie| {
            cookie
                .get(&state.config.session.cookie_name)
                .map(str::to_string)
        })
        .filter(|id| !id.is_empty());

    if let Some(id) = session_id {
        request.extensions_mut().insert(SessionHandle(id));
    }

    next.run(request).await
}
