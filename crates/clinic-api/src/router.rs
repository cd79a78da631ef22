//! Route definitions.
//!
//! JSON API routes under `/api` authenticate with bearer tokens and are
//! guarded per permission. Browser routes authenticate with the session
//! cookie and are guarded per role group. Both families redirect to the same
//! login and access-denied destinations.

use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use clinic_auth::authz::Guard;
use clinic_auth::rbac::Permission;

use crate::handlers;
use crate::middleware;
use crate::middleware::authorize::guarded;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .nest("/api", api_routes(&state))
        .merge(web_routes(&state))
        .merge(account_routes(&state))
        .route("/health", get(handlers::health::health))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::attach_session,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::authenticate::bearer_identity,
        ))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Bearer-token routes, one permission guard per operation.
fn api_routes(state: &AppState) -> Router<AppState> {
    let gk = &state.gatekeeper;
    let require = |permission| gk.claims(Guard::Permission(permission));

    Router::new()
        .route(
            "/me",
            guarded(get(handlers::areas::show), gk.claims(Guard::Authenticated)),
        )
        .route(
            "/patients",
            guarded(get(handlers::areas::show), require(Permission::ViewPatients)).merge(
                guarded(post(handlers::areas::show), require(Permission::CreatePatients)),
            ),
        )
        .route(
            "/patients/{id}",
            guarded(get(handlers::areas::show), require(Permission::ViewPatients))
                .merge(guarded(
                    put(handlers::areas::show),
                    require(Permission::UpdatePatients),
                ))
                .merge(guarded(
                    delete(handlers::areas::show),
                    require(Permission::DeletePatients),
                )),
        )
        .route(
            "/appointments",
            guarded(get(handlers::areas::show), require(Permission::ViewAppointments)).merge(
                guarded(
                    post(handlers::areas::show),
                    require(Permission::CreateAppointments),
                ),
            ),
        )
        .route(
            "/appointments/{id}",
            guarded(get(handlers::areas::show), require(Permission::ViewAppointments))
                .merge(guarded(
                    put(handlers::areas::show),
                    require(Permission::UpdateAppointments),
                ))
                .merge(guarded(
                    delete(handlers::areas::show),
                    require(Permission::DeleteAppointments),
                )),
        )
        .route(
            "/prescriptions",
            guarded(
                post(handlers::areas::show),
                require(Permission::CreatePrescriptions),
            ),
        )
        .route(
            "/medications/usage",
            guarded(
                post(handlers::areas::show),
                require(Permission::TrackMedicationUsage),
            ),
        )
        .route(
            "/system",
            guarded(get(handlers::areas::show), require(Permission::ManageSystem)),
        )
}

/// Session-cookie routes, one role guard per area.
fn web_routes(state: &AppState) -> Router<AppState> {
    let gk = &state.gatekeeper;
    let page = |guard| guarded(get(handlers::areas::show), gk.session(guard));

    Router::new()
        .route("/dashboard", page(Guard::Authenticated))
        .route("/clinical", page(Guard::Healthcare))
        .route("/records", page(Guard::DoctorOrAdmin))
        .route("/ward", page(Guard::NurseOrDoctorOrAdmin))
        .route("/front-desk", page(Guard::StaffOrAdmin))
        .route("/admin", page(Guard::AdminOnly))
        .route("/doctor", page(Guard::DoctorOnly))
        .route("/nurse", page(Guard::NurseOnly))
        .route("/staff", page(Guard::StaffOnly))
}

/// The unguarded redirect destinations.
fn account_routes(state: &AppState) -> Router<AppState> {
    let targets = state.gatekeeper.targets();

    Router::new()
        .route(&targets.login.path(), get(handlers::account::login))
        .route(
            &targets.access_denied.path(),
            get(handlers::account::access_denied),
        )
}
