//! Authorization guard middleware.
//!
//! Each protected route gets a [`Gate`]: one interceptor bound to one guard
//! and one credential source, plus the shared redirect targets. The gate runs
//! as a route layer, so it completes before the handler body starts.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::Extensions;
use axum::middleware::{self as axum_middleware, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::MethodRouter;
use tracing::debug;

use clinic_auth::authz::{AuthorizationInterceptor, AuthorizationOutcome, Guard, RedirectTargets};
use clinic_auth::principal::{
    AuthMode, ClaimsIdentity, ClaimsResolver, CredentialContext, PrincipalResolver,
    SessionHandle, SessionResolver,
};
use clinic_core::config::AuthConfig;
use clinic_core::traits::SessionStore;

use crate::error::ApiError;
use crate::extractors::{CurrentUserId, CurrentUserRole};
use crate::state::AppState;

/// Hands out gates for either credential source.
#[derive(Debug)]
pub struct Gatekeeper {
    /// Resolver for bearer-token routes.
    claims: Arc<dyn PrincipalResolver>,
    /// Resolver for session-cookie routes.
    session: Arc<dyn PrincipalResolver>,
    /// Destinations shared by both sources.
    targets: Arc<RedirectTargets>,
}

impl Gatekeeper {
    /// Builds both resolvers and the redirect targets.
    pub fn new(config: &AuthConfig, session_store: Arc<dyn SessionStore>) -> Self {
        Self {
            claims: Arc::new(ClaimsResolver::new()),
            session: Arc::new(SessionResolver::new(session_store)),
            targets: Arc::new(RedirectTargets::from_config(config)),
        }
    }

    /// A gate reading bearer-token claims.
    pub fn claims(&self, guard: Guard) -> Gate {
        self.gate(guard, self.claims.clone())
    }

    /// A gate reading session values.
    pub fn session(&self, guard: Guard) -> Gate {
        self.gate(guard, self.session.clone())
    }

    /// The redirect targets every gate uses.
    pub fn targets(&self) -> &RedirectTargets {
        &self.targets
    }

    fn gate(&self, guard: Guard, resolver: Arc<dyn PrincipalResolver>) -> Gate {
        Gate {
            interceptor: AuthorizationInterceptor::new(guard, resolver),
            targets: self.targets.clone(),
        }
    }
}

/// A configured guard ready to be layered onto a route.
#[derive(Debug, Clone)]
pub struct Gate {
    interceptor: AuthorizationInterceptor,
    targets: Arc<RedirectTargets>,
}

/// Wraps a method router so every method on it passes through `gate`.
pub fn guarded(route: MethodRouter<AppState>, gate: Gate) -> MethodRouter<AppState> {
    route.route_layer(axum_middleware::from_fn_with_state(gate, authorize))
}

/// Collects what the credential middleware attached to the request.
pub fn credential_context(extensions: &Extensions) -> CredentialContext {
    let mut credentials = CredentialContext::new();
    if let Some(identity) = extensions.get::<ClaimsIdentity>() {
        credentials = credentials.with_identity(identity.clone());
    }
    if let Some(handle) = extensions.get::<SessionHandle>() {
        credentials = credentials.with_session(handle.clone());
    }
    credentials
}

/// Runs the gate's interceptor and either forwards the request or redirects.
///
/// On `Allow`, the resolved role is stored as [`CurrentUserRole`] and, for
/// session gates, the user id as [`CurrentUserId`]. Resolver faults are
/// returned as errors for the generic error mapping.
pub async fn authorize(
    State(gate): State<Gate>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let credentials = credential_context(request.extensions());
    let outcome = gate.interceptor.evaluate(&credentials).await?;

    let principal = match outcome {
        AuthorizationOutcome::Allow(principal) => principal,
        denied => {
            let Some(destination) = gate.targets.for_outcome(&denied) else {
                return Err(clinic_core::AppError::internal("denial without destination").into());
            };
            debug!(
                guard = %gate.interceptor.guard(),
                path = %request.uri().path(),
                destination = %destination,
                "Redirecting"
            );
            return Ok(Redirect::to(&destination.path()).into_response());
        }
    };

    if gate.interceptor.mode() == AuthMode::Session {
        request
            .extensions_mut()
            .insert(CurrentUserId(principal.user_id.clone()));
    }
    request
        .extensions_mut()
        .insert(CurrentUserRole(principal.role));

    Ok(next.run(request).await)
}
