//! The authorization interceptor: resolve, check, decide.

use std::sync::Arc;

use tracing::{debug, info};

use clinic_core::result::AppResult;

use crate::principal::{AuthMode, CredentialContext, Principal, PrincipalResolver, Resolution};
use crate::rbac::PermissionMatrix;

use super::guard::{Guard, Requirement};
use super::outcome::AuthorizationOutcome;

/// Runs one guard against a request's credentials.
///
/// The guard and the resolver are fixed at construction. Evaluation holds
/// no state between requests, so one interceptor is shared by every request
/// to the routes it protects.
#[derive(Debug, Clone)]
pub struct AuthorizationInterceptor {
    /// Which check to run.
    guard: Guard,
    /// The credential source for this boundary.
    resolver: Arc<dyn PrincipalResolver>,
    /// Role → permission lookup.
    matrix: &'static PermissionMatrix,
}

impl AuthorizationInterceptor {
    /// Creates an interceptor using the global permission matrix.
    pub fn new(guard: Guard, resolver: Arc<dyn PrincipalResolver>) -> Self {
        Self::with_matrix(guard, resolver, PermissionMatrix::global())
    }

    /// Creates an interceptor over a specific matrix.
    pub fn with_matrix(
        guard: Guard,
        resolver: Arc<dyn PrincipalResolver>,
        matrix: &'static PermissionMatrix,
    ) -> Self {
        Self {
            guard,
            resolver,
            matrix,
        }
    }

    /// The guard this interceptor enforces.
    pub fn guard(&self) -> Guard {
        self.guard
    }

    /// The credential source this interceptor reads.
    pub fn mode(&self) -> AuthMode {
        self.resolver.mode()
    }

    /// Resolves the principal and decides the outcome.
    ///
    /// Returns `Err` only when the resolver's backing store fails.
    pub async fn evaluate(
        &self,
        credentials: &CredentialContext,
    ) -> AppResult<AuthorizationOutcome> {
        let principal = match self.resolver.resolve(credentials).await? {
            Resolution::Resolved(principal) => principal,
            Resolution::Unresolved(reason) => {
                debug!(
                    guard = %self.guard,
                    mode = %self.mode(),
                    %reason,
                    "No principal; redirecting to login"
                );
                return Ok(AuthorizationOutcome::RedirectToLogin);
            }
        };

        if self.permits(&principal) {
            debug!(
                guard = %self.guard,
                mode = %self.mode(),
                user_id = %principal.user_id,
                role = %principal.role,
                "Access granted"
            );
            Ok(AuthorizationOutcome::Allow(principal))
        } else {
            info!(
                guard = %self.guard,
                mode = %self.mode(),
                user_id = %principal.user_id,
                role = %principal.role,
                "Access denied"
            );
            Ok(AuthorizationOutcome::RedirectToAccessDenied)
        }
    }

    /// Applies the guard's requirement to a resolved principal.
    ///
    /// Roles match exactly; an unrecognized role fails every role and
    /// permission requirement.
    pub fn permits(&self, principal: &Principal) -> bool {
        match self.guard.requirement() {
            Requirement::Authenticated => true,
            Requirement::AnyRole(allowed) => principal
                .user_role()
                .is_some_and(|role| allowed.contains(role)),
            Requirement::Permission(permission) => principal
                .user_role()
                .is_some_and(|role| self.matrix.has_permission(&role, &permission)),
        }
    }
}
