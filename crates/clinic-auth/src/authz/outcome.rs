//! The terminal decision of an authorization check.

use crate::principal::Principal;

/// Result of running a guard against a request.
///
/// Both redirects are ordinary outcomes; neither is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationOutcome {
    /// Proceed to the handler as this principal.
    Allow(Principal),
    /// No usable principal: send the caller to sign in.
    RedirectToLogin,
    /// Signed in but not permitted.
    RedirectToAccessDenied,
}

impl AuthorizationOutcome {
    /// Whether the request may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow(_))
    }

    /// The principal, when allowed.
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Allow(principal) => Some(principal),
            _ => None,
        }
    }
}
