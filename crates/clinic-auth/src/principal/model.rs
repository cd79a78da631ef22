//! Principal and resolution result types.

use std::fmt;

use clinic_entity::user::UserRole;

/// Which credential source a boundary reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthMode {
    /// Bearer-token claims attached by the token middleware.
    Claims,
    /// Server-side session values.
    Session,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Claims => write!(f, "claims"),
            Self::Session => write!(f, "session"),
        }
    }
}

/// The resolved identity for the current request.
///
/// `role` holds the raw value from the credential source. A value that is
/// not a known role still resolves; it simply fails every role and
/// permission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Opaque user identifier.
    pub user_id: String,
    /// Role name as found in the credential source.
    pub role: String,
}

impl Principal {
    /// Creates a principal.
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
        }
    }

    /// The role, if it is one of the known roles (exact match).
    pub fn user_role(&self) -> Option<UserRole> {
        UserRole::parse_exact(&self.role)
    }
}

/// Why no principal could be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnresolvedReason {
    /// No claims identity is attached to the request.
    NoIdentity,
    /// A claims identity is attached but did not authenticate.
    NotAuthenticated,
    /// The request carries no session.
    NoSession,
    /// The role value is missing or empty.
    MissingRole,
    /// The user id value is missing or empty.
    MissingUserId,
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoIdentity => "no identity",
            Self::NotAuthenticated => "identity not authenticated",
            Self::NoSession => "no session",
            Self::MissingRole => "missing role",
            Self::MissingUserId => "missing user id",
        };
        f.write_str(text)
    }
}

/// Result of principal resolution. "Not logged in" is a normal result,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A principal was found.
    Resolved(Principal),
    /// No usable principal.
    Unresolved(UnresolvedReason),
}

impl Resolution {
    /// Builds a resolution from two optional raw values, treating empty
    /// strings as absent. The role is checked first.
    pub fn from_parts(user_id: Option<String>, role: Option<String>) -> Self {
        let Some(role) = role.filter(|r| !r.is_empty()) else {
            return Self::Unresolved(UnresolvedReason::MissingRole);
        };
        let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
            return Self::Unresolved(UnresolvedReason::MissingUserId);
        };
        Self::Resolved(Principal { user_id, role })
    }

    /// Returns the principal if resolved.
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Resolved(principal) => Some(principal),
            Self::Unresolved(_) => None,
        }
    }
}
