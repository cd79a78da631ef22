//! JWT claims structure carried by bearer tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::principal::ClaimsIdentity;

/// JWT claims payload.
///
/// `sub` and `role` are optional at the wire level: a verified token
/// missing either still decodes, and resolution reports it as unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// User role name at the time of issuance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

impl From<Claims> for ClaimsIdentity {
    fn from(claims: Claims) -> Self {
        ClaimsIdentity::authenticated(claims.sub, claims.role)
    }
}
