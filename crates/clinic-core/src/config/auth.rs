//! Authentication and redirect configuration.

use serde::{Deserialize, Serialize};

/// Bearer-token verification and authorization redirect configuration.
///
/// Both redirect destinations share `redirect_area`, so claims-mode and
/// session-mode guards always send users to the same pair of pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT verification (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Allowed clock skew in seconds when validating `exp`.
    #[serde(default = "default_leeway")]
    pub jwt_leeway_seconds: u64,
    /// Area hosting the login and access-denied destinations.
    #[serde(default = "default_redirect_area")]
    pub redirect_area: String,
    /// Action name of the login destination.
    #[serde(default = "default_login_action")]
    pub login_action: String,
    /// Action name of the access-denied destination.
    #[serde(default = "default_access_denied_action")]
    pub access_denied_action: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_leeway_seconds: default_leeway(),
            redirect_area: default_redirect_area(),
            login_action: default_login_action(),
            access_denied_action: default_access_denied_action(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_leeway() -> u64 {
    5
}

fn default_redirect_area() -> String {
    "Account".to_string()
}

fn default_login_action() -> String {
    "Login".to_string()
}

fn default_access_denied_action() -> String {
    "AccessDenied".to_string()
}
