//! Redirect destinations for the two denial outcomes.

use std::fmt;

use clinic_core::config::AuthConfig;

use super::outcome::AuthorizationOutcome;

/// A named `(area, action)` destination, rendered as `/{area}/{action}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Area (controller) name.
    pub area: String,
    /// Action name.
    pub action: String,
}

impl Destination {
    /// Creates a destination.
    pub fn new(area: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            action: action.into(),
        }
    }

    /// The request path for this destination.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.area, self.action)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.area, self.action)
    }
}

/// The single destination scheme shared by claims and session guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTargets {
    /// Where unauthenticated callers go.
    pub login: Destination,
    /// Where forbidden callers go.
    pub access_denied: Destination,
}

impl RedirectTargets {
    /// Builds both destinations under the configured area.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            login: Destination::new(&config.redirect_area, &config.login_action),
            access_denied: Destination::new(&config.redirect_area, &config.access_denied_action),
        }
    }

    /// The destination for a denial outcome; `None` for `Allow`.
    pub fn for_outcome(&self, outcome: &AuthorizationOutcome) -> Option<&Destination> {
        match outcome {
            AuthorizationOutcome::Allow(_) => None,
            AuthorizationOutcome::RedirectToLogin => Some(&self.login),
            AuthorizationOutcome::RedirectToAccessDenied => Some(&self.access_denied),
        }
    }
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::Principal;

    #[test]
    fn test_default_scheme() {
        let targets = RedirectTargets::default();
        assert_eq!(targets.login.path(), "/Account/Login");
        assert_eq!(targets.access_denied.path(), "/Account/AccessDenied");
        assert_eq!(targets.login.area, targets.access_denied.area);
    }

    #[test]
    fn test_for_outcome() {
        let targets = RedirectTargets::default();
        assert_eq!(
            targets.for_outcome(&AuthorizationOutcome::RedirectToLogin),
            Some(&targets.login)
        );
        assert_eq!(
            targets.for_outcome(&AuthorizationOutcome::RedirectToAccessDenied),
            Some(&targets.access_denied)
        );
        let allow = AuthorizationOutcome::Allow(Principal::new("1", "Admin"));
        assert_eq!(targets.for_outcome(&allow), None);
    }
}
