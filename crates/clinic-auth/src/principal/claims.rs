//! Claims-mode resolution from the bearer-token identity.

use async_trait::async_trait;
use tracing::debug;

use clinic_core::result::AppResult;

use super::credentials::CredentialContext;
use super::model::{AuthMode, Resolution, UnresolvedReason};
use super::resolver::PrincipalResolver;

/// Reads role and subject from the claims identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimsResolver;

impl ClaimsResolver {
    /// Creates a claims resolver.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PrincipalResolver for ClaimsResolver {
    fn mode(&self) -> AuthMode {
        AuthMode::Claims
    }

    async fn resolve(&self, credentials: &CredentialContext) -> AppResult<Resolution> {
        let Some(identity) = credentials.identity() else {
            return Ok(Resolution::Unresolved(UnresolvedReason::NoIdentity));
        };

        if !identity.authenticated {
            return Ok(Resolution::Unresolved(UnresolvedReason::NotAuthenticated));
        }

        let resolution = Resolution::from_parts(identity.subject.clone(), identity.role.clone());
        if let Resolution::Unresolved(reason) = &resolution {
            debug!(%reason, "Authenticated identity lacks required claims");
        }
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::credentials::{ClaimsIdentity, SessionHandle};
    use crate::principal::model::Principal;

    #[tokio::test]
    async fn test_resolves_complete_identity() {
        let ctx = CredentialContext::new().with_identity(ClaimsIdentity::authenticated(
            Some("42".into()),
            Some("Doctor".into()),
        ));
        let resolution = ClaimsResolver.resolve(&ctx).await.unwrap();
        assert_eq!(resolution, Resolution::Resolved(Principal::new("42", "Doctor")));
    }

    #[tokio::test]
    async fn test_missing_identity() {
        let resolution = ClaimsResolver.resolve(&CredentialContext::new()).await.unwrap();
        assert_eq!(resolution, Resolution::Unresolved(UnresolvedReason::NoIdentity));
    }

    #[tokio::test]
    async fn test_unauthenticated_identity() {
        let ctx = CredentialContext::new().with_identity(ClaimsIdentity {
            authenticated: false,
            subject: Some("42".into()),
            role: Some("Admin".into()),
        });
        let resolution = ClaimsResolver.resolve(&ctx).await.unwrap();
        assert_eq!(resolution, Resolution::Unresolved(UnresolvedReason::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_missing_claims() {
        let no_role = CredentialContext::new()
            .with_identity(ClaimsIdentity::authenticated(Some("42".into()), None));
        let no_sub = CredentialContext::new()
            .with_identity(ClaimsIdentity::authenticated(None, Some("Nurse".into())));
        assert_eq!(
            ClaimsResolver.resolve(&no_role).await.unwrap(),
            Resolution::Unresolved(UnresolvedReason::MissingRole)
        );
        assert_eq!(
            ClaimsResolver.resolve(&no_sub).await.unwrap(),
            Resolution::Unresolved(UnresolvedReason::MissingUserId)
        );
    }

    #[tokio::test]
    async fn test_ignores_session() {
        let ctx = CredentialContext::new().with_session(SessionHandle("s1".into()));
        let resolution = ClaimsResolver.resolve(&ctx).await.unwrap();
        assert_eq!(resolution, Resolution::Unresolved(UnresolvedReason::NoIdentity));
    }
}
