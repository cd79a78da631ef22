//! Session-mode resolution from server-side session values.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use clinic_core::result::AppResult;
use clinic_core::traits::SessionStore;

use crate::session::keys;

use super::credentials::CredentialContext;
use super::model::{AuthMode, Resolution, UnresolvedReason};
use super::resolver::PrincipalResolver;

/// Reads `UserRole` and `UserId` from the request's session.
#[derive(Debug, Clone)]
pub struct SessionResolver {
    /// Session store, read only.
    store: Arc<dyn SessionStore>,
}

impl SessionResolver {
    /// Creates a session resolver over the given store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PrincipalResolver for SessionResolver {
    fn mode(&self) -> AuthMode {
        AuthMode::Session
    }

    async fn resolve(&self, credentials: &CredentialContext) -> AppResult<Resolution> {
        let Some(handle) = credentials.session() else {
            return Ok(Resolution::Unresolved(UnresolvedReason::NoSession));
        };

        // Role and user id must come from the same session snapshot.
        let mut values = self
            .store
            .get_strings(handle.id(), &[keys::USER_ROLE, keys::USER_ID])
            .await?
            .into_iter();
        let role = values.next().flatten();
        let user_id = values.next().flatten();

        let resolution = Resolution::from_parts(user_id, role);
        if let Resolution::Unresolved(reason) = &resolution {
            debug!(session_id = %handle.id(), %reason, "Session has no usable principal");
        }
        Ok(resolution)
    }
}
