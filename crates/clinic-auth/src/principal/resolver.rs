//! The principal resolver strategy trait.

use async_trait::async_trait;

use clinic_core::result::AppResult;

use super::credentials::CredentialContext;
use super::model::{AuthMode, Resolution};

/// Extracts a principal from one credential source.
///
/// Implementations return `Ok(Resolution::Unresolved(..))` when the caller
/// is not logged in, and `Err` only when the source itself fails.
#[async_trait]
pub trait PrincipalResolver: Send + Sync + std::fmt::Debug + 'static {
    /// The credential source this resolver reads.
    fn mode(&self) -> AuthMode;

    /// Resolves the principal for the current request.
    async fn resolve(&self, credentials: &CredentialContext) -> AppResult<Resolution>;
}
