//! Advisory request context stored by the authorization middleware.
//!
//! These values are for personalization only. Handlers must not use them as
//! their own authorization check; the route's guard already decided.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

use clinic_core::error::AppError;

use crate::error::ApiError;

/// Role of the principal a guard admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUserRole(pub String);

/// User id of the principal a session guard admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUserId(pub String);

impl<S> FromRequestParts<S> for CurrentUserRole
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUserRole>()
            .cloned()
            .ok_or_else(|| AppError::internal("CurrentUserRole read on an unguarded route").into())
    }
}

impl<S> OptionalFromRequestParts<S> for CurrentUserRole
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<CurrentUserRole>().cloned())
    }
}

impl<S> OptionalFromRequestParts<S> for CurrentUserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<CurrentUserId>().cloned())
    }
}
