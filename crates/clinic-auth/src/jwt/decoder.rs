//! JWT token validation.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use clinic_core::config::AuthConfig;

use super::claims::Claims;

/// Why a presented token was not accepted.
///
/// A rejection is not an application error: the request simply carries an
/// unauthenticated identity and guards redirect it to login.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenRejection {
    /// `exp` is in the past.
    #[error("token has expired")]
    Expired,
    /// Signature does not match the configured secret.
    #[error("invalid token signature")]
    InvalidSignature,
    /// Not a well-formed JWT.
    #[error("invalid token format")]
    Malformed,
    /// Any other validation failure.
    #[error("token validation failed: {0}")]
    Invalid(String),
}

/// Validates HS256 bearer tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.jwt_leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenRejection> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenRejection::Expired,
                JwtErrorKind::InvalidSignature => TokenRejection::InvalidSignature,
                JwtErrorKind::InvalidToken | JwtErrorKind::Base64(_) | JwtErrorKind::Json(_) => {
                    TokenRejection::Malformed
                }
                _ => TokenRejection::Invalid(e.to_string()),
            })
    }
}
