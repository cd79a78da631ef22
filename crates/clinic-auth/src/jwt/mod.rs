//! Bearer-token claims and verification.
//!
//! Tokens are minted by the login flow elsewhere; this module only verifies
//! them and turns their claims into a [`ClaimsIdentity`](crate::principal::ClaimsIdentity).

pub mod claims;
pub mod decoder;

pub use claims::Claims;
pub use decoder::{JwtDecoder, TokenRejection};
