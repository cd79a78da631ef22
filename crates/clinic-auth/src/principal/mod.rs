//! Principal resolution from the request's credential context.
//!
//! Each protected boundary is bound to exactly one [`PrincipalResolver`].
//! The two strategies never consult each other's source.

pub mod claims;
pub mod credentials;
pub mod model;
pub mod resolver;
pub mod session;

pub use claims::ClaimsResolver;
pub use credentials::{ClaimsIdentity, CredentialContext, SessionHandle};
pub use model::{AuthMode, Principal, Resolution, UnresolvedReason};
pub use resolver::PrincipalResolver;
pub use session::SessionResolver;
