//! # clinic-auth
//!
//! Request authorization for the clinic: who is calling, and may they
//! proceed.
//!
//! ## Modules
//!
//! - `jwt`: bearer-token claims and HS256 verification
//! - `rbac`: role groupings and the static permission matrix
//! - `principal`: credential context and the claims/session resolvers
//! - `authz`: guard variants, the authorization interceptor, redirect targets
//! - `session`: in-memory session store read by session-mode guards

pub mod authz;
pub mod jwt;
pub mod principal;
pub mod rbac;
pub mod session;

pub use authz::{
    AuthorizationInterceptor, AuthorizationOutcome, Destination, Guard, RedirectTargets,
    Requirement, validate_guards,
};
pub use jwt::{Claims, JwtDecoder};
pub use principal::{
    AuthMode, ClaimsIdentity, ClaimsResolver, CredentialContext, Principal, PrincipalResolver,
    Resolution, SessionHandle, SessionResolver, UnresolvedReason,
};
pub use rbac::{Permission, PermissionMatrix, RoleSet};
pub use session::MemorySessionStore;
