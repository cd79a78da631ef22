//! Request authorization: guard variants and the interceptor that enforces
//! them.

pub mod destination;
pub mod guard;
pub mod interceptor;
pub mod outcome;
pub mod validation;

pub use destination::{Destination, RedirectTargets};
pub use guard::{Guard, Requirement};
pub use interceptor::AuthorizationInterceptor;
pub use outcome::AuthorizationOutcome;
pub use validation::{ConfigurationDefect, find_defects, validate_guards};
