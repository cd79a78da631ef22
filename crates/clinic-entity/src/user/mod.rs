//! User-related entity types.

pub mod role;

pub use role::UserRole;
