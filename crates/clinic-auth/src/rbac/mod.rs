//! Role-based access control: role groupings and the permission matrix.

pub mod hierarchy;
pub mod policies;

pub use hierarchy::RoleSet;
pub use policies::{Permission, PermissionMatrix};
