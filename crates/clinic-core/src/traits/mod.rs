//! Collaborator traits consumed by the authorization layer.

pub mod session;

pub use session::SessionStore;
