//! HTTP handlers.
//!
//! The clinic's record-keeping handlers live elsewhere; these are the pages
//! the authorization layer itself needs plus a context echo used behind
//! every guarded route.

pub mod account;
pub mod areas;
pub mod health;
