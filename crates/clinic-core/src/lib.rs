//! # clinic-core
//!
//! Core crate for the clinic authorization gate. Contains configuration
//! schemas, the collaborator traits the gate reads through, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other clinic crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
