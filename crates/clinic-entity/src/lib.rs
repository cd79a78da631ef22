//! # clinic-entity
//!
//! Domain types shared across the clinic crates.

pub mod user;
