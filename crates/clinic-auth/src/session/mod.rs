//! Server-side session storage read by session-mode guards.

pub mod keys;
pub mod memory;

pub use memory::MemorySessionStore;
