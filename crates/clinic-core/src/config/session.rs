//! Session cookie and store configuration.

use serde::{Deserialize, Serialize};

/// Server-side session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Idle timeout in minutes after which a session is evicted.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u64,
    /// Maximum number of sessions held in memory.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            idle_timeout_minutes: default_idle_timeout(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_cookie_name() -> String {
    "clinic_session".to_string()
}

fn default_idle_timeout() -> u64 {
    20
}

fn default_max_sessions() -> u64 {
    10_000
}
