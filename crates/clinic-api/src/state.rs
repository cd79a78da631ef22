//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use clinic_auth::jwt::JwtDecoder;
use clinic_core::config::AppConfig;
use clinic_core::traits::SessionStore;

use crate::middleware::authorize::Gatekeeper;

/// Application state containing all shared dependencies.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Bearer-token verifier used by the claims middleware
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Session store read by session-mode guards
    pub session_store: Arc<dyn SessionStore>,
    /// Builds claims-mode and session-mode guards
    pub gatekeeper: Arc<Gatekeeper>,
}

impl AppState {
    /// Wires the state from configuration and a session store.
    pub fn new(config: AppConfig, session_store: Arc<dyn SessionStore>) -> Self {
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let gatekeeper = Arc::new(Gatekeeper::new(&config.auth, session_store.clone()));

        Self {
            config: Arc::new(config),
            jwt_decoder,
            session_store,
            gatekeeper,
        }
    }
}
