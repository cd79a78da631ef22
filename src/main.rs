//! Clinic server: authorization-gated HTTP entry point.
//!
//! Wires configuration, logging, the session store, and the router, and
//! refuses to start if any guard disagrees with the permission matrix.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use clinic_api::{AppState, build_router};
use clinic_auth::authz::{Guard, validate_guards};
use clinic_auth::rbac::PermissionMatrix;
use clinic_auth::session::MemorySessionStore;
use clinic_core::config::AppConfig;
use clinic_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CLINIC_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting clinic server v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Validate guards against the permission matrix ────
    validate_guards(PermissionMatrix::global(), &Guard::catalog())?;
    tracing::info!(
        guards = Guard::catalog().len(),
        "Authorization configuration validated"
    );

    // ── Step 2: Session store ────────────────────────────────────
    let session_store = Arc::new(MemorySessionStore::new(&config.session));
    tracing::info!(
        cookie = %config.session.cookie_name,
        idle_timeout_minutes = config.session.idle_timeout_minutes,
        "Session store initialized"
    );

    // ── Step 3: State + router ───────────────────────────────────
    let bind_address = config.server.bind_address();
    let state = AppState::new(config, session_store);
    let router = build_router(state);

    // ── Step 4: Serve ────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_address}: {e}")))?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server failed: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
