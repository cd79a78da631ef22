//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;

use clinic_api::{AppState, build_router};
use clinic_auth::jwt::Claims;
use clinic_auth::session::{MemorySessionStore, keys};
use clinic_core::config::AppConfig;
use clinic_core::traits::SessionStore;

pub const SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Session store the login flow would write to
    pub sessions: Arc<MemorySessionStore>,
    /// Application config
    pub config: AppConfig,
}

/// Response captured from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Option<Value>,
}

/// Which credential a request carries.
#[derive(Debug, Clone, Default)]
pub enum Credential {
    #[default]
    None,
    Bearer(String),
    Session(String),
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = SECRET.to_string();
    config.auth.jwt_leeway_seconds = 0;
    config
}

impl TestApp {
    /// Create a new test application backed by an in-memory session store
    pub fn new() -> Self {
        let config = test_config();
        let sessions = Arc::new(MemorySessionStore::new(&config.session));
        let router = build_router(AppState::new(config.clone(), sessions.clone()));
        Self {
            router,
            sessions,
            config,
        }
    }

    /// Create a test application over an arbitrary session store
    pub fn with_store(config: AppConfig, store: Arc<dyn SessionStore>) -> Router {
        build_router(AppState::new(config, store))
    }

    /// Mint a bearer token with optional subject and role claims
    pub fn token(&self, sub: Option<&str>, role: Option<&str>) -> String {
        mint_token(SECRET, sub, role, 600)
    }

    /// Bearer credential for a user with the given role
    pub fn bearer(&self, role: &str) -> Credential {
        Credential::Bearer(self.token(Some("u-1"), Some(role)))
    }

    /// Store a session with the given values and return its cookie credential
    pub async fn session(&self, user_id: &str, role: &str) -> Credential {
        let id = self
            .sessions
            .create([
                (keys::USER_ID.to_string(), user_id.to_string()),
                (keys::USER_ROLE.to_string(), role.to_string()),
            ])
            .await;
        Credential::Session(id)
    }

    /// Send a request through the router
    pub async fn request(&self, method: &str, path: &str, credential: &Credential) -> TestResponse {
        send(&self.router, &self.config, method, path, credential).await
    }
}

pub fn mint_token(secret: &str, sub: Option<&str>, role: Option<&str>, ttl: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.map(str::to_string),
        role: role.map(str::to_string),
        iat: Some(now),
        exp: now + ttl,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to encode token")
}

pub async fn send(
    router: &Router,
    config: &AppConfig,
    method: &str,
    path: &str,
    credential: &Credential,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(path);
    match credential {
        Credential::None => {}
        Credential::Bearer(token) => {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        Credential::Session(id) => {
            builder = builder.header(
                header::COOKIE,
                format!("{}={id}", config.session.cookie_name),
            );
        }
    }
    let request = builder.body(Body::empty()).expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed");

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).ok();

    TestResponse {
        status,
        location,
        body,
    }
}
