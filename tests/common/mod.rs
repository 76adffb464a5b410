//! Shared test helpers for integration tests.
//!
//! These tests drive the real router against a live PostgreSQL database.
//! When `DATABASE_URL` is not set they skip themselves instead of failing,
//! so the unit test suite stays runnable without infrastructure.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use portfolio_api::state::AppState;
use portfolio_auth::jwt::{JwtDecoder, JwtEncoder};
use portfolio_auth::password::PasswordHasher;
use portfolio_auth::verifier::CredentialVerifier;
use portfolio_core::config::app::{CorsConfig, ServerConfig};
use portfolio_core::config::auth::AuthConfig;
use portfolio_core::config::logging::LoggingConfig;
use portfolio_core::config::{AppConfig, DatabaseConfig};
use portfolio_database::repositories::{PostRepository, ProjectRepository, UserRepository};

/// Signing secret shared by the test app and token-forging helpers.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestApp {
    /// Create a new test application, or `None` when no database is
    /// configured. Tests use distinct usernames and titles so they can
    /// share one database without stepping on each other.
    pub async fn try_new() -> Option<Self> {
        let url = std::env::var("DATABASE_URL").ok()?;

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig::default(),
            },
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            auth: AuthConfig {
                jwt_secret: TEST_JWT_SECRET.to_string(),
                token_ttl_hours: 24,
                admin_username: "admin".to_string(),
            },
            logging: LoggingConfig::default(),
        };

        let db_pool = portfolio_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        portfolio_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let project_repo = Arc::new(ProjectRepository::new(db_pool.clone()));
        let post_repo = Arc::new(PostRepository::new(db_pool.clone()));

        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let credential_verifier = Arc::new(CredentialVerifier::new(
            Arc::clone(&user_repo),
            PasswordHasher::new(),
            JwtEncoder::new(&config.auth),
        ));

        let app_state = AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            jwt_decoder,
            credential_verifier,
            project_repo,
            post_repo,
        };

        let router = portfolio_api::router::build_router(app_state);

        Some(Self {
            router,
            db_pool,
            config,
        })
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, username: &str, password: &str) -> Uuid {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash(password).expect("Failed to hash password");

        let users = UserRepository::new(self.db_pool.clone());
        let user = users
            .upsert(username, &hash)
            .await
            .expect("Failed to create test user");

        user.id
    }

    /// Login and return the session token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self.request("POST", "/auth/login", Some(body), None).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}
