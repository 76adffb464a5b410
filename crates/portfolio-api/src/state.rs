//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use portfolio_auth::jwt::JwtDecoder;
use portfolio_auth::verifier::CredentialVerifier;
use portfolio_core::config::AppConfig;
use portfolio_database::repositories::{PostRepository, ProjectRepository};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// cheap to clone; the heavier ones are `Arc`-wrapped.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Session token decoder and validator (the token guard's engine).
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Login flow: credentials in, signed token out.
    pub credential_verifier: Arc<CredentialVerifier>,
    /// Project repository.
    pub project_repo: Arc<ProjectRepository>,
    /// Blog post repository.
    pub post_repo: Arc<PostRepository>,
}
