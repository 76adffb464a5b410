//! User repository implementation.

use sqlx::PgPool;

use portfolio_core::error::{AppError, ErrorKind};
use portfolio_core::result::AppResult;
use portfolio_entity::user::User;

/// Repository for account lookup and bootstrap.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by username (case-insensitive).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(username) = LOWER($1)")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    /// Insert a user, or update their password hash if the username exists.
    ///
    /// Used by the seed tool so that re-running it rotates the admin
    /// password instead of failing on the unique constraint.
    pub async fn upsert(&self, username: &str, password_hash: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash) \
             VALUES ($1, $2) \
             ON CONFLICT (username) DO UPDATE \
             SET password_hash = EXCLUDED.password_hash, updated_at = NOW() \
             RETURNING *",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert user", e))
    }
}
