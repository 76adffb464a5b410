//! `AuthUser` extractor — the bearer-token guard in front of admin routes.
//!
//! Pulls the token from the `Authorization` header, validates it, and
//! injects the decoded identity into the handler. The guard is a pure
//! gate: no database access, and the same valid token always yields the
//! same identity. A rejection ends the request before the handler runs.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use portfolio_auth::identity::AuthenticatedUser;
use portfolio_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedUser);

impl std::ops::Deref for AuthUser {
    type Target = AuthenticatedUser;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Missing header and a non-Bearer scheme are the same failure:
        // the client did not present a token at all.
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(missing_token)?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(missing_token)?;

        let claims = state.jwt_decoder.decode(token)?;

        Ok(AuthUser(claims.identity()))
    }
}

fn missing_token() -> ApiError {
    ApiError(AppError::unauthorized("Access token required"))
}
