//! Auth handlers — login.

use axum::Json;
use axum::extract::State;

use crate::dto::request::LoginRequest;
use crate::dto::response::LoginResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let outcome = state
        .credential_verifier
        .authenticate(&req.username, &req.password)
        .await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        username: outcome.username,
    }))
}
