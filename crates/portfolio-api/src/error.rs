//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use portfolio_core::error::{AppError, ErrorKind};

/// Newtype over [`AppError`] so the HTTP mapping can live in this crate.
/// Handlers return `Result<_, ApiError>`; `?` on an `AppResult` converts
/// automatically.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Standard API error response body: `{"error": "<message>"}`.
///
/// Internal error kinds are collapsed to a fixed message so that no
/// database or configuration detail ever reaches a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, message) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, err.message.clone()),
            ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, err.message.clone()),
            ErrorKind::Forbidden => (StatusCode::FORBIDDEN, err.message.clone()),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, err.message.clone()),
            ErrorKind::Conflict => (StatusCode::CONFLICT, err.message.clone()),
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}
