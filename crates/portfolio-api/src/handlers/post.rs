//! Blog post CRUD handlers.
//!
//! The public list endpoint serves summaries only; the detail endpoint
//! returns the full markdown body.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use portfolio_core::error::AppError;
use portfolio_entity::post::{BlogPost, CreatePost, PostSummary};

use crate::dto::request::PostRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/blog
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostSummary>>, ApiError> {
    let posts = state.post_repo.find_all_summaries().await?;
    Ok(Json(posts))
}

/// GET /api/blog/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPost>, ApiError> {
    let post = state
        .post_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Post {id} not found")))?;

    Ok(Json(post))
}

/// POST /admin/blog
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PostRequest>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let data: CreatePost = req.into();
    let post = state.post_repo.create(&data).await?;

    tracing::info!(user = %auth.username, post_id = %post.id, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /admin/blog/{id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<PostRequest>,
) -> Result<Json<BlogPost>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let data: CreatePost = req.into();
    let post = state.post_repo.update(id, &data).await?;

    tracing::info!(user = %auth.username, post_id = %id, "Post updated");

    Ok(Json(post))
}

/// DELETE /admin/blog/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.post_repo.delete(id).await? {
        return Err(AppError::not_found(format!("Post {id} not found")).into());
    }

    tracing::info!(user = %auth.username, post_id = %id, "Post deleted");

    Ok(Json(MessageResponse {
        message: "Post deleted".to_string(),
    }))
}
