//! Project CRUD handlers.
//!
//! Reads are public; writes sit behind the bearer-token guard.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use portfolio_core::error::AppError;
use portfolio_entity::project::{CreateProject, Project};

use crate::dto::request::ProjectRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.project_repo.find_all().await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, ApiError> {
    let project = state
        .project_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))?;

    Ok(Json(project))
}

/// POST /admin/projects
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let data: CreateProject = req.into();
    let project = state.project_repo.create(&data).await?;

    tracing::info!(user = %auth.username, project_id = %project.id, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /admin/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let data: CreateProject = req.into();
    let project = state.project_repo.update(id, &data).await?;

    tracing::info!(user = %auth.username, project_id = %id, "Project updated");

    Ok(Json(project))
}

/// DELETE /admin/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.project_repo.delete(id).await? {
        return Err(AppError::not_found(format!("Project {id} not found")).into());
    }

    tracing::info!(user = %auth.username, project_id = %id, "Project deleted");

    Ok(Json(MessageResponse {
        message: "Project deleted".to_string(),
    }))
}
