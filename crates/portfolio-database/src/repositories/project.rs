//! Project repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use portfolio_core::error::{AppError, ErrorKind};
use portfolio_core::result::AppResult;
use portfolio_entity::project::{CreateProject, Project};

/// Repository for project CRUD operations.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all projects, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    /// Find a project by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find project by id", e)
            })
    }

    /// Create a new project.
    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (title, description, tech_stack, links, tags) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.tech_stack)
        .bind(Json(&data.links))
        .bind(&data.tags)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create project", e))
    }

    /// Replace all editable fields of an existing project.
    pub async fn update(&self, id: Uuid, data: &CreateProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET title = $2, description = $3, tech_stack = $4, \
                                 links = $5, tags = $6, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.tech_stack)
        .bind(Json(&data.links))
        .bind(&data.tags)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update project", e))?
        .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete project", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
