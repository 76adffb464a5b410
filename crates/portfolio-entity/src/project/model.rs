//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// A showcased project on the portfolio site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Project title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Technologies used, in display order.
    pub tech_stack: Vec<String>,
    /// External links (repository, live deployment).
    pub links: Json<ProjectLinks>,
    /// Freeform tags for filtering.
    pub tags: Vec<String>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

/// External links attached to a project. Stored as JSONB.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    /// Source repository URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Live deployment URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
}

/// Data required to create a project, or to fully replace one on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    /// Project title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Technologies used.
    pub tech_stack: Vec<String>,
    /// External links.
    pub links: ProjectLinks,
    /// Freeform tags.
    pub tags: Vec<String>,
}
