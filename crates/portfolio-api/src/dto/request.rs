//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use portfolio_entity::post::CreatePost;
use portfolio_entity::project::{CreateProject, ProjectLinks};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Create/replace project request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectRequest {
    /// Project title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Long-form description.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Technologies used.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// External links.
    #[serde(default)]
    pub links: ProjectLinks,
    /// Freeform tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<ProjectRequest> for CreateProject {
    fn from(req: ProjectRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            tech_stack: req.tech_stack,
            links: req.links,
            tags: req.tags,
        }
    }
}

/// Create/replace blog post request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostRequest {
    /// Post title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Full markdown body.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// Short teaser shown in listings.
    #[validate(length(min = 1, message = "Excerpt is required"))]
    pub excerpt: String,
    /// Freeform tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<PostRequest> for CreatePost {
    fn from(req: PostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            excerpt: req.excerpt,
            tags: req.tags,
        }
    }
}
