//! Blog post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A published blog post. `content` is markdown rendered by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    /// Unique post identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Full markdown body.
    pub content: String,
    /// Short teaser shown in listings.
    pub excerpt: String,
    /// Freeform tags for filtering.
    pub tags: Vec<String>,
    /// Publication timestamp (listings sort on this).
    pub published_at: DateTime<Utc>,
    /// When the post row was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Listing projection of a post: everything except the markdown body.
/// The blog index serves teasers; full bodies come from the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostSummary {
    /// Unique post identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Short teaser shown in listings.
    pub excerpt: String,
    /// Freeform tags.
    pub tags: Vec<String>,
    /// Publication timestamp.
    pub published_at: DateTime<Utc>,
}

/// Data required to create a post, or to fully replace one on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// Post title.
    pub title: String,
    /// Full markdown body.
    pub content: String,
    /// Short teaser shown in listings.
    pub excerpt: String,
    /// Freeform tags.
    pub tags: Vec<String>,
}
