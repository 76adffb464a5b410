//! Blog post repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use portfolio_core::error::{AppError, ErrorKind};
use portfolio_core::result::AppResult;
use portfolio_entity::post::{BlogPost, CreatePost, PostSummary};

/// Repository for blog post CRUD operations.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all posts as summaries (no bodies), newest first.
    pub async fn find_all_summaries(&self) -> AppResult<Vec<PostSummary>> {
        sqlx::query_as::<_, PostSummary>(
            "SELECT id, title, excerpt, tags, published_at FROM blog_posts \
             ORDER BY published_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))
    }

    /// Find a post by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<BlogPost>> {
        sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post by id", e))
    }

    /// Create a new post, published immediately.
    pub async fn create(&self, data: &CreatePost) -> AppResult<BlogPost> {
        sqlx::query_as::<_, BlogPost>(
            "INSERT INTO blog_posts (title, content, excerpt, tags) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.excerpt)
        .bind(&data.tags)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))
    }

    /// Replace all editable fields of an existing post.
    ///
    /// `published_at` is left untouched so that edits do not reorder the
    /// blog listing.
    pub async fn update(&self, id: Uuid, data: &CreatePost) -> AppResult<BlogPost> {
        sqlx::query_as::<_, BlogPost>(
            "UPDATE blog_posts SET title = $2, content = $3, excerpt = $4, \
                                   tags = $5, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.excerpt)
        .bind(&data.tags)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update post", e))?
        .ok_or_else(|| AppError::not_found(format!("Post {id} not found")))
    }

    /// Delete a post by ID. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;

        Ok(result.rows_affected() > 0)
    }
}
