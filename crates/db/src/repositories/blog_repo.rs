//! Repository for the `blogs` table.

use sqlx::SqlitePool;

use crate::models::blog::{Blog, BlogRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, excerpt, content, cover_image, author, category, \
                       tags, related_posts, created_at, updated_at";

/// Provides read access to blog posts.
pub struct BlogRepo;

impl BlogRepo {
    /// List all blog posts, most recently created first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Blog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query_as::<_, BlogRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Blog::from).collect())
    }
}
