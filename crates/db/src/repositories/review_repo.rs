//! Repository for the `reviews` table.

use sqlx::SqlitePool;

use crate::models::review::Review;

const COLUMNS: &str = "id, author_name, author_title, company, content, rating, avatar, \
                       display_order, created_at, updated_at";

/// Provides read access to client reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// List all reviews by display order, newest first within the same slot.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Review>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM reviews ORDER BY display_order ASC, created_at DESC");
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }
}
