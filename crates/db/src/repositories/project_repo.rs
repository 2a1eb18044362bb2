//! Repository for the `projects` table.

use aimterior_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::project::{Project, ProjectRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, subtitle, category, location, description, cover_image, \
                       sections, cta_prompt, cta_link_text, cta_href, display_order, \
                       created_at, updated_at";

/// Provides read access to portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Find a project by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?");
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Project::from))
    }

    /// List all projects by display order, newest first within the same slot.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects ORDER BY display_order ASC, created_at DESC");
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }
}
