//! Blog post model.

use aimterior_core::collections::parse_string_list;
use aimterior_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `blogs` table, as stored.
#[derive(Debug, Clone, FromRow)]
pub struct BlogRow {
    pub id: DbId,
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub related_posts: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A blog post as served by the public API, with collections decoded.
#[derive(Debug, Clone, Serialize)]
pub struct Blog {
    pub id: DbId,
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub related_posts: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Self {
            tags: parse_string_list(row.tags.as_deref()),
            related_posts: parse_string_list(row.related_posts.as_deref()),
            id: row.id,
            title: row.title,
            slug: row.slug,
            excerpt: row.excerpt,
            content: row.content,
            cover_image: row.cover_image,
            author: row.author,
            category: row.category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
