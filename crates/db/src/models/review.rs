//! Client review model. Reviews have no serialized columns and are served as
//! stored.

use aimterior_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub author_name: String,
    pub author_title: Option<String>,
    pub company: Option<String>,
    pub content: String,
    pub rating: Option<i64>,
    pub avatar: Option<String>,
    pub display_order: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
