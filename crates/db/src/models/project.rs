//! Portfolio project model.

use aimterior_core::collections::parse_value_list;
use aimterior_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `projects` table, as stored.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub title: String,
    pub slug: Option<String>,
    pub subtitle: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub sections: Option<String>,
    pub cta_prompt: Option<String>,
    pub cta_link_text: Option<String>,
    pub cta_href: Option<String>,
    pub display_order: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Call-to-action block shown at the bottom of a project page.
///
/// Missing pieces are empty strings, never `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub prompt: String,
    pub link_text: String,
    pub href: String,
}

impl CallToAction {
    pub fn from_columns(
        prompt: Option<String>,
        link_text: Option<String>,
        href: Option<String>,
    ) -> Self {
        Self {
            prompt: prompt.unwrap_or_default(),
            link_text: link_text.unwrap_or_default(),
            href: href.unwrap_or_default(),
        }
    }
}

/// A project as served by the public API.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: Option<String>,
    pub subtitle: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub sections: Vec<serde_json::Value>,
    pub cta: CallToAction,
    pub display_order: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            sections: parse_value_list(row.sections.as_deref()),
            cta: CallToAction::from_columns(row.cta_prompt, row.cta_link_text, row.cta_href),
            id: row.id,
            title: row.title,
            slug: row.slug,
            subtitle: row.subtitle,
            category: row.category,
            location: row.location,
            description: row.description,
            cover_image: row.cover_image,
            display_order: row.display_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
