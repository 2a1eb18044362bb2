//! Handlers for public blog content.

use aimterior_db::models::blog::Blog;
use aimterior_db::repositories::BlogRepo;
use axum::extract::State;

use crate::error::{AppError, AppResult};
use crate::response::CachedJson;
use crate::state::AppState;

/// GET /api/public/blogs
pub async fn list(State(state): State<AppState>) -> AppResult<CachedJson<Vec<Blog>>> {
    let blogs = BlogRepo::list(&state.pool)
        .await
        .map_err(AppError::fetch("blogs"))?;
    Ok(CachedJson::new(state.config.cache_policy(), blogs))
}
