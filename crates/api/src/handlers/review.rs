//! Handlers for public client reviews.

use aimterior_db::models::review::Review;
use aimterior_db::repositories::ReviewRepo;
use axum::extract::State;

use crate::error::{AppError, AppResult};
use crate::response::CachedJson;
use crate::state::AppState;

/// GET /api/public/reviews
pub async fn list(State(state): State<AppState>) -> AppResult<CachedJson<Vec<Review>>> {
    let reviews = ReviewRepo::list(&state.pool)
        .await
        .map_err(AppError::fetch("reviews"))?;
    Ok(CachedJson::new(state.config.cache_policy(), reviews))
}
