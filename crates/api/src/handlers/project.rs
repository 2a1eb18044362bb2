//! Handlers for public portfolio projects.

use aimterior_core::error::CoreError;
use aimterior_core::types::DbId;
use aimterior_db::models::project::Project;
use aimterior_db::repositories::ProjectRepo;
use axum::extract::{Path, State};

use crate::error::{AppError, AppResult};
use crate::response::CachedJson;
use crate::state::AppState;

/// GET /api/public/projects
pub async fn list(State(state): State<AppState>) -> AppResult<CachedJson<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool)
        .await
        .map_err(AppError::fetch("projects"))?;
    Ok(CachedJson::new(state.config.cache_policy(), projects))
}

/// GET /api/public/projects/{id}
///
/// An id that is not an integer cannot name a row, so it is a 404 like any
/// other unknown id.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<CachedJson<Project>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: id.clone(),
        })
    };

    let project_id: DbId = id.parse().map_err(|_| not_found())?;

    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await
        .map_err(AppError::fetch("project"))?
        .ok_or_else(not_found)?;

    Ok(CachedJson::new(state.config.cache_policy(), project))
}
