//! Route definitions for public site content.

use axum::routing::get;
use axum::Router;

use crate::handlers::{blog, project, review};
use crate::state::AppState;

/// Routes mounted at `/public`.
///
/// ```text
/// GET /blogs            -> blog::list
/// GET /projects         -> project::list
/// GET /projects/{id}    -> project::get_by_id
/// GET /reviews          -> review::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(blog::list))
        .route("/projects", get(project::list))
        .route("/projects/{id}", get(project::get_by_id))
        .route("/reviews", get(review::list))
}
