pub mod forms;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /public/blogs                 list blogs (GET)
/// /public/projects              list projects (GET)
/// /public/projects/{id}         get project (GET)
/// /public/reviews               list reviews (GET)
///
/// /contact                      submit contact form (POST)
/// /quote                        submit quote request (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Read-only site content.
        .nest("/public", public::router())
        // Lead-capture forms.
        .merge(forms::router())
}
