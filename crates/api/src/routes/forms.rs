//! Route definitions for the lead-capture forms.

use axum::routing::post;
use axum::Router;

use crate::handlers::submission;
use crate::state::AppState;

/// ```text
/// POST /contact    -> submission::contact
/// POST /quote      -> submission::quote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(submission::contact))
        .route("/quote", post(submission::quote))
}
