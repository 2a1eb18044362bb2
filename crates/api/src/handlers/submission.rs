//! Handlers for the public contact and quote-request forms.
//!
//! Validation runs before the dispatcher is touched, so a rejected
//! submission never reaches the email provider.

use aimterior_core::submission::{RequestKind, SubmissionPayload};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::SubmissionAck;
use crate::state::AppState;

/// POST /api/contact
pub async fn contact(
    State(state): State<AppState>,
    body: Result<Json<SubmissionPayload>, JsonRejection>,
) -> AppResult<Json<SubmissionAck>> {
    submit(&state, body, RequestKind::Contact).await
}

/// POST /api/quote
pub async fn quote(
    State(state): State<AppState>,
    body: Result<Json<SubmissionPayload>, JsonRejection>,
) -> AppResult<Json<SubmissionAck>> {
    submit(&state, body, RequestKind::Quote).await
}

async fn submit(
    state: &AppState,
    body: Result<Json<SubmissionPayload>, JsonRejection>,
    kind: RequestKind,
) -> AppResult<Json<SubmissionAck>> {
    let Json(payload) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if let Err(e) = payload.validate(kind) {
        tracing::debug!(%kind, error = %e, "Rejected form submission");
        return Err(e.into());
    }

    state.dispatcher.dispatch(&payload, kind).await?;

    Ok(Json(SubmissionAck::new(kind)))
}
