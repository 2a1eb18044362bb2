use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use aimterior_core::error::CoreError;
use aimterior_notify::MailError;

/// Message shown to the browser when a notification email cannot be sent.
pub const EMAIL_FAILURE_MESSAGE: &str = "Failed to send email. Please try again later.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds upstream failure variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `aimterior_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A content query failed. `resource` names what was being read
    /// (`"blogs"`, `"project"`, ...).
    #[error("Failed to fetch {resource}: {source}")]
    Fetch {
        resource: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The notification email could not be delivered.
    #[error(transparent)]
    Mail(#[from] MailError),

    /// A malformed request body.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Adapter for `map_err` on repository calls.
    pub fn fetch(resource: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Fetch { resource, source }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id = %id, "Resource not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({ "error": format!("{entity} not found"), "code": "NOT_FOUND" }),
                )
            }
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "VALIDATION_ERROR" }),
            ),
            AppError::Fetch { resource, source } => {
                tracing::error!(resource, error = %source, "Content query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": format!("Failed to fetch {resource}"), "code": "INTERNAL_ERROR" }),
                )
            }
            AppError::Mail(err) => {
                tracing::error!(error = ?err, "Notification delivery failed");
                let detail = err.to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": EMAIL_FAILURE_MESSAGE,
                        "code": "EMAIL_DELIVERY_FAILED",
                        "details": first_line(&detail),
                    }),
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Trim an error message to its first line.
fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default().trim_end()
}
