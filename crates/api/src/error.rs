use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use interaction_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
///
/// Missing resources are answered with `204 No Content` rather than `404`, so
/// a caller cannot tell an unknown customer from an empty result.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `interaction_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request (missing header, unparseable identifier, failed update).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A request body that could not be deserialized.
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, %id, "Resource not found, responding with no content");
                    return StatusCode::NO_CONTENT.into_response();
                }
                CoreError::Validation(failures) => {
                    let body = json!({
                        "error": "Validation failed",
                        "code": "VALIDATION_ERROR",
                        "failures": failures,
                    });
                    return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg),
            },

            // --- Database errors ---
            AppError::Database(err) => {
                if matches!(err, sqlx::Error::RowNotFound) {
                    return StatusCode::NO_CONTENT.into_response();
                }
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE_ENTITY", msg)
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
