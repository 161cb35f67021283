use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use larder_core::error::CoreError;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the database variant.
/// Implements [`IntoResponse`] to produce a rendered error page; expected
/// outcomes (validation failure, blocked delete) never pass through here,
/// their handlers re-render the originating form instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `larder_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        (status, views::error_page(status, &message)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and user-facing message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign-key violations (Postgres 23503) map to 409; the constraint is
///   the schema-level backstop of the category delete guard.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => (
            StatusCode::CONFLICT,
            "The operation is blocked by records that reference this one".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
    }
}
