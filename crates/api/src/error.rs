use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookreviews_catalog::CatalogError;
use bookreviews_core::error::CoreError;

use crate::response::{Envelope, ErrorBody};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for validation and security failures, [`CatalogError`]
/// for upstream failures, and sqlx errors for storage failures. Implements
/// [`IntoResponse`] to produce the `{ "success": false, ... }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bookreviews_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The book catalog could not be queried.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request body that could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status, stable error code and client-facing message.
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::SecurityCheckFailed(msg) => {
                    (StatusCode::FORBIDDEN, "SECURITY_CHECK_FAILED", msg.clone())
                }
                CoreError::InvalidQuery(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_QUERY", msg.clone())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_FAILED", msg.clone())
                }
            },

            // --- Catalog errors ---
            AppError::Catalog(err) if err.is_unavailable() => {
                tracing::error!(error = %err, "Book catalog unavailable");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_UNAVAILABLE",
                    "Failed to connect to the book catalog. Please try again later.".to_string(),
                )
            }
            AppError::Catalog(err) => {
                tracing::error!(error = %err, "Book catalog returned an unexpected response");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_FORMAT_ERROR",
                    "No books found or invalid catalog response format.".to_string(),
                )
            }

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred. Please try again later.".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED", msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();
        let body = Envelope::failure(ErrorBody { message, code });
        (status, axum::Json(body)).into_response()
    }
}
