//! Blog Error Types
//!
//! Post-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Blog-specific error variants
///
/// These map to the HTTP statuses of the post endpoints and convert to
/// `AppError` for rendering. Database failures keep the driver error as
/// source for logging; the wire message stays generic.
#[derive(Debug, Error)]
pub enum PostError {
    /// No post exists for the given identifier
    #[error("Post not found")]
    NotFound,

    /// Request body could not be parsed as JSON
    #[error("Cannot parse JSON")]
    MalformedBody(String),

    /// Any database-driver or connectivity failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl PostError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostError::NotFound => StatusCode::NOT_FOUND,
            PostError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            PostError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::NotFound => ErrorKind::NotFound,
            PostError::MalformedBody(_) => ErrorKind::BadRequest,
            PostError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "blog database error");
            }
            PostError::MalformedBody(detail) => {
                tracing::warn!(detail = %detail, "unparseable request body");
            }
            PostError::NotFound => {
                tracing::debug!("post not found");
            }
        }
    }
}

impl From<PostError> for AppError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::NotFound => AppError::not_found("Post not found"),
            PostError::MalformedBody(_) => AppError::bad_request("Cannot parse JSON"),
            // Driver detail stays server-side; clients get a generic message
            PostError::Database(e) => AppError::internal("database error").with_source(e),
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
