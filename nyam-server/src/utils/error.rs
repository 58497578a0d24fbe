//! Unified error handling
//!
//! [`AppError`] is the boundary error type: a closed set of kinds, each
//! mapped to exactly one HTTP status. Repositories report their own
//! closed [`RepoError`](crate::db::repository::RepoError) set, which is
//! converted here so a handler can use `?` end to end.
//!
//! | kind | status |
//! |------|--------|
//! | Validation | 400 |
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | Database | 500 (logged, generic message) |
//! | Internal | 500 (logged, generic message) |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::db::repository::RepoError;
use shared::ApiResponse;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        AppError::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".into())
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, Json(ApiResponse::message(message))).into_response()
    }
}

/// The data layer's closed error kinds, matched explicitly to pick a
/// status code.
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::ForeignKey(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_errors_map_to_expected_statuses() {
        let cases = [
            (RepoError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (RepoError::Duplicate("x".into()), StatusCode::CONFLICT),
            (RepoError::ForeignKey("x".into()), StatusCode::BAD_REQUEST),
            (
                RepoError::Database("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (repo_err, expected) in cases {
            let app_err: AppError = repo_err.into();
            assert_eq!(app_err.into_response().status(), expected);
        }
    }
}
