//! Repository Module
//!
//! Insert and lookup operations per table, as free functions over
//! `&SqlitePool`. Every function returns [`RepoResult`]; constraint
//! violations are classified into the closed [`RepoError`] kinds here so
//! the API boundary can match them to HTTP statuses.

pub mod category;
pub mod client;
pub mod order;
pub mod product;
pub mod reservation;

use thiserror::Error;

/// Repository error kinds
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Invalid reference: {0}")]
    ForeignKey(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                RepoError::ForeignKey(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
