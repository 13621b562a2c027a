//! Unified Error Handling
//!
//! Application-level error type surfaced at the facade boundary. All I/O
//! errors are caught here, logged, and reported to the caller; nothing is
//! re-thrown uncaught into the view layer and no automatic retry happens.

use crate::db::repository::RepoError;

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Business Logic Errors ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ========== System Errors ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for facade operations
pub type AppResult<T> = Result<T, AppError>;
