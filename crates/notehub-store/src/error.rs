//! Error types for the storage layer.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(Uuid),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
