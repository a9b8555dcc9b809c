//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
///
/// A well-formed id with no matching note is not an error: lookups return
/// `None` and deletes return `false`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id does not have the store's id shape.
    #[error("cast to note id failed for value \"{0}\"")]
    MalformedId(String),

    /// Field validation failed against the note schema.
    #[error("{0}")]
    Validation(String),

    /// Database connection or query error.
    #[error("database error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),
}

impl StoreError {
    /// Short name of the error kind, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MalformedId(_) => "CastError",
            Self::Validation(_) => "ValidationError",
            Self::Connection(_) => "DatabaseError",
            Self::MigrationError(_) => "MigrationError",
        }
    }
}
