//! Error types for anonboard.

use thiserror::Error;

/// Common error type for anonboard.
#[derive(Error, Debug)]
pub enum AnonboardError {
    /// Database error.
    ///
    /// This is a generic database error wrapping failures from the
    /// persistence layer. Database errors from sqlx are automatically
    /// converted.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for AnonboardError {
    fn from(e: sqlx::Error) -> Self {
        AnonboardError::Database(e.to_string())
    }
}

/// Result type alias for anonboard operations.
pub type Result<T> = std::result::Result<T, AnonboardError>;
