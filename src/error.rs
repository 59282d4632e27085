//! Error types for Lectern

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Duplicate ISBN: {0}")]
    DuplicateIsbn(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("Bad value: {0}")]
    BadValue(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
