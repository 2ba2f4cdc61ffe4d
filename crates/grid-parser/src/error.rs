//! Error types for grid loading.

use terrain_common::ContourError;
use thiserror::Error;

/// Result type alias using GridParseError.
pub type ParseResult<T> = Result<T, GridParseError>;

/// Errors while reading a survey file. Line numbers start at 1.
#[derive(Debug, Error)]
pub enum GridParseError {
    #[error("failed to read survey: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed entry '{entry}': {reason}")]
    MalformedEntry {
        line: usize,
        entry: String,
        reason: String,
    },

    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: {message}")]
    OrderingViolation { line: usize, message: String },

    #[error(transparent)]
    Grid(#[from] ContourError),
}
