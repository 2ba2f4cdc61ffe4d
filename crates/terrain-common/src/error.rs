//! Error types for contour generation.

use thiserror::Error;

/// Result type alias using ContourError.
pub type ContourResult<T> = Result<T, ContourError>;

/// Primary error type for contour generation.
///
/// Apart from the grid and configuration variants, every variant signals a
/// broken internal invariant: the computation is aborted, never retried.
#[derive(Debug, Error)]
pub enum ContourError {
    // === Exact arithmetic ===
    #[error("{value} is not round")]
    NotRound { value: String },

    #[error("{value} is not between {lower} and {upper}")]
    InvalidRange {
        value: String,
        lower: String,
        upper: String,
    },

    // === Contour assembly ===
    #[error("no colour was computed for height {height}")]
    MissingColor { height: String },

    #[error("nearest-neighbour search on an empty group at height {height}")]
    EmptyGroup { height: String },

    #[error("line {line} is not leveled")]
    NotLeveled { line: String },

    // === Input ===
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ContourError {
    /// Create an InvalidRange error from anything displayable.
    pub fn invalid_range(
        value: impl std::fmt::Display,
        lower: impl std::fmt::Display,
        upper: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidRange {
            value: value.to_string(),
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }

    /// Whether this error is caused by the caller's input rather than by a
    /// broken invariant inside the engine.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ContourError::InvalidGrid(_) | ContourError::InvalidConfig(_) | ContourError::Config(_)
        )
    }
}

impl From<std::io::Error> for ContourError {
    fn from(err: std::io::Error) -> Self {
        ContourError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ContourError {
    fn from(err: serde_json::Error) -> Self {
        ContourError::Config(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for ContourError {
    fn from(err: serde_yaml::Error) -> Self {
        ContourError::Config(format!("YAML error: {}", err))
    }
}
