//! Error types for SST grid operations.

use thiserror::Error;

/// Result type alias using SstError.
pub type SstResult<T> = Result<T, SstError>;

/// Primary error type for grid construction and processing.
#[derive(Debug, Error)]
pub enum SstError {
    // === Shape Errors ===
    #[error("Shape mismatch for {what}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("Coordinate axis '{0}' is not strictly monotonic")]
    NonMonotonicAxis(String),

    #[error("Coordinate axis '{0}' is empty")]
    EmptyAxis(String),

    // === Configuration Errors ===
    #[error("Grid precondition failed: {0}")]
    GridPrecondition(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SstError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Create a GridPrecondition error.
    pub fn grid_precondition(msg: impl Into<String>) -> Self {
        Self::GridPrecondition(msg.into())
    }

    /// True for errors caused by configuration or grid-resolution assumptions
    /// rather than by malformed data.
    pub fn is_config_error(&self) -> bool {
        matches!(self, SstError::GridPrecondition(_) | SstError::Config(_))
    }
}
