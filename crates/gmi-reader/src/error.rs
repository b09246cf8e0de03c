//! Error types for GMI bytemap reading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for GMI reader operations.
pub type GmiResult<T> = Result<T, GmiError>;

/// Error types for GMI bytemap reading.
#[derive(Error, Debug)]
pub enum GmiError {
    /// File could not be opened or read
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Gzip stream is corrupt
    #[error("failed to decompress {path}: {message}")]
    Decompression { path: PathBuf, message: String },

    /// Payload did not decode into any variables (wrong size or empty file)
    #[error("no variables decoded from {path}: expected {expected} bytes, found {found}")]
    NoVariables {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// Requested variable does not exist
    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    /// Decoded map does not fit the layout's grid
    #[error("invalid grid: {0}")]
    Grid(#[from] sst_common::SstError),
}
