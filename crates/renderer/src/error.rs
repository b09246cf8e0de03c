//! Error types for figure rendering.

use std::path::PathBuf;

use sst_common::SstError;
use thiserror::Error;

/// Errors that can occur while drawing or saving a figure.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to load embedded font")]
    Font,

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid axis limits [{min}, {max}]")]
    InvalidLimits { min: f64, max: f64 },

    #[error("Invalid figure size {width}x{height} px")]
    InvalidSize { width: u32, height: u32 },

    #[error(transparent)]
    Grid(#[from] SstError),
}

pub type RenderResult<T> = Result<T, RenderError>;
