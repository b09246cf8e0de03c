//! GMI versus MODIS sea surface temperature comparison.
//!
//! Loads one GMI daily bytemap and a MODIS L3m day/night pair, normalizes
//! both to masked daily means, resamples MODIS onto the GMI grid and renders
//! the comparison figures.

pub mod config;
pub mod diagnostics;
pub mod ingest;
pub mod pipeline;

pub use config::Config;
pub use pipeline::{mask_ranges, process, render, run, save, Figures, Products};
