//! Coordinate alignment between grids.
//!
//! This module resamples a field onto another field's latitude/longitude
//! coordinates.

pub mod interpolation;

pub use interpolation::{interpolate_like, interpolate_to_grid, locate, Bracket};
