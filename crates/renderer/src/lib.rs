//! Figure rendering for SST comparison plots.
//!
//! Builds raster figures directly on an RGBA canvas:
//! - Jet colour ramp for map panels and colorbars
//! - Axes with 1-2-5 ticks, labels and a frameless legend
//! - Tight-cropped PNG output carrying the figure DPI

pub mod error;
pub mod figure;
pub mod gradient;
pub mod plots;
pub mod png;
pub mod text;
pub mod ticks;

pub use error::{RenderError, RenderResult};
pub use figure::{Axes, Colorbar, Figure, FigureStyle, Legend, LegendCorner, PixelRect};
pub use gradient::{jet_color, Color};
pub use plots::{
    difference_metadata, plot_difference, plot_difference_field, plot_histogram, plot_histogram_field,
    plot_profile, plot_side_by_side,
};
