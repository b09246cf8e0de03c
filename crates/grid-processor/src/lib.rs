//! Grid processing for the GMI/MODIS SST comparison.
//!
//! The pipeline is a fixed forward sequence of array operations:
//!
//! ```text
//! GMI (pass, lat, lon) on [0, 360)        MODIS day + night (lat, lon)
//!      │                                        │
//!      ├─► mask to valid range                  ├─► stack along a new axis
//!      ├─► NaN-mean over passes                 ├─► mask to valid range
//!      └─► roll longitude to [-180, 180)        └─► NaN-mean over the pair
//!               │                                        │
//!               │        interpolate MODIS onto GMI ◄────┘
//!               ▼                 │
//!          difference, histogram, equatorial profile
//! ```
//!
//! # Example
//!
//! ```ignore
//! use grid_processor::{interpolate_like, normalize_gmi, normalize_modis, InterpolationMethod};
//!
//! let gmi = normalize_gmi(raw_gmi, ValidRange::GMI_SST)?;
//! let modis = normalize_modis(&day, &night, lats, lons, ValidRange::MODIS_SST)?;
//! let modis_on_gmi = interpolate_like(&modis, &gmi, InterpolationMethod::Linear)?;
//! ```

pub mod longitude;
pub mod mask;
pub mod normalize;
pub mod projection;
pub mod stats;
pub mod types;

// Re-export commonly used items at crate root
pub use longitude::{half_circle_split, roll_to_pm180};
pub use mask::{mask_out_of_range, nan_mean_layers};
pub use normalize::{collapse_layers, normalize_gmi, normalize_modis};
pub use projection::{interpolate_like, interpolate_to_grid};
pub use stats::{difference, histogram, nearest_index, profile_at_lat};
pub use types::{Histogram, InterpolationMethod, Profile};
