//! NetCDF reading for MODIS Level-3 mapped SST products.
//!
//! Uses the native `netcdf` crate (libnetcdf/HDF5) to read L3m daily files:
//! the packed `sst` variable is unpacked with its CF `scale_factor`,
//! `add_offset` and `_FillValue` attributes, fill cells become NaN.

pub mod error;
pub mod l3m;
pub mod native;
pub mod summary;

pub use error::{NetCdfError, NetCdfResult};
pub use l3m::{load_day_night, load_l3m_sst, L3mGrid};
pub use native::silence_hdf5_errors;
pub use summary::{summarize, NetCdfSummary, VariableSummary};
