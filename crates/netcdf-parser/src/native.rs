//! Native NetCDF access using the netcdf library.
//!
//! Thin helpers over the `netcdf` crate: opening files, reading attributes
//! without triggering HDF5 diagnostics, and unpacking scaled integer
//! variables into physical `f32` values.

use std::path::Path;
use std::sync::Once;

use crate::error::{NetCdfError, NetCdfResult};

/// Silence HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints verbose error messages to stderr even when errors
/// are handled gracefully by the Rust code (e.g., when checking for optional
/// attributes that don't exist). This disables that output by calling
/// H5Eset_auto2 with null handlers. Safe to call multiple times.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: H5Eset_auto2 is thread-safe and we're passing null pointers
        // to disable error output, which is a documented valid use.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}

/// Open a NetCDF file for reading.
pub fn open_dataset(path: &Path) -> NetCdfResult<netcdf::File> {
    silence_hdf5_errors();

    if !path.exists() {
        return Err(NetCdfError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found", path.display()),
        )));
    }

    netcdf::open(path).map_err(|e| {
        NetCdfError::InvalidFormat(format!("Failed to open {}: {}", path.display(), e))
    })
}

/// Packing attributes of a scaled variable (CF conventions).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Packing {
    pub scale_factor: f32,
    pub add_offset: f32,
    pub fill_value: Option<f32>,
}

impl Default for Packing {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            add_offset: 0.0,
            fill_value: None,
        }
    }
}

impl Packing {
    /// Read packing attributes from a variable; absent attributes fall back
    /// to identity scaling and no fill value.
    pub fn of(var: &netcdf::Variable) -> Self {
        Self {
            scale_factor: get_f32_attr(var, "scale_factor").unwrap_or(1.0),
            add_offset: get_f32_attr(var, "add_offset").unwrap_or(0.0),
            fill_value: get_f32_attr(var, "_FillValue")
                .or_else(|| get_i16_attr(var, "_FillValue").map(f32::from)),
        }
    }

    /// Unpack one raw value; the fill value and non-finite values become NaN.
    #[inline]
    pub fn unpack(&self, raw: f32) -> f32 {
        if !raw.is_finite() || self.fill_value == Some(raw) {
            f32::NAN
        } else {
            raw * self.scale_factor + self.add_offset
        }
    }

    /// Scale a raw attribute value (e.g. `valid_min`) without fill handling.
    pub fn scale(&self, raw: f32) -> f32 {
        raw * self.scale_factor + self.add_offset
    }
}

/// Read an entire variable as `f32`, letting libnetcdf convert integer types.
pub fn read_f32_values(var: &netcdf::Variable) -> NetCdfResult<Vec<f32>> {
    var.get_values::<f32, _>(..)
        .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to read {}: {}", var.name(), e)))
}

/// Read an entire variable as `f64`.
pub fn read_f64_values(var: &netcdf::Variable) -> NetCdfResult<Vec<f64>> {
    var.get_values::<f64, _>(..)
        .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to read {}: {}", var.name(), e)))
}

/// Check if a variable has an attribute with the given name.
/// This avoids HDF5 error spam when checking for optional attributes.
pub fn has_attr(var: &netcdf::Variable, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}

/// Helper to get f32 attribute.
pub fn get_f32_attr(var: &netcdf::Variable, name: &str) -> Option<f32> {
    if !has_attr(var, name) {
        return None;
    }
    let attr_value = var.attribute_value(name)?.ok()?;
    f32::try_from(attr_value).ok()
}

/// Helper to get f64 attribute.
pub fn get_f64_attr(var: &netcdf::Variable, name: &str) -> Option<f64> {
    if !has_attr(var, name) {
        return None;
    }
    let attr_value = var.attribute_value(name)?.ok()?;
    f64::try_from(attr_value).ok()
}

/// Helper to get i16 attribute.
pub fn get_i16_attr(var: &netcdf::Variable, name: &str) -> Option<i16> {
    if !has_attr(var, name) {
        return None;
    }
    let attr_value = var.attribute_value(name)?.ok()?;
    i16::try_from(attr_value).ok()
}

/// Numeric attribute as `f32`, accepting float or short storage.
pub fn get_numeric_attr(var: &netcdf::Variable, name: &str) -> Option<f32> {
    get_f32_attr(var, name)
        .or_else(|| get_f64_attr(var, name).map(|v| v as f32))
        .or_else(|| get_i16_attr(var, name).map(f32::from))
}

/// Helper to get a text attribute.
pub fn get_string_attr(var: &netcdf::Variable, name: &str) -> Option<String> {
    if !has_attr(var, name) {
        return None;
    }
    match var.attribute_value(name)?.ok()? {
        netcdf::AttributeValue::Str(s) => Some(s),
        _ => None,
    }
}
