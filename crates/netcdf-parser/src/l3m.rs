//! MODIS Level-3 mapped (L3m) SST products.
//!
//! An L3m daily file holds one packed 2-D variable (`sst`, stored as short
//! with `scale_factor`/`add_offset`/`_FillValue`) on a regular grid described
//! by the 1-D `lat` (north to south) and `lon` (west to east) variables.

use std::path::{Path, PathBuf};

use sst_common::{FieldMetadata, GriddedField, ValidRange};
use tracing::debug;

use crate::error::{NetCdfError, NetCdfResult};
use crate::native::{
    get_numeric_attr, get_string_attr, open_dataset, read_f32_values, read_f64_values, Packing,
};

/// A decoded L3m variable with its coordinates and attributes.
#[derive(Debug, Clone)]
pub struct L3mGrid {
    pub path: PathBuf,
    pub variable: String,
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
    /// Physical values, row-major `(lat, lon)`, NaN where the file had fill.
    pub data: Vec<f32>,
    pub units: String,
    pub long_name: String,
    /// Declared valid range in physical units, when the file carries one.
    pub declared_range: Option<ValidRange>,
}

impl L3mGrid {
    /// Convert into a labeled field.
    pub fn to_field(&self) -> NetCdfResult<GriddedField> {
        let metadata = FieldMetadata::new(self.units.clone(), self.long_name.clone());
        Ok(GriddedField::new(
            self.data.clone(),
            self.lats.clone(),
            self.lons.clone(),
            metadata,
        )?)
    }
}

/// Load one L3m variable (normally `sst`) with its `lat`/`lon` axes.
pub fn load_l3m_sst<P: AsRef<Path>>(path: P, variable: &str) -> NetCdfResult<L3mGrid> {
    let path = path.as_ref();
    let file = open_dataset(path)?;

    let lat_var = file
        .variable("lat")
        .ok_or_else(|| NetCdfError::MissingData("lat variable".to_string()))?;
    let lon_var = file
        .variable("lon")
        .ok_or_else(|| NetCdfError::MissingData("lon variable".to_string()))?;
    let lats = read_f64_values(&lat_var)?;
    let lons = read_f64_values(&lon_var)?;

    let var = file
        .variable(variable)
        .ok_or_else(|| NetCdfError::MissingData(format!("{} variable", variable)))?;

    let dims: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    let expected = lats.len() * lons.len();
    if dims.len() != 2 || dims[0] * dims[1] != expected {
        return Err(NetCdfError::ShapeMismatch {
            variable: variable.to_string(),
            expected,
            actual: dims.iter().product(),
        });
    }

    let packing = Packing::of(&var);
    let raw = read_f32_values(&var)?;
    let data: Vec<f32> = raw.into_iter().map(|v| packing.unpack(v)).collect();

    let declared_range = match (
        get_numeric_attr(&var, "valid_min"),
        get_numeric_attr(&var, "valid_max"),
    ) {
        (Some(lo), Some(hi)) => Some(ValidRange::new(packing.scale(lo), packing.scale(hi))),
        _ => None,
    };

    debug!(
        path = %path.display(),
        variable,
        rows = lats.len(),
        cols = lons.len(),
        scale = packing.scale_factor,
        offset = packing.add_offset,
        "Loaded L3m variable"
    );

    Ok(L3mGrid {
        path: path.to_path_buf(),
        variable: variable.to_string(),
        lats,
        lons,
        data,
        units: get_string_attr(&var, "units").unwrap_or_default(),
        long_name: get_string_attr(&var, "long_name").unwrap_or_else(|| variable.to_string()),
        declared_range,
    })
}

/// Load a day file and a night-only file, checking they share one grid.
pub fn load_day_night<P: AsRef<Path>, Q: AsRef<Path>>(
    day_path: P,
    night_path: Q,
    variable: &str,
) -> NetCdfResult<(L3mGrid, L3mGrid)> {
    let day = load_l3m_sst(day_path, variable)?;
    let night = load_l3m_sst(night_path, variable)?;

    if day.lats.len() != night.lats.len() || day.lons.len() != night.lons.len() {
        return Err(NetCdfError::ShapeMismatch {
            variable: format!("{} (night vs day)", variable),
            expected: day.data.len(),
            actual: night.data.len(),
        });
    }
    if day.lats != night.lats || day.lons != night.lons {
        return Err(NetCdfError::InvalidFormat(format!(
            "{} and {} use different lat/lon coordinates",
            day.path.display(),
            night.path.display()
        )));
    }

    Ok((day, night))
}
