//! Labeled 2-D grids indexed by latitude and longitude.

use serde::{Deserialize, Serialize};

use crate::error::{SstError, SstResult};

/// Fill value written into field metadata for missing cells.
pub const DEFAULT_FILL_VALUE: f32 = -9999.0;

/// Descriptive attributes attached to a gridded field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub units: String,
    pub long_name: String,
    pub fill_value: f32,
}

impl FieldMetadata {
    pub fn new(units: impl Into<String>, long_name: impl Into<String>) -> Self {
        Self {
            units: units.into(),
            long_name: long_name.into(),
            fill_value: DEFAULT_FILL_VALUE,
        }
    }

    /// Metadata used for both normalized SST products.
    pub fn sea_surface_temperature() -> Self {
        Self::new("°C", "Sea Surface Temperature")
    }

    /// Label in the form `long_name [units]`, used for colorbars and axes.
    pub fn label(&self) -> String {
        if self.units.is_empty() {
            self.long_name.clone()
        } else {
            format!("{} [{}]", self.long_name, self.units)
        }
    }
}

impl Default for FieldMetadata {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// Direction of a strictly monotonic coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrder {
    Ascending,
    Descending,
}

impl AxisOrder {
    /// Classify `coords`, returning `None` unless strictly monotonic.
    ///
    /// A single-point axis counts as ascending.
    pub fn of(coords: &[f64]) -> Option<Self> {
        if coords.is_empty() || coords.iter().any(|c| !c.is_finite()) {
            return None;
        }
        if coords.windows(2).all(|w| w[0] < w[1]) {
            Some(AxisOrder::Ascending)
        } else if coords.windows(2).all(|w| w[0] > w[1]) {
            Some(AxisOrder::Descending)
        } else {
            None
        }
    }
}

/// A 2-D field of `f32` values on a regular lat/lon grid.
///
/// Values are stored row-major: row `i` corresponds to `lats[i]`, column `j`
/// to `lons[j]`. Missing cells are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct GriddedField {
    data: Vec<f32>,
    lats: Vec<f64>,
    lons: Vec<f64>,
    pub metadata: FieldMetadata,
}

impl GriddedField {
    /// Build a field, checking that the data matches the coordinate shape and
    /// that both axes are strictly monotonic.
    pub fn new(
        data: Vec<f32>,
        lats: Vec<f64>,
        lons: Vec<f64>,
        metadata: FieldMetadata,
    ) -> SstResult<Self> {
        if lats.is_empty() {
            return Err(SstError::EmptyAxis("lat".to_string()));
        }
        if lons.is_empty() {
            return Err(SstError::EmptyAxis("lon".to_string()));
        }
        if AxisOrder::of(&lats).is_none() {
            return Err(SstError::NonMonotonicAxis("lat".to_string()));
        }
        if AxisOrder::of(&lons).is_none() {
            return Err(SstError::NonMonotonicAxis("lon".to_string()));
        }
        let expected = lats.len() * lons.len();
        if data.len() != expected {
            return Err(SstError::shape_mismatch("field data", expected, data.len()));
        }

        Ok(Self {
            data,
            lats,
            lons,
            metadata,
        })
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// Number of longitude columns.
    pub fn width(&self) -> usize {
        self.lons.len()
    }

    /// Number of latitude rows.
    pub fn height(&self) -> usize {
        self.lats.len()
    }

    /// Value at (row, col), or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.data[row * self.width() + col])
    }

    /// One latitude row of values.
    pub fn row(&self, row: usize) -> Option<&[f32]> {
        if row >= self.height() {
            return None;
        }
        let start = row * self.width();
        Some(&self.data[start..start + self.width()])
    }

    /// Count of non-missing cells.
    pub fn valid_count(&self) -> usize {
        self.data.iter().filter(|v| !v.is_nan()).count()
    }

    /// Minimum and maximum over non-missing cells.
    pub fn finite_range(&self) -> Option<(f32, f32)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Coordinate envelope as `(min_lon, min_lat, max_lon, max_lat)`.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        let (lat_a, lat_b) = (self.lats[0], self.lats[self.lats.len() - 1]);
        let (lon_a, lon_b) = (self.lons[0], self.lons[self.lons.len() - 1]);
        (lon_a.min(lon_b), lat_a.min(lat_b), lon_a.max(lon_b), lat_a.max(lat_b))
    }

    /// Replace values, keeping coordinates and metadata.
    pub fn with_data(&self, data: Vec<f32>) -> SstResult<Self> {
        if data.len() != self.data.len() {
            return Err(SstError::shape_mismatch(
                "replacement data",
                self.data.len(),
                data.len(),
            ));
        }
        Ok(Self {
            data,
            lats: self.lats.clone(),
            lons: self.lons.clone(),
            metadata: self.metadata.clone(),
        })
    }

    /// Whether both fields share identical coordinate arrays.
    pub fn same_grid(&self, other: &GriddedField) -> bool {
        self.lats == other.lats && self.lons == other.lons
    }

    pub fn into_parts(self) -> (Vec<f32>, Vec<f64>, Vec<f64>, FieldMetadata) {
        (self.data, self.lats, self.lons, self.metadata)
    }
}
