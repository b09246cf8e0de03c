//! Interpolation of a field onto another field's coordinate grid.
//!
//! Axes are located by coordinate value (not pixel index), so source and
//! target may differ in resolution, extent and axis direction. Targets outside
//! the source envelope are NaN; there is no extrapolation.

use sst_common::{AxisOrder, GriddedField, SstError, SstResult};
use tracing::debug;

use crate::types::InterpolationMethod;

/// Position of a coordinate value between two source indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket {
    /// The value coincides with a source coordinate.
    Exact(usize),
    /// Strictly between `lo` and `lo + 1`; `t` in (0, 1) is the weight of `lo + 1`.
    Between { lo: usize, t: f64 },
}

impl Bracket {
    /// Source indices and weights contributing to this position.
    fn weights(self) -> ([(usize, f64); 2], usize) {
        match self {
            Bracket::Exact(i) => ([(i, 1.0), (i, 0.0)], 1),
            Bracket::Between { lo, t } => ([(lo, 1.0 - t), (lo + 1, t)], 2),
        }
    }

    /// Index of the nearer source coordinate; ties go to the lower index.
    fn nearest(self) -> usize {
        match self {
            Bracket::Exact(i) => i,
            Bracket::Between { lo, t } if t <= 0.5 => lo,
            Bracket::Between { lo, .. } => lo + 1,
        }
    }
}

/// Locate `x` on a strictly monotonic axis.
///
/// Returns `None` for NaN or values outside `[min(coords), max(coords)]`.
pub fn locate(coords: &[f64], order: AxisOrder, x: f64) -> Option<Bracket> {
    if x.is_nan() || coords.is_empty() {
        return None;
    }
    let n = coords.len();

    // Index of the last coordinate at or "before" x along the axis direction.
    let lo = match order {
        AxisOrder::Ascending => {
            if x < coords[0] || x > coords[n - 1] {
                return None;
            }
            coords.partition_point(|&c| c <= x) - 1
        }
        AxisOrder::Descending => {
            if x > coords[0] || x < coords[n - 1] {
                return None;
            }
            coords.partition_point(|&c| c >= x) - 1
        }
    };

    if coords[lo] == x {
        return Some(Bracket::Exact(lo));
    }

    // x lies strictly inside, so lo + 1 exists.
    let t = (x - coords[lo]) / (coords[lo + 1] - coords[lo]);
    Some(Bracket::Between { lo, t })
}

/// Bilinear interpolation from bracketed row/column positions.
///
/// Returns NaN if any contributing corner is NaN. Exact positions collapse
/// their dimension, so neighbours of an exact hit never contribute.
pub fn bilinear_at(data: &[f32], width: usize, row: Bracket, col: Bracket) -> f32 {
    let (rows, n_rows) = row.weights();
    let (cols, n_cols) = col.weights();

    let mut acc = 0.0f64;
    for &(r, wr) in &rows[..n_rows] {
        for &(c, wc) in &cols[..n_cols] {
            let v = data[r * width + c];
            if v.is_nan() {
                return f32::NAN;
            }
            acc += wr * wc * v as f64;
        }
    }
    acc as f32
}

/// Nearest-neighbour lookup from bracketed positions.
pub fn nearest_at(data: &[f32], width: usize, row: Bracket, col: Bracket) -> f32 {
    data[row.nearest() * width + col.nearest()]
}

/// Resample `source` onto the grid given by `target_lats` × `target_lons`.
///
/// Every target point gets a value interpolated over the source's native
/// coordinate axes; points outside the source envelope are NaN. Metadata is
/// carried over from the source.
pub fn interpolate_to_grid(
    source: &GriddedField,
    target_lats: &[f64],
    target_lons: &[f64],
    method: InterpolationMethod,
) -> SstResult<GriddedField> {
    let lat_order = AxisOrder::of(source.lats())
        .ok_or_else(|| SstError::NonMonotonicAxis("source lat".to_string()))?;
    let lon_order = AxisOrder::of(source.lons())
        .ok_or_else(|| SstError::NonMonotonicAxis("source lon".to_string()))?;

    let rows: Vec<Option<Bracket>> = target_lats
        .iter()
        .map(|&lat| locate(source.lats(), lat_order, lat))
        .collect();
    let cols: Vec<Option<Bracket>> = target_lons
        .iter()
        .map(|&lon| locate(source.lons(), lon_order, lon))
        .collect();

    let width = source.width();
    let data = source.data();
    let mut output = vec![f32::NAN; target_lats.len() * target_lons.len()];

    for (ti, row) in rows.iter().enumerate() {
        let Some(row) = *row else { continue };
        let out_row = &mut output[ti * target_lons.len()..(ti + 1) * target_lons.len()];
        for (tj, col) in cols.iter().enumerate() {
            let Some(col) = *col else { continue };
            out_row[tj] = match method {
                InterpolationMethod::Linear => bilinear_at(data, width, row, col),
                InterpolationMethod::Nearest => nearest_at(data, width, row, col),
            };
        }
    }

    debug!(
        source_rows = source.height(),
        source_cols = source.width(),
        target_rows = target_lats.len(),
        target_cols = target_lons.len(),
        inside_rows = rows.iter().filter(|r| r.is_some()).count(),
        inside_cols = cols.iter().filter(|c| c.is_some()).count(),
        %method,
        "Interpolated field onto target grid"
    );

    GriddedField::new(
        output,
        target_lats.to_vec(),
        target_lons.to_vec(),
        source.metadata.clone(),
    )
}

/// Resample `source` onto the coordinate grid of `target`.
pub fn interpolate_like(
    source: &GriddedField,
    target: &GriddedField,
    method: InterpolationMethod,
) -> SstResult<GriddedField> {
    interpolate_to_grid(source, target.lats(), target.lons(), method)
}
