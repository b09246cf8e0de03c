//! Derived quantities for plotting: differences, histograms and profiles.

use sst_common::{FieldMetadata, GriddedField, SstError, SstResult};

use crate::types::{Histogram, Profile};

/// Element-wise `a - b` on a shared grid. NaN in either input gives NaN.
pub fn difference(a: &GriddedField, b: &GriddedField, metadata: FieldMetadata) -> SstResult<GriddedField> {
    if !a.same_grid(b) {
        return Err(SstError::grid_precondition(format!(
            "difference needs identical grids, got {}x{} and {}x{}",
            a.height(),
            a.width(),
            b.height(),
            b.width()
        )));
    }

    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(x, y)| x - y)
        .collect();

    GriddedField::new(data, a.lats().to_vec(), a.lons().to_vec(), metadata)
}

/// Equal-width histogram over the finite min..max of `values`.
///
/// The last bin includes its right edge. A constant input is binned over
/// `[v - 0.5, v + 0.5]`. Returns `None` when there are no finite values or
/// `bins` is zero.
pub fn histogram(values: &[f32], bins: usize) -> Option<Histogram> {
    if bins == 0 {
        return None;
    }

    let (lo, hi) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| {
            let v = v as f64;
            Some(match acc {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            })
        })?;

    let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0u64; bins];
    for v in values.iter().copied().filter(|v| v.is_finite()) {
        let idx = (((v as f64) - lo) / width).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    Some(Histogram { edges, counts })
}

/// Index of the latitude closest to `lat`. Equal distances resolve to the
/// larger coordinate, whatever the axis direction.
pub fn nearest_index(coords: &[f64], lat: f64) -> Option<usize> {
    coords
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_finite())
        .fold(None, |best: Option<(usize, f64, f64)>, (idx, &c)| {
            let dist = (c - lat).abs();
            match best {
                Some((_, best_c, best_dist))
                    if best_dist < dist || (best_dist == dist && best_c >= c) =>
                {
                    best
                }
                _ => Some((idx, c, dist)),
            }
        })
        .map(|(idx, _, _)| idx)
}

/// The row of `field` nearest to latitude `lat`, on the field's own grid.
pub fn profile_at_lat(field: &GriddedField, lat: f64) -> Option<Profile> {
    let row = nearest_index(field.lats(), lat)?;
    Some(Profile {
        lat: field.lats()[row],
        lons: field.lons().to_vec(),
        values: field.row(row)?.to_vec(),
    })
}
