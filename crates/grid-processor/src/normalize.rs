//! Normalization of raw product data into comparable SST fields.
//!
//! GMI: mask, average passes, roll longitude to [-180, 180).
//! MODIS: stack day and night, mask, average the pair.

use sst_common::{FieldMetadata, GriddedField, RawComposite, SstResult, ValidRange};
use tracing::debug;

use crate::longitude::roll_to_pm180;
use crate::mask::{mask_out_of_range, nan_mean_layers};

/// Mask a multi-layer stack to `range` and collapse it with a NaN-ignoring
/// mean over the layer axis. Coordinates are kept as-is.
pub fn collapse_layers(stack: RawComposite, range: ValidRange) -> SstResult<GriddedField> {
    let mut stack = stack;
    let masked = mask_out_of_range(stack.data_mut(), range);
    let mean = nan_mean_layers(&stack);

    debug!(
        layers = stack.layers(),
        cells = stack.plane_len(),
        masked,
        min = range.min,
        max = range.max,
        "Collapsed layers"
    );

    let (_, _, lats, lons, _) = stack.into_parts();
    GriddedField::new(mean, lats, lons, FieldMetadata::sea_surface_temperature())
}

/// Normalize a GMI `(pass, lat, lon)` composite on [0, 360) longitudes.
///
/// Order: mask to `range`, NaN-mean over passes, then roll the longitude axis
/// so the output runs over [-180, 180).
pub fn normalize_gmi(raw: RawComposite, range: ValidRange) -> SstResult<GriddedField> {
    let collapsed = collapse_layers(raw, range)?;
    roll_to_pm180(&collapsed)
}

/// Normalize a MODIS day/night pair sharing one grid.
///
/// The pair is stacked along a new axis, masked to `range` and averaged
/// ignoring NaN. Coordinates come from `lats`/`lons` (the day file).
pub fn normalize_modis(
    day: &[f32],
    night: &[f32],
    lats: Vec<f64>,
    lons: Vec<f64>,
    range: ValidRange,
) -> SstResult<GriddedField> {
    let stack = RawComposite::stack(
        &[day, night],
        lats,
        lons,
        FieldMetadata::sea_surface_temperature(),
    )?;
    collapse_layers(stack, range)
}
