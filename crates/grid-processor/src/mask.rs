//! Range masking and masked (NaN-ignoring) reductions.

use sst_common::{RawComposite, ValidRange};

/// Replace every value outside `range` (and any non-finite value) with NaN.
///
/// Returns the number of cells that were valid before masking and became
/// missing.
pub fn mask_out_of_range(data: &mut [f32], range: ValidRange) -> usize {
    let mut masked = 0;
    for value in data.iter_mut() {
        if !range.contains(*value) {
            if !value.is_nan() {
                masked += 1;
            }
            *value = f32::NAN;
        }
    }
    masked
}

/// Mean over the leading (layer) axis, ignoring NaN.
///
/// A cell is NaN in the output only when it is NaN in every layer; otherwise
/// it is the mean of the non-missing layers.
pub fn nan_mean_layers(stack: &RawComposite) -> Vec<f32> {
    let plane = stack.plane_len();
    let mut sums = vec![0.0f64; plane];
    let mut counts = vec![0u32; plane];

    for layer in 0..stack.layers() {
        let values = &stack.data()[layer * plane..(layer + 1) * plane];
        for (idx, &v) in values.iter().enumerate() {
            if !v.is_nan() {
                sums[idx] += v as f64;
                counts[idx] += 1;
            }
        }
    }

    sums.into_iter()
        .zip(counts)
        .map(|(sum, count)| {
            if count == 0 {
                f32::NAN
            } else {
                (sum / count as f64) as f32
            }
        })
        .collect()
}
