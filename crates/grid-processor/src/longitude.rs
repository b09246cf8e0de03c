//! Re-centering global grids from [0, 360) to [-180, 180).

use sst_common::{GriddedField, SstError, SstResult};

/// Tolerance when checking that the split column sits half a circle away.
const HALF_CIRCLE_TOLERANCE: f64 = 1e-6;

/// Column where the eastern half (longitude >= 180) starts.
///
/// Requires an even number of columns with `lon[n/2] - lon[0] == 180`; any
/// other grid would be silently corrupted by a half-swap, so it is rejected.
pub fn half_circle_split(lons: &[f64]) -> SstResult<usize> {
    let n = lons.len();
    if n < 2 || n % 2 != 0 {
        return Err(SstError::grid_precondition(format!(
            "longitude roll needs an even number of columns, got {}",
            n
        )));
    }

    let split = n / 2;
    let span = lons[split] - lons[0];
    if (span - 180.0).abs() > HALF_CIRCLE_TOLERANCE {
        return Err(SstError::grid_precondition(format!(
            "longitude roll needs lon[{}] - lon[0] == 180, got {:.6} (grid is not a global half-swappable circle)",
            split, span
        )));
    }

    Ok(split)
}

/// Move the eastern half of every row in front of the western half and shift
/// the longitude coordinate by -180.
///
/// The result holds exactly the same values, permuted; with 1440 columns the
/// split index is 720.
pub fn roll_to_pm180(field: &GriddedField) -> SstResult<GriddedField> {
    let split = half_circle_split(field.lons())?;
    let width = field.width();

    let mut data = Vec::with_capacity(field.data().len());
    for row in field.data().chunks_exact(width) {
        data.extend_from_slice(&row[split..]);
        data.extend_from_slice(&row[..split]);
    }

    let lons = field.lons().iter().map(|lon| lon - 180.0).collect();
    GriddedField::new(data, field.lats().to_vec(), lons, field.metadata.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sst_common::FieldMetadata;

    fn field_360(width: usize) -> GriddedField {
        let step = 360.0 / width as f64;
        let lons: Vec<f64> = (0..width).map(|j| step * j as f64 + step / 2.0).collect();
        let data = (0..2 * width).map(|i| i as f32).collect();
        GriddedField::new(data, vec![-1.0, 1.0], lons, FieldMetadata::default()).unwrap()
    }

    #[test]
    fn test_quarter_degree_split_is_720() {
        let lons: Vec<f64> = (0..1440).map(|j| 0.25 * j as f64 + 0.125).collect();
        assert_eq!(half_circle_split(&lons).unwrap(), 720);
    }

    #[test]
    fn test_roll_permutes_rows() {
        let rolled = roll_to_pm180(&field_360(4)).unwrap();
        assert_eq!(rolled.data(), &[2.0, 3.0, 0.0, 1.0, 6.0, 7.0, 4.0, 5.0]);
        assert_eq!(rolled.lons(), &[-135.0, -45.0, 45.0, 135.0]);
    }

    #[test]
    fn test_roll_rejects_odd_width() {
        let err = roll_to_pm180(&field_360(5)).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_roll_rejects_regional_grid() {
        let field = GriddedField::new(
            vec![0.0; 4],
            vec![0.0],
            vec![10.0, 20.0, 30.0, 40.0],
            FieldMetadata::default(),
        )
        .unwrap();
        assert!(matches!(
            roll_to_pm180(&field),
            Err(SstError::GridPrecondition(_))
        ));
    }
}
