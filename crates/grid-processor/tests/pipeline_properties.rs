//! Properties of the normalize/align pipeline on synthetic grids.

use grid_processor::{
    collapse_layers, difference, interpolate_like, interpolate_to_grid, normalize_gmi,
    normalize_modis, profile_at_lat, roll_to_pm180, InterpolationMethod,
};
use sst_common::{FieldMetadata, GriddedField, RawComposite, ValidRange};
use test_utils::{
    assert_approx_eq, assert_missing, create_sst_grid, fixtures::grid::COARSE_GLOBAL_360,
    regular_axis, sst_field_from_fn,
};

fn composite(data: Vec<f32>, layers: usize, lats: Vec<f64>, lons: Vec<f64>) -> RawComposite {
    RawComposite::new(data, layers, lats, lons, FieldMetadata::default()).unwrap()
}

/// Values cycling through in-range, out-of-range and sentinel values.
fn mixed_values(n: usize) -> Vec<f32> {
    let pattern = [-999.0, -3.5, -3.0, 0.0, 12.25, 34.5, 34.6, 45.0, 46.0, f32::NAN];
    (0..n).map(|i| pattern[(i * 7) % pattern.len()]).collect()
}

#[test]
fn test_outputs_stay_in_product_range() {
    let grid = COARSE_GLOBAL_360;
    let raw = composite(mixed_values(2 * grid.size()), 2, grid.lats(), grid.lons());
    let gmi = normalize_gmi(raw, ValidRange::GMI_SST).unwrap();
    assert!(gmi
        .data()
        .iter()
        .all(|&v| v.is_nan() || ValidRange::GMI_SST.contains(v)));

    let day = mixed_values(grid.size());
    let night: Vec<f32> = mixed_values(grid.size() + 3)[3..].to_vec();
    let modis = normalize_modis(&day, &night, grid.lats(), grid.lons(), ValidRange::MODIS_SST).unwrap();
    assert!(modis
        .data()
        .iter()
        .all(|&v| v.is_nan() || ValidRange::MODIS_SST.contains(v)));
}

#[test]
fn test_single_layer_collapse_is_identity() {
    let lats = regular_axis(-2.0, 1.0, 5);
    let lons = regular_axis(0.0, 1.0, 5);
    let values = create_sst_grid(5, 5);
    let collapsed = collapse_layers(
        composite(values.clone(), 1, lats, lons),
        ValidRange::GMI_SST,
    )
    .unwrap();
    assert_eq!(collapsed.data(), values.as_slice());
}

#[test]
fn test_masked_pass_does_not_enter_mean() {
    // 2 x 5 x 5: pass 0 valid everywhere, pass 1 out of range at (2, 3)
    let lats = regular_axis(-2.0, 1.0, 5);
    let lons = regular_axis(0.0, 1.0, 5);
    let mut data = vec![20.0f32; 50];
    data[25 + 2 * 5 + 3] = 40.0;
    data[2 * 5 + 3] = 17.35;

    let collapsed = collapse_layers(composite(data, 2, lats, lons), ValidRange::GMI_SST).unwrap();
    assert_eq!(collapsed.get(2, 3), Some(17.35));
    assert_eq!(collapsed.get(0, 0), Some(20.0));
}

#[test]
fn test_all_passes_masked_gives_missing() {
    let lats = regular_axis(0.0, 1.0, 1);
    let lons = regular_axis(45.0, 90.0, 4);
    let data = vec![
        -999.0, 10.0, 50.0, 12.0, // pass 0
        -999.0, 14.0, -999.0, f32::NAN, // pass 1
    ];
    let gmi = normalize_gmi(composite(data, 2, lats, lons), ValidRange::GMI_SST).unwrap();
    // rolled: columns [2, 3, 0, 1]
    assert_missing!(gmi.data()[0]);
    assert_eq!(gmi.data()[1], 12.0);
    assert_missing!(gmi.data()[2]);
    assert_eq!(gmi.data()[3], 12.0);
}

#[test]
fn test_gmi_normalize_matches_manual_roll() {
    let grid = COARSE_GLOBAL_360;
    let pass = create_sst_grid(grid.width, grid.height);
    let mut data = pass.clone();
    data.extend(vec![-999.0; grid.size()]);

    let gmi = normalize_gmi(composite(data, 2, grid.lats(), grid.lons()), ValidRange::GMI_SST).unwrap();

    assert_eq!(gmi.lons()[0], -175.0);
    assert_eq!(gmi.lons()[35], 175.0);
    for row in 0..grid.height {
        for col in 0..grid.width {
            let src_col = (col + 18) % 36;
            assert_eq!(gmi.get(row, col), Some(pass[row * 36 + src_col]));
        }
    }
}

#[test]
fn test_roll_is_a_permutation() {
    let grid = COARSE_GLOBAL_360;
    let field = GriddedField::new(
        create_sst_grid(grid.width, grid.height),
        grid.lats(),
        grid.lons(),
        FieldMetadata::default(),
    )
    .unwrap();
    let rolled = roll_to_pm180(&field).unwrap();

    let mut before = field.data().to_vec();
    let mut after = rolled.data().to_vec();
    before.sort_by(f32::total_cmp);
    after.sort_by(f32::total_cmp);
    assert_eq!(before, after);

    for (old, new) in field.lons().iter().zip(rolled.lons()) {
        assert_eq!(*new, old - 180.0);
    }
    assert_eq!(field.lats(), rolled.lats());
}

#[test]
fn test_interpolation_onto_own_grid_is_exact() {
    let lats = regular_axis(10.0, -0.5, 9);
    let lons = regular_axis(-20.0, 0.25, 17);
    let mut field = sst_field_from_fn(lats, lons, |lat, lon| (lat * 0.7 + lon * 0.1) as f32 + 15.0);
    let mut data = field.data().to_vec();
    data[13] = f32::NAN;
    field = field.with_data(data).unwrap();

    let same = interpolate_like(&field, &field, InterpolationMethod::Linear).unwrap();
    assert_eq!(same.lats(), field.lats());
    assert_eq!(same.lons(), field.lons());
    for (a, b) in same.data().iter().zip(field.data()) {
        assert!(a == b || (a.is_nan() && b.is_nan()));
    }
}

#[test]
fn test_targets_outside_envelope_are_missing() {
    let field = sst_field_from_fn(regular_axis(-1.0, 1.0, 3), regular_axis(-1.0, 1.0, 3), |_, _| 5.0);
    let out = interpolate_to_grid(
        &field,
        &[-1.5, 0.0, 1.5],
        &[-2.0, 0.5, 1.0001],
        InterpolationMethod::Linear,
    )
    .unwrap();

    for row in 0..3 {
        for col in 0..3 {
            let v = out.get(row, col).unwrap();
            if row == 1 && col == 1 {
                assert_eq!(v, 5.0);
            } else {
                assert_missing!(v);
            }
        }
    }
}

#[test]
fn test_fine_descending_grid_onto_coarse_grid() {
    // A linear field is reproduced exactly by bilinear interpolation.
    let fine = sst_field_from_fn(
        regular_axis(10.0, -0.25, 81),
        regular_axis(-10.0, 0.25, 81),
        |lat, lon| (2.0 * lat + 0.5 * lon + 10.0) as f32,
    );
    let target_lats = regular_axis(-9.9, 1.3, 15);
    let target_lons = regular_axis(-9.7, 1.1, 18);
    let out = interpolate_to_grid(&fine, &target_lats, &target_lons, InterpolationMethod::Linear).unwrap();

    for (i, lat) in target_lats.iter().enumerate() {
        for (j, lon) in target_lons.iter().enumerate() {
            let expected = 2.0 * lat + 0.5 * lon + 10.0;
            assert_approx_eq!(out.get(i, j).unwrap(), expected, 1e-3);
        }
    }
}

#[test]
fn test_day_only_pixel_keeps_day_value() {
    let field = normalize_modis(&[10.0], &[f32::NAN], vec![0.0], vec![0.0], ValidRange::MODIS_SST).unwrap();
    assert_eq!(field.data(), &[10.0]);
}

#[test]
fn test_difference_of_identical_fields() {
    let grid = COARSE_GLOBAL_360;
    let field = GriddedField::new(
        create_sst_grid(grid.width, grid.height),
        grid.lats(),
        grid.lons(),
        FieldMetadata::sea_surface_temperature(),
    )
    .unwrap();
    let diff = difference(&field, &field, FieldMetadata::new("°C", "SST GMI - MODIS")).unwrap();
    assert!(diff.data().iter().all(|&v| v == 0.0));
    assert_eq!(diff.metadata.label(), "SST GMI - MODIS [°C]");
}

#[test]
fn test_profile_uses_native_grid() {
    let gmi = sst_field_from_fn(regular_axis(-1.125, 0.25, 10), regular_axis(-179.875, 0.25, 8), |lat, _| {
        lat as f32
    });
    let profile = profile_at_lat(&gmi, 0.0).unwrap();
    // 0.0 is equidistant from -0.125 and 0.125; the northern row is used
    assert_eq!(profile.lat, 0.125);
    assert_eq!(profile.lons.len(), 8);
    assert!(profile.values.iter().all(|&v| v == 0.125));
}
