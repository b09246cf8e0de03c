//! Loading small L3m files written by the test helpers.

use netcdf_parser::{load_day_night, load_l3m_sst, summarize, NetCdfError};
use test_utils::{assert_approx_eq, assert_missing, regular_axis, temp_test_dir, write_l3m_file};

fn axes() -> (Vec<f64>, Vec<f64>) {
    (regular_axis(1.5, -1.0, 4), regular_axis(-179.5, 1.0, 6))
}

#[test]
fn test_unpacks_scaled_short_with_fill() {
    let dir = temp_test_dir();
    let (lats, lons) = axes();
    let mut values: Vec<f32> = (0..24).map(|i| i as f32 * 0.5).collect();
    values[7] = f32::NAN;
    let path = write_l3m_file(dir.path(), "day.nc", &lats, &lons, &values);

    let grid = load_l3m_sst(&path, "sst").unwrap();
    assert_eq!(grid.lats, lats);
    assert_eq!(grid.lons, lons);
    assert_approx_eq!(grid.data[3], 1.5, 1e-4);
    assert_approx_eq!(grid.data[23], 11.5, 1e-4);
    assert_missing!(grid.data[7]);
    assert_eq!(grid.units, "degree_C");
    assert_eq!(grid.long_name, "Sea Surface Temperature");

    let declared = grid.declared_range.unwrap();
    assert_approx_eq!(declared.min, -5.0, 1e-4);
    assert_approx_eq!(declared.max, 50.0, 1e-4);

    let field = grid.to_field().unwrap();
    assert_eq!((field.height(), field.width()), (4, 6));
}

#[test]
fn test_unknown_variable() {
    let dir = temp_test_dir();
    let (lats, lons) = axes();
    let path = write_l3m_file(dir.path(), "day.nc", &lats, &lons, &[1.0; 24]);
    let err = load_l3m_sst(&path, "chlor_a").unwrap_err();
    assert!(matches!(err, NetCdfError::MissingData(_)));
}

#[test]
fn test_day_night_grid_mismatch() {
    let dir = temp_test_dir();
    let (lats, lons) = axes();
    let day = write_l3m_file(dir.path(), "day.nc", &lats, &lons, &[1.0; 24]);
    let night = write_l3m_file(dir.path(), "night.nc", &lats[..2], &lons, &[1.0; 12]);
    let err = load_day_night(&day, &night, "sst").unwrap_err();
    assert!(matches!(err, NetCdfError::ShapeMismatch { .. }));
}

#[test]
fn test_day_night_same_shape_shifted_lons() {
    let dir = temp_test_dir();
    let (lats, lons) = axes();
    let shifted: Vec<f64> = lons.iter().map(|lon| lon + 0.5).collect();
    let day = write_l3m_file(dir.path(), "day.nc", &lats, &lons, &[1.0; 24]);
    let night = write_l3m_file(dir.path(), "night.nc", &lats, &shifted, &[1.0; 24]);
    let err = load_day_night(&day, &night, "sst").unwrap_err();
    assert!(matches!(err, NetCdfError::InvalidFormat(_)));
    assert!(err.to_string().contains("night.nc"));
}

#[test]
fn test_summary_lists_dimensions_and_variables() {
    let dir = temp_test_dir();
    let (lats, lons) = axes();
    let path = write_l3m_file(dir.path(), "night.nc", &lats, &lons, &[1.0; 24]);
    let summary = summarize(&path).unwrap();

    assert!(summary.dimensions.contains(&("lat".to_string(), 4)));
    assert!(summary.dimensions.contains(&("lon".to_string(), 6)));
    let sst = summary.variables.iter().find(|v| v.name == "sst").unwrap();
    assert_eq!(sst.dims, vec!["lat", "lon"]);
    assert_eq!(sst.long_name.as_deref(), Some("Sea Surface Temperature"));
    assert!(summary.global_attributes.iter().any(|a| a == "title"));

    let text = summary.to_string();
    assert!(text.contains("Dimensions:  (lat: 4, lon: 6)"));
}
