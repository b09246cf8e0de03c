//! Loading real MODIS L3m granules. Skipped when the files are absent.

use netcdf_parser::{load_day_night, load_l3m_sst, summarize, NetCdfError};
use test_utils::{fixtures::files, require_test_file, require_test_files};

#[test]
fn test_missing_file_errors() {
    let err = load_l3m_sst("/nonexistent/A2016275.L3m_DAY_SST_sst_4km.nc", "sst").unwrap_err();
    assert!(matches!(err, NetCdfError::IoError(_)));
}

#[test]
fn test_load_day_file() {
    let path = require_test_file!(files::MODIS_DAY);
    let grid = load_l3m_sst(&path, "sst").unwrap();

    assert_eq!(grid.lats.len(), 4320);
    assert_eq!(grid.lons.len(), 8640);
    assert_eq!(grid.data.len(), 4320 * 8640);
    // L3m latitude runs north to south
    assert!(grid.lats[0] > grid.lats[1]);
    assert!(grid
        .data
        .iter()
        .all(|v| v.is_nan() || (-5.0..=50.0).contains(v)));

    let field = grid.to_field().unwrap();
    assert_eq!(field.width(), 8640);
}

#[test]
fn test_load_day_night_pair() {
    let paths = require_test_files!(files::MODIS_DAY, files::MODIS_NIGHT);
    let (day, night) = load_day_night(&paths[0], &paths[1], "sst").unwrap();
    assert_eq!(day.lats, night.lats);
    assert_eq!(day.lons, night.lons);
}

#[test]
fn test_summarize_night_file() {
    let path = require_test_file!(files::MODIS_NIGHT);
    let summary = summarize(&path).unwrap();
    assert!(summary.variables.iter().any(|v| v.name == "sst"));
    assert!(summary.to_string().contains("lat"));
}
