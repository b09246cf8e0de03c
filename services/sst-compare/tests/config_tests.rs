use std::path::PathBuf;

use chrono::NaiveDate;
use grid_processor::InterpolationMethod;
use sst_compare::Config;
use sst_common::ValidRange;

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("compare.yaml");
    std::fs::write(
        &path,
        r#"
date: 2017-03-15
modis:
  valid_range: [-1.5, 40.0]
align:
  method: nearest
plots:
  hist_bins: 80
  files:
    profile: equator.png
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    let defaults = Config::default();

    assert_eq!(config.date, NaiveDate::from_ymd_opt(2017, 3, 15).unwrap());
    assert_eq!(config.modis.valid_range, ValidRange::new(-1.5, 40.0));
    assert_eq!(config.modis.variable, "sst");
    assert_eq!(config.gmi, defaults.gmi);
    assert_eq!(config.align.method, InterpolationMethod::Nearest);
    assert_eq!(config.plots.hist_bins, 80);
    assert_eq!(config.plots.dpi, 300);
    assert_eq!(config.plots.files.profile, "equator.png");
    assert_eq!(config.plots.files.histogram, "hist_gmi_modis.png");

    assert_eq!(config.gmi_path().unwrap(), PathBuf::from("data/gmi/f35_20170315v8.2.gz"));
    let (day, _) = config.modis_paths().unwrap();
    assert_eq!(day, PathBuf::from("data/modis/A2017074.L3m_DAY_SST_sst_4km.nc"));
}

#[test]
fn test_bilinear_alias() {
    let config = Config::from_yaml("align:\n  method: bilinear\n").unwrap();
    assert_eq!(config.align.method, InterpolationMethod::Linear);
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    assert!(Config::from_yaml("plots:\n  diff_range: [8.0, -3.0]\n").is_err());
    assert!(Config::from_yaml("plots:\n  profile_lat: 95.0\n").is_err());
    assert!(Config::from_yaml("modis:\n  variable: \"\"\n").is_err());
    assert!(Config::from_yaml("plots: [1, 2]\n").is_err());
}

#[test]
fn test_missing_file_error_names_path() {
    let err = Config::load("/nonexistent/sst-compare.yaml").unwrap_err();
    assert!(format!("{:#}", err).contains("sst-compare.yaml"));
}

#[test]
fn test_round_trips_through_yaml() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_sample_config_matches_defaults() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/sst-compare.yaml");
    assert_eq!(Config::load(path).unwrap(), Config::default());
}
