//! Test helpers for the sst-compare crates: synthetic GMI bytemaps and
//! MODIS L3m files, small SST grids, and lookup of the real data files that
//! some tests need but that are not checked in.

pub mod fixtures;
pub mod generators;
pub mod netcdf_files;
pub mod paths;

pub use fixtures::*;
pub use generators::*;
pub use netcdf_files::*;
pub use paths::*;

/// Resolve a data file by name, or print why the test is skipped and return.
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!("SKIPPED: {} not found (set TEST_DATA_DIR)", $name);
                return;
            }
        }
    }};
}

/// Like `require_test_file!` for several files; yields a `Vec<PathBuf>`.
#[macro_export]
macro_rules! require_test_files {
    ($($name:expr),+ $(,)?) => {{
        vec![$($crate::require_test_file!($name)),+]
    }};
}

/// Assert two temperatures agree within `tol`.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tol:expr) => {{
        let (left, right, tol) = ($left as f64, $right as f64, $tol as f64);
        assert!(
            (left - right).abs() <= tol,
            "assertion failed: {} and {} differ by more than {}",
            left,
            right,
            tol
        );
    }};
}

/// Assert a grid cell is missing (NaN).
#[macro_export]
macro_rules! assert_missing {
    ($value:expr) => {{
        let value = $value as f64;
        assert!(value.is_nan(), "expected missing (NaN), got {}", value);
    }};
}
