//! Generators for synthetic SST grids and GMI bytemap files.
//!
//! These produce predictable values so tests can check masking, averaging,
//! rolling and interpolation exactly.

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use sst_common::{FieldMetadata, GriddedField};

/// Number of geophysical maps stored per pass in a GMI bytemap.
pub const GMI_MAPS_PER_PASS: usize = 7;

/// Index of the SST map within a pass.
pub const GMI_SST_MAP: usize = 1;

/// Evenly spaced coordinate axis.
pub fn regular_axis(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Creates an SST-like grid: warm (about 30 C) in the middle rows, cold
/// (about -1 C) at the top and bottom rows, with a small zonal ripple.
pub fn create_sst_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        let lat_factor = 1.0 - (2.0 * (row as f32 + 0.5) / height as f32 - 1.0).abs();
        for col in 0..width {
            let ripple = (col as f32 / width.max(1) as f32 * std::f32::consts::TAU).sin();
            data.push(-1.0 + lat_factor * 31.0 + ripple * 0.5);
        }
    }
    data
}

/// Builds an SST field from a closure over `(lat, lon)`.
pub fn sst_field_from_fn<F>(lats: Vec<f64>, lons: Vec<f64>, f: F) -> GriddedField
where
    F: Fn(f64, f64) -> f32,
{
    let mut data = Vec::with_capacity(lats.len() * lons.len());
    for &lat in &lats {
        for &lon in &lons {
            data.push(f(lat, lon));
        }
    }
    GriddedField::new(data, lats, lons, FieldMetadata::sea_surface_temperature())
        .expect("synthetic field should be well-formed")
}

/// Byte that decodes to `celsius` in the GMI SST map (scale 0.15, offset -3).
pub fn gmi_sst_byte(celsius: f32) -> u8 {
    ((celsius + 3.0) / 0.15).round().clamp(0.0, 250.0) as u8
}

/// Builds a decompressed GMI payload. Only the SST map is populated (from
/// `sst_byte(pass, row, col)`); every other map is zero.
pub fn gmi_payload<F>(passes: usize, nlat: usize, nlon: usize, sst_byte: F) -> Vec<u8>
where
    F: Fn(usize, usize, usize) -> u8,
{
    let map_len = nlat * nlon;
    let mut payload = vec![0u8; passes * GMI_MAPS_PER_PASS * map_len];
    for pass in 0..passes {
        let start = (pass * GMI_MAPS_PER_PASS + GMI_SST_MAP) * map_len;
        for row in 0..nlat {
            for col in 0..nlon {
                payload[start + row * nlon + col] = sst_byte(pass, row, col);
            }
        }
    }
    payload
}

/// Writes `payload` to `dir/name`, gzip-compressed when `gzip` is set.
pub fn write_gmi_file(dir: &Path, name: &str, payload: &[u8], gzip: bool) -> PathBuf {
    let path = dir.join(name);
    let bytes = if gzip {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
        encoder.write_all(payload).expect("gzip write");
        encoder.finish().expect("gzip finish")
    } else {
        payload.to_vec()
    };
    std::fs::write(&path, bytes).expect("write GMI test file");
    path
}
