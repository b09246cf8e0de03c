//! Reader for Remote Sensing Systems GMI daily bytemaps (version 8.2).
//!
//! A daily file is a gzip-compressed flat array of unsigned bytes with shape
//! `(pass, variable, lat, lon)`. Each byte is scaled and offset into a
//! physical value; bytes above 250 are special codes (land, ice, no
//! observation, ...) and decode to the caller's `missing` sentinel.
//!
//! # Example
//!
//! ```ignore
//! let daily = gmi_reader::read_gmi_daily("data/gmi/f35_20161001v8.2.gz", -999.0)?;
//! let sst = daily.composite("sst")?;
//! ```

pub mod error;
pub mod layout;

use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use sst_common::{FieldMetadata, RawComposite};
use tracing::debug;

pub use error::{GmiError, GmiResult};
pub use layout::{GmiLayout, VariableSpec, GMI_VARIABLES};

use layout::{CODE_BAD_DATA, CODE_ICE, CODE_LAND, CODE_NO_OBS, CODE_RAIN_FLAG};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// One decoded variable with its descriptive attributes.
#[derive(Debug, Clone)]
pub struct GmiVariable {
    pub name: String,
    pub long_name: String,
    pub units: String,
    pub valid_min: f32,
    pub valid_max: f32,
    /// Dimension names, outermost first.
    pub dims: Vec<&'static str>,
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

/// All variables decoded from one daily file.
#[derive(Debug, Clone)]
pub struct GmiDaily {
    pub path: PathBuf,
    pub layout: GmiLayout,
    pub missing: f32,
    variables: Vec<GmiVariable>,
}

impl GmiDaily {
    /// Variables in file order: coordinates, geophysical maps, then masks.
    pub fn variables(&self) -> &[GmiVariable] {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&GmiVariable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Extract a per-pass map as a `(pass, lat, lon)` composite on the native
    /// [0, 360) longitude grid.
    pub fn composite(&self, name: &str) -> GmiResult<RawComposite> {
        let var = self
            .variable(name)
            .filter(|v| v.dims.first() == Some(&"orbit_segment"))
            .ok_or_else(|| GmiError::UnknownVariable(name.to_string()))?;

        let metadata = FieldMetadata::new(var.units.clone(), var.long_name.clone());
        Ok(RawComposite::new(
            var.data.clone(),
            self.layout.passes,
            self.layout.latitudes(),
            self.layout.longitudes(),
            metadata,
        )?)
    }
}

/// Read a standard 0.25 degree daily file.
pub fn read_gmi_daily<P: AsRef<Path>>(path: P, missing: f32) -> GmiResult<GmiDaily> {
    read_gmi_daily_with_layout(path, GmiLayout::DAILY_QUARTER_DEGREE, missing)
}

/// Read a daily file with an explicit layout.
///
/// Gzip input is detected by its magic bytes; uncompressed payloads are
/// accepted as-is.
pub fn read_gmi_daily_with_layout<P: AsRef<Path>>(
    path: P,
    layout: GmiLayout,
    missing: f32,
) -> GmiResult<GmiDaily> {
    let path = path.as_ref().to_path_buf();
    let raw = std::fs::read(&path).map_err(|source| GmiError::Io {
        path: path.clone(),
        source,
    })?;

    let payload = if raw.starts_with(&GZIP_MAGIC) {
        let mut decoded = Vec::with_capacity(layout.payload_len());
        GzDecoder::new(raw.as_slice())
            .read_to_end(&mut decoded)
            .map_err(|e| GmiError::Decompression {
                path: path.clone(),
                message: e.to_string(),
            })?;
        decoded
    } else {
        raw
    };

    debug!(
        path = %path.display(),
        bytes = payload.len(),
        expected = layout.payload_len(),
        "Read GMI payload"
    );

    decode_payload(&payload, layout, missing, path)
}

/// Decode an already-decompressed payload.
pub fn decode_payload(
    payload: &[u8],
    layout: GmiLayout,
    missing: f32,
    path: PathBuf,
) -> GmiResult<GmiDaily> {
    if payload.is_empty() || payload.len() != layout.payload_len() {
        return Err(GmiError::NoVariables {
            path,
            expected: layout.payload_len(),
            found: payload.len(),
        });
    }

    let map_len = layout.map_len();
    let per_pass_shape = vec![layout.passes, layout.nlat, layout.nlon];
    let per_pass_dims = vec!["orbit_segment", "latitude", "longitude"];

    let mut variables = Vec::with_capacity(GMI_VARIABLES.len() + 5);

    variables.push(GmiVariable {
        name: "longitude".to_string(),
        long_name: "Grid Cell Center Longitude".to_string(),
        units: "degrees_east".to_string(),
        valid_min: 0.0,
        valid_max: 360.0,
        dims: vec!["longitude"],
        shape: vec![layout.nlon],
        data: layout.longitudes().into_iter().map(|v| v as f32).collect(),
    });
    variables.push(GmiVariable {
        name: "latitude".to_string(),
        long_name: "Grid Cell Center Latitude".to_string(),
        units: "degrees_north".to_string(),
        valid_min: -90.0,
        valid_max: 90.0,
        dims: vec!["latitude"],
        shape: vec![layout.nlat],
        data: layout.latitudes().into_iter().map(|v| v as f32).collect(),
    });

    for (var_idx, spec) in GMI_VARIABLES.iter().enumerate() {
        let mut data = Vec::with_capacity(layout.passes * map_len);
        for pass in 0..layout.passes {
            let start = layout.map_offset(pass, var_idx);
            data.extend(
                payload[start..start + map_len]
                    .iter()
                    .map(|&byte| spec.decode(byte, missing)),
            );
        }
        variables.push(GmiVariable {
            name: spec.name.to_string(),
            long_name: spec.long_name.to_string(),
            units: spec.units.to_string(),
            valid_min: spec.valid_min,
            valid_max: spec.valid_max,
            dims: per_pass_dims.clone(),
            shape: per_pass_shape.clone(),
            data,
        });
    }

    // Surface masks come from the special codes stored in the SST map.
    let sst_idx = GMI_VARIABLES
        .iter()
        .position(|spec| spec.name == "sst")
        .unwrap_or(1);
    let masks: [(&str, &str, &[u8]); 3] = [
        ("land", "Is this land?", &[CODE_LAND]),
        ("ice", "Is this ice?", &[CODE_ICE]),
        (
            "nodata",
            "Is there no data?",
            &[CODE_RAIN_FLAG, CODE_BAD_DATA, CODE_NO_OBS],
        ),
    ];
    for (name, long_name, codes) in masks {
        let mut data = Vec::with_capacity(layout.passes * map_len);
        for pass in 0..layout.passes {
            let start = layout.map_offset(pass, sst_idx);
            data.extend(
                payload[start..start + map_len]
                    .iter()
                    .map(|byte| if codes.contains(byte) { 1.0 } else { 0.0 }),
            );
        }
        variables.push(GmiVariable {
            name: name.to_string(),
            long_name: long_name.to_string(),
            units: "1".to_string(),
            valid_min: 0.0,
            valid_max: 1.0,
            dims: per_pass_dims.clone(),
            shape: per_pass_shape.clone(),
            data,
        });
    }

    Ok(GmiDaily {
        path,
        layout,
        missing,
        variables,
    })
}
