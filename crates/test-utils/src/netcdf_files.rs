//! Synthetic MODIS L3m NetCDF files.
//!
//! Written with the same packing as the real product: `sst` stored as short
//! with `scale_factor` 0.005, `add_offset` 0 and `_FillValue` -32767.

use std::path::{Path, PathBuf};

pub const L3M_SCALE_FACTOR: f32 = 0.005;
pub const L3M_FILL_VALUE: i16 = -32767;

/// Pack a physical value the way the L3m product does; NaN becomes fill.
pub fn pack_l3m(value: f32) -> i16 {
    if value.is_nan() {
        L3M_FILL_VALUE
    } else {
        (value / L3M_SCALE_FACTOR)
            .round()
            .clamp(i16::MIN as f32 + 1.0, i16::MAX as f32) as i16
    }
}

/// Writes an L3m-style file with `lat`/`lon` axes and a packed `sst`
/// variable (`values` row-major over `lats` x `lons`).
pub fn write_l3m_file(dir: &Path, name: &str, lats: &[f64], lons: &[f64], values: &[f32]) -> PathBuf {
    assert_eq!(values.len(), lats.len() * lons.len(), "sst shape");
    let path = dir.join(name);
    let mut file = netcdf::create(&path).expect("create NetCDF test file");

    file.add_dimension("lat", lats.len()).expect("lat dimension");
    file.add_dimension("lon", lons.len()).expect("lon dimension");
    file.add_attribute("title", "MODIS Aqua Level-3 Mapped Sea Surface Temperature")
        .expect("title attribute");

    let lats32: Vec<f32> = lats.iter().map(|&v| v as f32).collect();
    let lons32: Vec<f32> = lons.iter().map(|&v| v as f32).collect();
    {
        let mut lat = file.add_variable::<f32>("lat", &["lat"]).expect("lat variable");
        lat.put_attribute("long_name", "Latitude").expect("lat long_name");
        lat.put_attribute("units", "degrees_north").expect("lat units");
        lat.put_values(&lats32, ..).expect("lat values");
    }
    {
        let mut lon = file.add_variable::<f32>("lon", &["lon"]).expect("lon variable");
        lon.put_attribute("long_name", "Longitude").expect("lon long_name");
        lon.put_attribute("units", "degrees_east").expect("lon units");
        lon.put_values(&lons32, ..).expect("lon values");
    }
    {
        let packed: Vec<i16> = values.iter().map(|&v| pack_l3m(v)).collect();
        let mut sst = file.add_variable::<i16>("sst", &["lat", "lon"]).expect("sst variable");
        sst.set_fill_value(L3M_FILL_VALUE).expect("sst fill value");
        sst.put_attribute("long_name", "Sea Surface Temperature").expect("sst long_name");
        sst.put_attribute("units", "degree_C").expect("sst units");
        sst.put_attribute("scale_factor", L3M_SCALE_FACTOR).expect("sst scale_factor");
        sst.put_attribute("add_offset", 0.0f32).expect("sst add_offset");
        sst.put_attribute("valid_min", -1000i16).expect("sst valid_min");
        sst.put_attribute("valid_max", 10000i16).expect("sst valid_max");
        sst.put_values(&packed, ..).expect("sst values");
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_l3m() {
        assert_eq!(pack_l3m(10.0), 2000);
        assert_eq!(pack_l3m(-2.0), -400);
        assert_eq!(pack_l3m(f32::NAN), L3M_FILL_VALUE);
    }
}
