//! Product loading.

use std::path::Path;

use gmi_reader::{read_gmi_daily, GmiDaily, GmiResult};
use netcdf_parser::{load_day_night, L3mGrid, NetCdfResult};
use tracing::info;

/// Read a GMI daily bytemap.
pub fn load_gmi(path: &Path, missing: f32) -> GmiResult<GmiDaily> {
    let daily = read_gmi_daily(path, missing)?;
    info!(
        path = %path.display(),
        variables = daily.variables().len(),
        passes = daily.layout.passes,
        nlat = daily.layout.nlat,
        nlon = daily.layout.nlon,
        "Loaded GMI daily file"
    );
    Ok(daily)
}

/// Read the MODIS day and night-only L3m files for `variable`.
pub fn load_modis(day: &Path, night: &Path, variable: &str) -> NetCdfResult<(L3mGrid, L3mGrid)> {
    let (day_grid, night_grid) = load_day_night(day, night, variable)?;
    info!(
        day = %day.display(),
        night = %night.display(),
        variable,
        rows = day_grid.lats.len(),
        cols = day_grid.lons.len(),
        declared_range = ?day_grid.declared_range,
        "Loaded MODIS day/night pair"
    );
    Ok((day_grid, night_grid))
}
