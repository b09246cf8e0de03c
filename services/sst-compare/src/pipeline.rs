//! Ingest, normalize, align, then render and save.
//!
//! All processing and rendering completes in memory before the first file is
//! written.

use std::path::PathBuf;

use anyhow::{Context, Result};
use gmi_reader::GmiDaily;
use grid_processor::{interpolate_like, normalize_gmi, normalize_modis};
use netcdf_parser::{summarize, L3mGrid};
use renderer::{plot_difference, plot_histogram, plot_profile, plot_side_by_side, Figure};
use sst_common::{GriddedField, ValidRange};
use tracing::{info, info_span, warn};

use crate::config::Config;
use crate::diagnostics::{valid_range_listing, variable_listing};
use crate::ingest::{load_gmi, load_modis};

const GMI_SST: &str = "sst";

/// Normalized fields ready for plotting.
#[derive(Debug, Clone)]
pub struct Products {
    /// GMI pass mean on [-180, 180) longitudes.
    pub gmi: GriddedField,
    /// MODIS day/night mean on its native grid.
    pub modis: GriddedField,
    /// MODIS resampled onto the GMI grid.
    pub modis_on_gmi: GriddedField,
}

/// The rendered figures, in output order.
pub struct Figures {
    pub side_by_side: Figure,
    pub difference: Figure,
    pub histogram: Figure,
    pub profile: Figure,
}

/// Masking ranges for GMI and MODIS.
pub fn mask_ranges(config: &Config, gmi: &GmiDaily, modis_day: &L3mGrid) -> (ValidRange, ValidRange) {
    if !config.use_declared_ranges {
        return (config.gmi.valid_range, config.modis.valid_range);
    }

    let gmi_range = gmi
        .variable(GMI_SST)
        .map(|v| ValidRange::new(v.valid_min, v.valid_max))
        .filter(ValidRange::is_valid)
        .unwrap_or_else(|| {
            warn!("GMI file declares no usable sst range; using configured range");
            config.gmi.valid_range
        });
    let modis_range = modis_day
        .declared_range
        .filter(ValidRange::is_valid)
        .unwrap_or_else(|| {
            warn!(
                path = %modis_day.path.display(),
                "MODIS file declares no usable valid range; using configured range"
            );
            config.modis.valid_range
        });
    (gmi_range, modis_range)
}

/// Load both products and bring them onto comparable grids.
pub fn process(config: &Config) -> Result<Products> {
    let gmi_path = config.gmi_path()?;
    let (day_path, night_path) = config.modis_paths()?;

    let daily = {
        let _span = info_span!("ingest_gmi").entered();
        load_gmi(&gmi_path, config.gmi.missing)
            .with_context(|| format!("Failed to load GMI file {}", gmi_path.display()))?
    };
    print!("{}", variable_listing(&daily));
    print!("{}", valid_range_listing(&daily));

    let (day, night) = {
        let _span = info_span!("ingest_modis").entered();
        load_modis(&day_path, &night_path, &config.modis.variable)
            .context("Failed to load MODIS day/night files")?
    };
    let summary = summarize(&night_path)
        .with_context(|| format!("Failed to summarize {}", night_path.display()))?;
    println!("{summary}");

    let (gmi_range, modis_range) = mask_ranges(config, &daily, &day);

    let _span = info_span!("normalize").entered();
    let raw = daily.composite(GMI_SST)?;
    let gmi = normalize_gmi(raw, gmi_range).context("Failed to normalize GMI")?;
    info!(
        rows = gmi.height(),
        cols = gmi.width(),
        valid = gmi.valid_count(),
        min = gmi_range.min,
        max = gmi_range.max,
        "Normalized GMI"
    );

    let modis = normalize_modis(
        &day.data,
        &night.data,
        day.lats.clone(),
        day.lons.clone(),
        modis_range,
    )
    .context("Failed to normalize MODIS")?;
    info!(
        rows = modis.height(),
        cols = modis.width(),
        valid = modis.valid_count(),
        min = modis_range.min,
        max = modis_range.max,
        "Normalized MODIS"
    );
    drop(_span);

    let _span = info_span!("align", method = %config.align.method).entered();
    let modis_on_gmi =
        interpolate_like(&modis, &gmi, config.align.method).context("Failed to resample MODIS")?;
    info!(
        rows = modis_on_gmi.height(),
        cols = modis_on_gmi.width(),
        valid = modis_on_gmi.valid_count(),
        "Resampled MODIS onto GMI grid"
    );

    Ok(Products {
        gmi,
        modis,
        modis_on_gmi,
    })
}

/// Render all four figures.
pub fn render(config: &Config, products: &Products) -> Result<Figures> {
    let _span = info_span!("render", dpi = config.plots.dpi).entered();
    let style = config.style();
    let plots = &config.plots;
    let [hist_lo, hist_hi] = plots.hist_xlim;

    Ok(Figures {
        side_by_side: plot_side_by_side(&products.gmi, &products.modis_on_gmi, plots.map_range, &style)
            .context("Failed to render side-by-side maps")?,
        difference: plot_difference(&products.gmi, &products.modis_on_gmi, plots.diff_range, &style)
            .context("Failed to render difference map")?,
        histogram: plot_histogram(
            &products.gmi,
            &products.modis_on_gmi,
            plots.hist_bins,
            (hist_lo, hist_hi),
            &style,
        )
        .context("Failed to render difference histogram")?,
        profile: plot_profile(&products.gmi, &products.modis, plots.profile_lat, &style)
            .context("Failed to render profile")?,
    })
}

/// Write the figures; returns the paths written.
pub fn save(config: &Config, figures: &Figures) -> Result<Vec<PathBuf>> {
    let files = &config.plots.files;
    let outputs = [
        (&figures.side_by_side, &files.side_by_side),
        (&figures.difference, &files.difference),
        (&figures.histogram, &files.histogram),
        (&figures.profile, &files.profile),
    ];

    let mut written = Vec::with_capacity(outputs.len());
    for (figure, name) in outputs {
        let path = config.output_path(name)?;
        figure
            .save(&path, config.plots.pad_inches)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote figure");
        written.push(path);
    }
    Ok(written)
}

/// Full comparison run.
pub fn run(config: &Config) -> Result<Vec<PathBuf>> {
    info!(date = %config.date, "Starting GMI / MODIS SST comparison");
    let products = process(config)?;
    let figures = render(config, &products)?;
    let written = save(config, &figures)?;
    info!(figures = written.len(), "Comparison complete");
    Ok(written)
}
