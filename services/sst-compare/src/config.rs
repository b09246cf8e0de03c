//! Run configuration for the GMI / MODIS comparison.
//!
//! Loaded from YAML; every field has a default so an empty file (or no file
//! at all) reproduces the 2016-10-01 reference comparison. Path templates are
//! strftime patterns rendered against `date`, then `~` and `$VAR` expanded.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use grid_processor::InterpolationMethod;
use renderer::FigureStyle;
use serde::{Deserialize, Serialize};
use sst_common::ValidRange;

// ============================================================================
// Top level
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Day being compared; drives every path template.
    pub date: NaiveDate,
    pub gmi: GmiConfig,
    pub modis: ModisConfig,
    /// Mask with the valid range each file declares instead of the configured
    /// thresholds, falling back to the configured ones when a file has none.
    pub use_declared_ranges: bool,
    pub align: AlignConfig,
    pub plots: PlotsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date: NaiveDate::from_ymd_opt(2016, 10, 1).unwrap_or_default(),
            gmi: GmiConfig::default(),
            modis: ModisConfig::default(),
            use_declared_ranges: false,
            align: AlignConfig::default(),
            plots: PlotsConfig::default(),
        }
    }
}

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GmiConfig {
    pub path_template: String,
    /// Value the reader substitutes for land, ice and no-data codes.
    pub missing: f32,
    pub valid_range: ValidRange,
}

impl Default for GmiConfig {
    fn default() -> Self {
        Self {
            path_template: "data/gmi/f35_%Y%m%dv8.2.gz".to_string(),
            missing: -999.0,
            valid_range: ValidRange::GMI_SST,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModisConfig {
    pub day_template: String,
    pub night_template: String,
    pub variable: String,
    pub valid_range: ValidRange,
}

impl Default for ModisConfig {
    fn default() -> Self {
        Self {
            day_template: "data/modis/A%Y%j.L3m_DAY_SST_sst_4km.nc".to_string(),
            night_template: "data/modis/A%Y%j.L3m_DAY_NSST_sst_4km.nc".to_string(),
            variable: "sst".to_string(),
            valid_range: ValidRange::MODIS_SST,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    pub method: InterpolationMethod,
}

// ============================================================================
// Plots
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotsConfig {
    pub output_dir: PathBuf,
    pub dpi: u32,
    pub pad_inches: f32,
    /// Colour limits of the side-by-side maps.
    pub map_range: ValidRange,
    /// Colour limits of the difference map.
    pub diff_range: ValidRange,
    pub hist_bins: usize,
    pub hist_xlim: [f64; 2],
    /// Latitude of the zonal profile; the nearest row of each grid is used.
    pub profile_lat: f64,
    pub files: PlotFiles,
}

impl Default for PlotsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("plots"),
            dpi: 300,
            pad_inches: 0.1,
            map_range: ValidRange::new(-3.0, 45.0),
            diff_range: ValidRange::new(-3.0, 8.0),
            hist_bins: 50,
            hist_xlim: [-8.0, 8.0],
            profile_lat: 0.0,
            files: PlotFiles::default(),
        }
    }
}

/// Output file names, relative to `output_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotFiles {
    pub side_by_side: String,
    pub difference: String,
    pub histogram: String,
    pub profile: String,
}

impl Default for PlotFiles {
    fn default() -> Self {
        Self {
            side_by_side: "sst_gmi_modis.png".to_string(),
            difference: "sst_diff_gmi_modis.png".to_string(),
            histogram: "hist_gmi_modis.png".to_string(),
            profile: "profile_sst.png".to_string(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

impl Config {
    /// Read, parse and validate a YAML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config from {:?}", path.as_ref()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to load config from {:?}", path.as_ref()))
    }

    /// Parse and validate YAML text. Empty text yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content).context("Failed to parse config YAML")?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, range) in [
            ("gmi.valid_range", self.gmi.valid_range),
            ("modis.valid_range", self.modis.valid_range),
            ("plots.map_range", self.plots.map_range),
            ("plots.diff_range", self.plots.diff_range),
        ] {
            anyhow::ensure!(
                range.is_valid(),
                "{} must be finite with min < max, got [{}, {}]",
                name,
                range.min,
                range.max
            );
        }

        let [lo, hi] = self.plots.hist_xlim;
        anyhow::ensure!(
            lo.is_finite() && hi.is_finite() && lo < hi,
            "plots.hist_xlim must be finite with min < max, got [{}, {}]",
            lo,
            hi
        );
        anyhow::ensure!(self.plots.hist_bins > 0, "plots.hist_bins must be greater than 0");
        anyhow::ensure!(self.plots.dpi > 0, "plots.dpi must be greater than 0");
        anyhow::ensure!(
            self.plots.pad_inches.is_finite() && self.plots.pad_inches >= 0.0,
            "plots.pad_inches must be a non-negative number"
        );
        anyhow::ensure!(
            (-90.0..=90.0).contains(&self.plots.profile_lat),
            "plots.profile_lat must lie in [-90, 90], got {}",
            self.plots.profile_lat
        );
        anyhow::ensure!(!self.modis.variable.is_empty(), "modis.variable cannot be empty");
        for (name, template) in [
            ("gmi.path_template", &self.gmi.path_template),
            ("modis.day_template", &self.modis.day_template),
            ("modis.night_template", &self.modis.night_template),
        ] {
            anyhow::ensure!(!template.is_empty(), "{} cannot be empty", name);
        }
        Ok(())
    }

    pub fn gmi_path(&self) -> Result<PathBuf> {
        render_path(&self.gmi.path_template, self.date)
    }

    /// Day and night-only MODIS paths.
    pub fn modis_paths(&self) -> Result<(PathBuf, PathBuf)> {
        Ok((
            render_path(&self.modis.day_template, self.date)?,
            render_path(&self.modis.night_template, self.date)?,
        ))
    }

    pub fn output_path(&self, file_name: &str) -> Result<PathBuf> {
        let dir = self.plots.output_dir.to_string_lossy();
        let dir = shellexpand::full(&dir)
            .with_context(|| format!("Failed to expand output directory {:?}", dir))?;
        Ok(PathBuf::from(dir.as_ref()).join(file_name))
    }

    pub fn style(&self) -> FigureStyle {
        FigureStyle {
            dpi: self.plots.dpi,
            pad_inches: self.plots.pad_inches,
        }
    }
}

/// Render a strftime template for `date`, then expand `~` and `$VAR`.
pub fn render_path(template: &str, date: NaiveDate) -> Result<PathBuf> {
    let mut rendered = String::with_capacity(template.len() + 8);
    write!(rendered, "{}", date.format(template))
        .map_err(|_| anyhow::anyhow!("Invalid date pattern in path template {:?}", template))?;
    let expanded = shellexpand::full(&rendered)
        .with_context(|| format!("Failed to expand path {:?}", rendered))?;
    Ok(PathBuf::from(expanded.as_ref()))
}
