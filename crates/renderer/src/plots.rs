//! The four comparison figures.
//!
//! Each function renders into an in-memory [`Figure`]; nothing touches the
//! filesystem until the caller saves it, so a failure in any figure leaves no
//! partial output behind.

use grid_processor::{difference, histogram, profile_at_lat, Profile};
use sst_common::{FieldMetadata, GriddedField, ValidRange};
use tracing::{info, warn};

use crate::error::RenderResult;
use crate::figure::{mesh_limits, Axes, Colorbar, Figure, FigureStyle, Legend, LegendCorner, PixelRect};
use crate::gradient::series_color;

/// Size of the two-panel map figure, in inches.
pub const SIDE_BY_SIDE_SIZE: (f32, f32) = (12.0, 4.0);
/// Size of the single-panel figures, in inches.
pub const SINGLE_SIZE: (f32, f32) = (6.0, 4.0);

pub const LON_LABEL: &str = "longitude [degrees_east]";
pub const LAT_LABEL: &str = "latitude [degrees_north]";
pub const FREQUENCY_LABEL: &str = "Frequency";

const PROFILE_LINE_WIDTH_PT: f32 = 0.8;
const AUTOSCALE_MARGIN: f64 = 0.05;

/// Metadata of the GMI minus MODIS field.
pub fn difference_metadata() -> FieldMetadata {
    FieldMetadata::new("°C", "SST GMI - MODIS")
}

fn map_panel(
    fig: &mut Figure,
    panel: PixelRect,
    field: &GriddedField,
    limits: ValidRange,
    label: &str,
) -> RenderResult<()> {
    let (axes_rect, colorbar) = Colorbar::beside(panel, (limits.min, limits.max));
    let (xlim, ylim) = mesh_limits(field);
    let axes = Axes::new(axes_rect, xlim, ylim)?;
    axes.draw_mesh(fig, field, (limits.min, limits.max));
    axes.decorate(fig, LON_LABEL, LAT_LABEL);
    colorbar.draw(fig, label);
    Ok(())
}

/// GMI and resampled MODIS maps next to each other on a shared colour scale.
pub fn plot_side_by_side(
    gmi: &GriddedField,
    modis: &GriddedField,
    limits: ValidRange,
    style: &FigureStyle,
) -> RenderResult<Figure> {
    let mut fig = Figure::new(SIDE_BY_SIDE_SIZE.0, SIDE_BY_SIDE_SIZE.1, style.dpi)?;
    let panels = fig.subplots(2);
    for (panel, field) in panels.into_iter().zip([gmi, modis]) {
        map_panel(&mut fig, panel, field, limits, &field.metadata.label())?;
    }
    info!(
        gmi_valid = gmi.valid_count(),
        modis_valid = modis.valid_count(),
        min = limits.min,
        max = limits.max,
        "Rendered side-by-side maps"
    );
    Ok(fig)
}

/// Map of GMI minus resampled MODIS.
pub fn plot_difference(
    gmi: &GriddedField,
    modis: &GriddedField,
    limits: ValidRange,
    style: &FigureStyle,
) -> RenderResult<Figure> {
    let diff = difference(gmi, modis, difference_metadata())?;
    plot_difference_field(&diff, limits, style)
}

/// Map of an already computed difference field.
pub fn plot_difference_field(
    diff: &GriddedField,
    limits: ValidRange,
    style: &FigureStyle,
) -> RenderResult<Figure> {
    let mut fig = Figure::new(SINGLE_SIZE.0, SINGLE_SIZE.1, style.dpi)?;
    let panel = fig.subplots(1)[0];
    map_panel(&mut fig, panel, diff, limits, &diff.metadata.label())?;
    info!(
        valid = diff.valid_count(),
        range = ?diff.finite_range(),
        "Rendered difference map"
    );
    Ok(fig)
}

/// Histogram of GMI minus resampled MODIS.
pub fn plot_histogram(
    gmi: &GriddedField,
    modis: &GriddedField,
    bins: usize,
    xlim: (f64, f64),
    style: &FigureStyle,
) -> RenderResult<Figure> {
    let diff = difference(gmi, modis, difference_metadata())?;
    plot_histogram_field(&diff, bins, xlim, style)
}

/// Histogram of an already computed difference field.
///
/// Bins span the finite min..max of the data; the x axis is fixed to `xlim`
/// and bars outside it are clipped.
pub fn plot_histogram_field(
    diff: &GriddedField,
    bins: usize,
    xlim: (f64, f64),
    style: &FigureStyle,
) -> RenderResult<Figure> {
    let mut fig = Figure::new(SINGLE_SIZE.0, SINGLE_SIZE.1, style.dpi)?;
    let panel = fig.subplots(1)[0];

    let hist = histogram(diff.data(), bins);
    let top = match &hist {
        Some(h) if h.max_count() > 0 => h.max_count() as f64 * (1.0 + AUTOSCALE_MARGIN),
        _ => {
            warn!("Difference field has no finite values; histogram is empty");
            1.0
        }
    };

    let axes = Axes::new(panel, xlim, (0.0, top))?;
    if let Some(h) = &hist {
        axes.bars(&mut fig, &h.edges, &h.counts, series_color(0));
        info!(
            bins = h.bins(),
            samples = h.total(),
            first_edge = h.edges.first().copied().unwrap_or(f64::NAN),
            last_edge = h.edges.last().copied().unwrap_or(f64::NAN),
            "Rendered difference histogram"
        );
    }
    axes.decorate(&mut fig, &diff.metadata.label(), FREQUENCY_LABEL);
    Ok(fig)
}

/// Data limits with a small margin; `None` when nothing is finite.
fn autoscale(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min > max {
        return None;
    }
    let span = max - min;
    let margin = if span > 0.0 {
        span * AUTOSCALE_MARGIN
    } else {
        (min.abs() * AUTOSCALE_MARGIN).max(0.5)
    };
    Some((min - margin, max + margin))
}

/// Points of `profile` inside `rect` once mapped through `axes`.
fn points_inside(axes: &Axes, profile: &Profile, rect: PixelRect) -> usize {
    profile
        .lons
        .iter()
        .zip(&profile.values)
        .filter(|(_, v)| v.is_finite())
        .filter(|&(&x, &y)| {
            let px = axes.x_to_px(x).round() as i32;
            let py = axes.y_to_px(y as f64).round() as i32;
            rect.contains(px, py)
        })
        .count()
}

/// Values along the row nearest `lat`, each field on its own grid.
pub fn plot_profile(
    gmi: &GriddedField,
    modis: &GriddedField,
    lat: f64,
    style: &FigureStyle,
) -> RenderResult<Figure> {
    let mut fig = Figure::new(SINGLE_SIZE.0, SINGLE_SIZE.1, style.dpi)?;
    let panel = fig.subplots(1)[0];

    let mut series: Vec<(&str, Profile)> = Vec::with_capacity(2);
    for (name, field) in [("GMI", gmi), ("MODIS", modis)] {
        match profile_at_lat(field, lat) {
            Some(profile) => {
                if profile.valid_count() == 0 {
                    warn!(product = name, lat = profile.lat, "Profile row has no valid values");
                }
                info!(
                    product = name,
                    requested_lat = lat,
                    row_lat = profile.lat,
                    points = profile.lons.len(),
                    valid = profile.valid_count(),
                    "Extracted profile"
                );
                series.push((name, profile));
            }
            None => warn!(product = name, lat, "No latitude row for profile"),
        }
    }

    let finite_points = || {
        series.iter().flat_map(|(_, p)| {
            p.lons
                .iter()
                .zip(&p.values)
                .filter(|(_, v)| v.is_finite())
                .map(|(&x, &y)| (x, y as f64))
        })
    };
    let xlim = autoscale(finite_points().map(|(x, _)| x))
        .or_else(|| autoscale(series.iter().flat_map(|(_, p)| p.lons.iter().copied())))
        .unwrap_or((-180.0, 180.0));
    let ylim = autoscale(finite_points().map(|(_, y)| y)).unwrap_or((0.0, 1.0));

    let axes = Axes::new(panel, xlim, ylim)?;
    for (idx, (_, profile)) in series.iter().enumerate() {
        axes.plot_line(
            &mut fig,
            &profile.lons,
            &profile.values,
            series_color(idx),
            PROFILE_LINE_WIDTH_PT,
        );
    }
    axes.decorate(&mut fig, LON_LABEL, &gmi.metadata.label());

    let legend = Legend {
        entries: series
            .iter()
            .enumerate()
            .map(|(idx, (name, _))| (name.to_string(), series_color(idx)))
            .collect(),
        ncol: 2,
        line_width_pt: PROFILE_LINE_WIDTH_PT,
    };
    if !legend.entries.is_empty() {
        let corner = LegendCorner::ALL
            .into_iter()
            .min_by_key(|&corner| {
                let rect = legend.placement(&fig, &axes, corner);
                series
                    .iter()
                    .map(|(_, p)| points_inside(&axes, p, rect))
                    .sum::<usize>()
            })
            .unwrap_or(LegendCorner::UpperRight);
        legend.draw(&mut fig, &axes, corner);
    }

    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autoscale() {
        assert_eq!(autoscale([0.0, 10.0].into_iter()), Some((-0.5, 10.5)));
        assert_eq!(autoscale([f64::NAN].into_iter()), None);
        assert_eq!(autoscale([2.0].into_iter()), Some((1.5, 2.5)));
    }

    #[test]
    fn test_difference_label() {
        assert_eq!(difference_metadata().label(), "SST GMI - MODIS [°C]");
    }
}
