//! Figure canvas, axes and their decorations.
//!
//! Sizes are given in inches and points and converted to pixels through the
//! figure DPI, so a 6 x 4 in figure at 300 DPI is 1800 x 1200 px before the
//! tight crop.

use std::path::Path;

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use sst_common::GriddedField;
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::gradient::{jet_color, render_grid, value_color, Color};
use crate::png::create_png_auto;
use crate::text::{HAlign, TextRenderer, VAlign};
use crate::ticks::labeled_ticks;

pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const FOREGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Font size of tick labels, axis labels and legends, in points.
pub const FONT_SIZE_PT: f32 = 10.0;
const TICK_LENGTH_PT: f32 = 3.5;
const TICK_PAD_PT: f32 = 3.5;
const LABEL_PAD_PT: f32 = 4.0;
const SPINE_WIDTH_PT: f32 = 0.8;
const TARGET_TICKS: usize = 6;

// Subplot margins as fractions of the figure.
const SUBPLOT_LEFT: f32 = 0.125;
const SUBPLOT_RIGHT: f32 = 0.9;
const SUBPLOT_BOTTOM: f32 = 0.11;
const SUBPLOT_TOP: f32 = 0.88;
const SUBPLOT_WSPACE: f32 = 0.2;

// Colorbar slot taken from the parent axes, as fractions of its width.
const COLORBAR_FRACTION: f32 = 0.15;
const COLORBAR_PAD: f32 = 0.05;
const COLORBAR_ASPECT: f32 = 20.0;

/// Output resolution and crop padding shared by all figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureStyle {
    pub dpi: u32,
    pub pad_inches: f32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            dpi: 300,
            pad_inches: 0.1,
        }
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width as i32 / 2, self.y + self.height as i32 / 2)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    fn to_rect(self) -> Option<Rect> {
        (self.width > 0 && self.height > 0).then(|| Rect::at(self.x, self.y).of_size(self.width, self.height))
    }
}

/// A raster figure with a white background.
pub struct Figure {
    image: RgbaImage,
    dpi: u32,
    text: TextRenderer,
}

impl Figure {
    pub fn new(width_in: f32, height_in: f32, dpi: u32) -> RenderResult<Self> {
        let width = (width_in * dpi as f32).round() as u32;
        let height = (height_in * dpi as f32).round() as u32;
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSize { width, height });
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, BACKGROUND),
            dpi,
            text: TextRenderer::new()?,
        })
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Points to pixels.
    pub fn points(&self, pt: f32) -> f32 {
        pt * self.dpi as f32 / 72.0
    }

    pub fn font_px(&self) -> f32 {
        self.points(FONT_SIZE_PT)
    }

    fn stroke_px(&self, pt: f32) -> u32 {
        self.points(pt).round().max(1.0) as u32
    }

    /// Axes rectangles for `ncols` subplots in one row.
    pub fn subplots(&self, ncols: usize) -> Vec<PixelRect> {
        let ncols = ncols.max(1);
        let fig_w = self.width() as f32;
        let fig_h = self.height() as f32;

        let total_w = (SUBPLOT_RIGHT - SUBPLOT_LEFT) * fig_w;
        let axes_w = total_w / (ncols as f32 + SUBPLOT_WSPACE * (ncols as f32 - 1.0));
        let gap = SUBPLOT_WSPACE * axes_w;
        let y = ((1.0 - SUBPLOT_TOP) * fig_h).round() as i32;
        let h = ((SUBPLOT_TOP - SUBPLOT_BOTTOM) * fig_h).round() as u32;

        (0..ncols)
            .map(|i| {
                let x = SUBPLOT_LEFT * fig_w + i as f32 * (axes_w + gap);
                PixelRect::new(x.round() as i32, y, axes_w.round() as u32, h)
            })
            .collect()
    }

    pub fn measure(&self, text: &str) -> (i32, i32) {
        self.text.measure(text, self.font_px())
    }

    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, align: (HAlign, VAlign)) {
        let px = self.font_px();
        self.text.draw(&mut self.image, text, x, y, px, FOREGROUND, align);
    }

    pub fn draw_text_vertical(&mut self, text: &str, x: i32, y: i32, align: (HAlign, VAlign)) {
        let px = self.font_px();
        self.text
            .draw_vertical(&mut self.image, text, x, y, px, FOREGROUND, align);
    }

    pub fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        if let Some(rect) = rect.to_rect() {
            draw_filled_rect_mut(&mut self.image, rect, color.to_rgba());
        }
    }

    /// Straight segment of `width_px` thickness.
    pub fn draw_segment(&mut self, from: (f32, f32), to: (f32, f32), color: Color, width_px: u32) {
        let half = width_px as f32 / 2.0;
        let steps = width_px.max(1);
        for k in 0..steps {
            let offset = k as f32 - half + 0.5;
            draw_line_segment_mut(
                &mut self.image,
                (from.0, from.1 + offset),
                (to.0, to.1 + offset),
                color.to_rgba(),
            );
            draw_line_segment_mut(
                &mut self.image,
                (from.0 + offset, from.1),
                (to.0 + offset, to.1),
                color.to_rgba(),
            );
        }
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.image.put_pixel(x as u32, y as u32, color.to_rgba());
        }
    }

    /// Bounding box of all non-background pixels.
    pub fn content_bbox(&self) -> Option<PixelRect> {
        let (mut min_x, mut min_y) = (u32::MAX, u32::MAX);
        let (mut max_x, mut max_y) = (0u32, 0u32);
        for (x, y, pixel) in self.image.enumerate_pixels() {
            if *pixel != BACKGROUND {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
        (min_x <= max_x && min_y <= max_y).then(|| {
            PixelRect::new(min_x as i32, min_y as i32, max_x - min_x + 1, max_y - min_y + 1)
        })
    }

    /// Crop to the content and pad by `pad_inches` on every side.
    ///
    /// A blank figure is returned unchanged.
    pub fn tight(&self, pad_inches: f32) -> RgbaImage {
        let Some(bbox) = self.content_bbox() else {
            return self.image.clone();
        };
        let pad = (pad_inches.max(0.0) * self.dpi as f32).round() as u32;
        let mut out = RgbaImage::from_pixel(bbox.width + 2 * pad, bbox.height + 2 * pad, BACKGROUND);
        for y in 0..bbox.height {
            for x in 0..bbox.width {
                let pixel = *self.image.get_pixel(bbox.x as u32 + x, bbox.y as u32 + y);
                out.put_pixel(x + pad, y + pad, pixel);
            }
        }
        out
    }

    pub fn encode_png(&self, pad_inches: f32) -> RenderResult<Vec<u8>> {
        let cropped = self.tight(pad_inches);
        create_png_auto(
            cropped.as_raw(),
            cropped.width() as usize,
            cropped.height() as usize,
            self.dpi,
        )
    }

    /// Write the tight-cropped figure as PNG, creating parent directories.
    pub fn save(&self, path: &Path, pad_inches: f32) -> RenderResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| RenderError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let bytes = self.encode_png(pad_inches)?;
        std::fs::write(path, &bytes).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), dpi = self.dpi, "Saved figure");
        Ok(())
    }
}

/// Boundaries of the cells centred on `coords`.
pub fn cell_edges(coords: &[f64]) -> Vec<f64> {
    match coords.len() {
        0 => Vec::new(),
        1 => vec![coords[0] - 0.5, coords[0] + 0.5],
        n => {
            let mut edges = Vec::with_capacity(n + 1);
            edges.push(coords[0] - (coords[1] - coords[0]) / 2.0);
            edges.extend(coords.windows(2).map(|w| (w[0] + w[1]) / 2.0));
            edges.push(coords[n - 1] + (coords[n - 1] - coords[n - 2]) / 2.0);
            edges
        }
    }
}

/// Index of the cell containing `x`, for ascending or descending edges.
pub fn cell_index(edges: &[f64], x: f64) -> Option<usize> {
    if edges.len() < 2 || x.is_nan() {
        return None;
    }
    let n = edges.len() - 1;
    let ascending = edges[n] > edges[0];
    let (lo, hi) = if ascending { (edges[0], edges[n]) } else { (edges[n], edges[0]) };
    if x < lo || x > hi {
        return None;
    }
    let after = if ascending {
        edges.partition_point(|&e| e <= x)
    } else {
        edges.partition_point(|&e| e >= x)
    };
    Some(after.saturating_sub(1).min(n - 1))
}

fn extent(edges: &[f64]) -> (f64, f64) {
    let first = edges.first().copied().unwrap_or(0.0);
    let last = edges.last().copied().unwrap_or(1.0);
    (first.min(last), first.max(last))
}

/// Data limits that show every cell of `field` in full.
pub fn mesh_limits(field: &GriddedField) -> ((f64, f64), (f64, f64)) {
    (extent(&cell_edges(field.lons())), extent(&cell_edges(field.lats())))
}

/// Data-to-pixel mapping for one plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    pub rect: PixelRect,
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
}

impl Axes {
    pub fn new(rect: PixelRect, xlim: (f64, f64), ylim: (f64, f64)) -> RenderResult<Self> {
        for (min, max) in [xlim, ylim] {
            if !(min.is_finite() && max.is_finite() && max > min) {
                return Err(RenderError::InvalidLimits { min, max });
            }
        }
        Ok(Self { rect, xlim, ylim })
    }

    pub fn x_to_px(&self, x: f64) -> f32 {
        let t = (x - self.xlim.0) / (self.xlim.1 - self.xlim.0);
        self.rect.x as f32 + t as f32 * self.rect.width as f32
    }

    pub fn y_to_px(&self, y: f64) -> f32 {
        let t = (y - self.ylim.0) / (self.ylim.1 - self.ylim.0);
        self.rect.bottom() as f32 - t as f32 * self.rect.height as f32
    }

    /// Data x at the centre of pixel column `px`.
    pub fn px_to_x(&self, px: i32) -> f64 {
        let t = (px - self.rect.x) as f64 + 0.5;
        self.xlim.0 + t / self.rect.width as f64 * (self.xlim.1 - self.xlim.0)
    }

    /// Data y at the centre of pixel row `py`.
    pub fn py_to_y(&self, py: i32) -> f64 {
        let t = (py - self.rect.y) as f64 + 0.5;
        self.ylim.1 - t / self.rect.height as f64 * (self.ylim.1 - self.ylim.0)
    }

    /// Nearest-cell raster of `field` with the jet ramp over `limits`;
    /// NaN cells stay background.
    pub fn draw_mesh(&self, fig: &mut Figure, field: &GriddedField, limits: (f32, f32)) {
        let lon_edges = cell_edges(field.lons());
        let lat_edges = cell_edges(field.lats());

        let cols: Vec<Option<usize>> = (self.rect.x..self.rect.right())
            .map(|px| cell_index(&lon_edges, self.px_to_x(px)))
            .collect();
        let rows: Vec<Option<usize>> = (self.rect.y..self.rect.bottom())
            .map(|py| cell_index(&lat_edges, self.py_to_y(py)))
            .collect();

        let mut drawn = 0usize;
        for (dy, row) in rows.iter().enumerate() {
            let Some(row) = *row else { continue };
            for (dx, col) in cols.iter().enumerate() {
                let Some(col) = *col else { continue };
                let value = field.get(row, col).unwrap_or(f32::NAN);
                if let Some(color) = value_color(value, limits.0, limits.1) {
                    fig.put_pixel(self.rect.x + dx as i32, self.rect.y + dy as i32, color);
                    drawn += 1;
                }
            }
        }
        debug!(
            width = self.rect.width,
            height = self.rect.height,
            drawn,
            "Drew mesh"
        );
    }

    /// Polyline through the finite points; NaN breaks the line.
    pub fn plot_line(&self, fig: &mut Figure, xs: &[f64], ys: &[f32], color: Color, width_pt: f32) {
        let width_px = fig.stroke_px(width_pt);
        let mut prev: Option<(f32, f32)> = None;
        for (&x, &y) in xs.iter().zip(ys) {
            if !x.is_finite() || !y.is_finite() {
                prev = None;
                continue;
            }
            let point = (self.x_to_px(x), self.y_to_px(y as f64));
            match prev {
                Some(from) => fig.draw_segment(from, point, color, width_px),
                None => fig.draw_segment(point, point, color, width_px),
            }
            prev = Some(point);
        }
    }

    /// Histogram bars from `edges` (len `counts + 1`), clipped to the axes.
    pub fn bars(&self, fig: &mut Figure, edges: &[f64], counts: &[u64], color: Color) {
        let baseline = self.y_to_px(self.ylim.0.max(0.0)).round() as i32;
        for (pair, &count) in edges.windows(2).zip(counts) {
            if count == 0 {
                continue;
            }
            let left = (self.x_to_px(pair[0]).round() as i32).max(self.rect.x);
            let right = (self.x_to_px(pair[1]).round() as i32).min(self.rect.right());
            let top = (self.y_to_px(count as f64).round() as i32).max(self.rect.y);
            if right <= left || baseline <= top {
                continue;
            }
            fig.fill_rect(
                PixelRect::new(left, top, (right - left) as u32, (baseline - top) as u32),
                color,
            );
        }
    }

    pub fn draw_frame(&self, fig: &mut Figure) {
        draw_box(fig, self.rect);
    }

    /// Frame, ticks and axis labels.
    pub fn decorate(&self, fig: &mut Figure, xlabel: &str, ylabel: &str) {
        self.draw_frame(fig);

        let tick_len = fig.points(TICK_LENGTH_PT).round() as i32;
        let tick_pad = fig.points(TICK_PAD_PT).round() as i32;
        let label_pad = fig.points(LABEL_PAD_PT).round() as i32;
        let stroke = fig.stroke_px(SPINE_WIDTH_PT);
        let line_h = fig.measure("0").1;

        for (value, label) in labeled_ticks(self.xlim.0, self.xlim.1, TARGET_TICKS) {
            let px = self.x_to_px(value).round() as i32;
            fig.fill_rect(
                PixelRect::new(px - stroke as i32 / 2, self.rect.bottom(), stroke, tick_len as u32),
                Color::BLACK,
            );
            fig.draw_text(&label, px, self.rect.bottom() + tick_len + tick_pad, (HAlign::Center, VAlign::Top));
        }

        let mut widest = 0;
        for (value, label) in labeled_ticks(self.ylim.0, self.ylim.1, TARGET_TICKS) {
            let py = self.y_to_px(value).round() as i32;
            fig.fill_rect(
                PixelRect::new(self.rect.x - tick_len, py - stroke as i32 / 2, tick_len as u32, stroke),
                Color::BLACK,
            );
            widest = widest.max(fig.measure(&label).0);
            fig.draw_text(&label, self.rect.x - tick_len - tick_pad, py, (HAlign::Right, VAlign::Center));
        }

        let (cx, cy) = self.rect.center();
        fig.draw_text(
            xlabel,
            cx,
            self.rect.bottom() + tick_len + tick_pad + line_h + label_pad,
            (HAlign::Center, VAlign::Top),
        );
        fig.draw_text_vertical(
            ylabel,
            self.rect.x - tick_len - tick_pad - widest - label_pad,
            cy,
            (HAlign::Right, VAlign::Center),
        );
    }
}

fn draw_box(fig: &mut Figure, rect: PixelRect) {
    let t = fig.stroke_px(SPINE_WIDTH_PT);
    let half = t as i32 / 2;
    let (x, y, w, h) = (rect.x - half, rect.y - half, rect.width + t, rect.height + t);
    fig.fill_rect(PixelRect::new(x, y, w, t), Color::BLACK);
    fig.fill_rect(PixelRect::new(x, rect.bottom() - half, w, t), Color::BLACK);
    fig.fill_rect(PixelRect::new(x, y, t, h), Color::BLACK);
    fig.fill_rect(PixelRect::new(rect.right() - half, y, t, h), Color::BLACK);
}

/// Vertical jet colorbar next to a map panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colorbar {
    pub rect: PixelRect,
    pub limits: (f32, f32),
}

impl Colorbar {
    /// Split `panel` into a narrower axes area and a colorbar on its right.
    pub fn beside(panel: PixelRect, limits: (f32, f32)) -> (PixelRect, Colorbar) {
        let w = panel.width as f32;
        let axes_w = (w * (1.0 - COLORBAR_FRACTION - COLORBAR_PAD)).round() as u32;
        let bar_w = (panel.height as f32 / COLORBAR_ASPECT)
            .min(w * COLORBAR_FRACTION)
            .round()
            .max(1.0) as u32;
        let bar_x = panel.x + axes_w as i32 + (w * COLORBAR_PAD).round() as i32;

        let axes = PixelRect::new(panel.x, panel.y, axes_w, panel.height);
        let bar = Colorbar {
            rect: PixelRect::new(bar_x, panel.y, bar_w, panel.height),
            limits,
        };
        (axes, bar)
    }

    pub fn draw(&self, fig: &mut Figure, label: &str) {
        let (min, max) = self.limits;
        let height = self.rect.height as usize;
        let values: Vec<f32> = (0..height)
            .map(|i| max - (i as f32 + 0.5) / height as f32 * (max - min))
            .collect();
        let pixels = render_grid(&values, 1, height, min, max, jet_color);
        for (dy, rgba) in pixels.chunks_exact(4).enumerate() {
            fig.fill_rect(
                PixelRect::new(self.rect.x, self.rect.y + dy as i32, self.rect.width, 1),
                Color::new(rgba[0], rgba[1], rgba[2], rgba[3]),
            );
        }
        draw_box(fig, self.rect);

        let tick_len = fig.points(TICK_LENGTH_PT).round() as i32;
        let tick_pad = fig.points(TICK_PAD_PT).round() as i32;
        let label_pad = fig.points(LABEL_PAD_PT).round() as i32;
        let stroke = fig.stroke_px(SPINE_WIDTH_PT);
        let span = (max - min) as f64;

        let mut widest = 0;
        for (value, text) in labeled_ticks(min as f64, max as f64, TARGET_TICKS) {
            let t = (value - min as f64) / span;
            let py = (self.rect.bottom() as f64 - t * self.rect.height as f64).round() as i32;
            fig.fill_rect(
                PixelRect::new(self.rect.right(), py - stroke as i32 / 2, tick_len as u32, stroke),
                Color::BLACK,
            );
            widest = widest.max(fig.measure(&text).0);
            fig.draw_text(&text, self.rect.right() + tick_len + tick_pad, py, (HAlign::Left, VAlign::Center));
        }

        fig.draw_text_vertical(
            label,
            self.rect.right() + tick_len + tick_pad + widest + label_pad,
            self.rect.center().1,
            (HAlign::Left, VAlign::Center),
        );
    }
}

/// Corner of the axes a legend is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendCorner {
    pub const ALL: [LegendCorner; 4] = [
        LegendCorner::UpperRight,
        LegendCorner::UpperLeft,
        LegendCorner::LowerLeft,
        LegendCorner::LowerRight,
    ];
}

/// Frameless legend of line handles laid out in columns.
#[derive(Debug, Clone)]
pub struct Legend {
    pub entries: Vec<(String, Color)>,
    pub ncol: usize,
    pub line_width_pt: f32,
}

impl Legend {
    fn metrics(fig: &Figure) -> (i32, i32, i32, i32) {
        let em = fig.font_px();
        let handle = (2.0 * em).round() as i32;
        let handle_pad = (0.8 * em).round() as i32;
        let column_gap = (2.0 * em).round() as i32;
        let border = (0.5 * em).round() as i32;
        (handle, handle_pad, column_gap, border)
    }

    fn column_widths(&self, fig: &Figure) -> Vec<i32> {
        let (handle, handle_pad, _, _) = Self::metrics(fig);
        let ncol = self.ncol.max(1);
        let mut widths = vec![0; ncol];
        for (i, (label, _)) in self.entries.iter().enumerate() {
            let w = handle + handle_pad + fig.measure(label).0;
            widths[i % ncol] = widths[i % ncol].max(w);
        }
        widths
    }

    /// Pixel size of the legend box.
    pub fn size(&self, fig: &Figure) -> (u32, u32) {
        let (_, _, column_gap, _) = Self::metrics(fig);
        let widths = self.column_widths(fig);
        let ncol = widths.len();
        let rows = self.entries.len().div_ceil(ncol);
        let width = widths.iter().sum::<i32>() + column_gap * (ncol as i32 - 1).max(0);
        let height = rows as i32 * fig.measure("Ag").1;
        (width.max(0) as u32, height.max(0) as u32)
    }

    /// Box the legend occupies when anchored at `corner` of `axes`.
    pub fn placement(&self, fig: &Figure, axes: &Axes, corner: LegendCorner) -> PixelRect {
        let (_, _, _, border) = Self::metrics(fig);
        let (w, h) = self.size(fig);
        let r = axes.rect;
        let x = match corner {
            LegendCorner::UpperLeft | LegendCorner::LowerLeft => r.x + border,
            LegendCorner::UpperRight | LegendCorner::LowerRight => r.right() - border - w as i32,
        };
        let y = match corner {
            LegendCorner::UpperLeft | LegendCorner::UpperRight => r.y + border,
            LegendCorner::LowerLeft | LegendCorner::LowerRight => r.bottom() - border - h as i32,
        };
        PixelRect::new(x, y, w, h)
    }

    pub fn draw(&self, fig: &mut Figure, axes: &Axes, corner: LegendCorner) {
        let (handle, handle_pad, column_gap, _) = Self::metrics(fig);
        let widths = self.column_widths(fig);
        let ncol = widths.len();
        let line_h = fig.measure("Ag").1;
        let width_px = fig.stroke_px(self.line_width_pt);
        let origin = self.placement(fig, axes, corner);

        for (i, (label, color)) in self.entries.iter().enumerate() {
            let col = i % ncol;
            let row = (i / ncol) as i32;
            let x = origin.x + widths[..col].iter().sum::<i32>() + column_gap * col as i32;
            let y = origin.y + row * line_h + line_h / 2;
            fig.draw_segment(
                (x as f32, y as f32),
                ((x + handle) as f32, y as f32),
                *color,
                width_px,
            );
            fig.draw_text(label, x + handle + handle_pad, y, (HAlign::Left, VAlign::Center));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_size_from_inches() {
        let fig = Figure::new(6.0, 4.0, 300).unwrap();
        assert_eq!((fig.width(), fig.height()), (1800, 1200));
        assert_eq!(fig.points(72.0), 300.0);
        assert!(Figure::new(0.0, 4.0, 300).is_err());
    }

    #[test]
    fn test_subplots_side_by_side() {
        let fig = Figure::new(12.0, 4.0, 100).unwrap();
        let rects = fig.subplots(2);
        assert_eq!(rects.len(), 2);
        assert!(rects[0].right() < rects[1].x);
        assert_eq!(rects[0].width, rects[1].width);
        assert!(rects[1].right() <= 1080);
    }

    #[test]
    fn test_cell_edges_and_index() {
        let edges = cell_edges(&[0.5, 1.5, 2.5]);
        assert_eq!(edges, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(cell_index(&edges, 0.0), Some(0));
        assert_eq!(cell_index(&edges, 1.2), Some(1));
        assert_eq!(cell_index(&edges, 3.0), Some(2));
        assert_eq!(cell_index(&edges, 3.1), None);

        let descending = cell_edges(&[2.5, 1.5, 0.5]);
        assert_eq!(cell_index(&descending, 2.9), Some(0));
        assert_eq!(cell_index(&descending, 0.1), Some(2));
    }

    #[test]
    fn test_axes_mapping_is_y_up() {
        let axes = Axes::new(PixelRect::new(0, 0, 100, 50), (0.0, 10.0), (-1.0, 1.0)).unwrap();
        assert_eq!(axes.x_to_px(5.0), 50.0);
        assert_eq!(axes.y_to_px(1.0), 0.0);
        assert_eq!(axes.y_to_px(-1.0), 50.0);
        assert!((axes.py_to_y(0) - 0.98).abs() < 1e-9);
        assert!(Axes::new(PixelRect::new(0, 0, 1, 1), (1.0, 1.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_tight_crop_adds_padding() {
        let mut fig = Figure::new(1.0, 1.0, 100).unwrap();
        fig.fill_rect(PixelRect::new(40, 30, 10, 20), Color::BLACK);
        let bbox = fig.content_bbox().unwrap();
        assert_eq!(bbox, PixelRect::new(40, 30, 10, 20));
        let cropped = fig.tight(0.1);
        assert_eq!((cropped.width(), cropped.height()), (30, 40));
        assert_eq!(*cropped.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*cropped.get_pixel(10, 10), FOREGROUND);
    }

    #[test]
    fn test_colorbar_beside() {
        let (axes, bar) = Colorbar::beside(PixelRect::new(0, 0, 1000, 400), (-3.0, 45.0));
        assert_eq!(axes.width, 800);
        assert_eq!(bar.rect.x, 850);
        assert_eq!(bar.rect.width, 20);
    }
}
