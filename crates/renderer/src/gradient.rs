//! Colour ramps for scalar fields.
//!
//! Values are normalized against fixed limits and mapped through the "jet"
//! ramp (dark blue, cyan, yellow, red, dark red). Values outside the limits
//! clip to the end colours; NaN has no colour.

use image::Rgba;

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

/// Default colours for successive line and bar series.
pub const SERIES_COLORS: [Color; 4] = [
    Color::new(0x1f, 0x77, 0xb4, 255),
    Color::new(0xff, 0x7f, 0x0e, 255),
    Color::new(0x2c, 0xa0, 0x2c, 255),
    Color::new(0xd6, 0x27, 0x28, 255),
];

/// Series colour `idx`, cycling.
pub fn series_color(idx: usize) -> Color {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

// Piecewise-linear channel anchors of the jet ramp, as (position, intensity).
const JET_RED: [(f32, f32); 5] = [(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)];
const JET_GREEN: [(f32, f32); 6] = [
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];
const JET_BLUE: [(f32, f32); 5] = [(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)];

fn channel(anchors: &[(f32, f32)], t: f32) -> u8 {
    let mut value = anchors[anchors.len() - 1].1;
    for pair in anchors.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            let f = if x1 > x0 { (t - x0) / (x1 - x0) } else { 0.0 };
            value = y0 + (y1 - y0) * f;
            break;
        }
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Jet colour for a normalized value in [0, 1] (clamped).
pub fn jet_color(t: f32) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    Color::new(
        channel(&JET_RED, t),
        channel(&JET_GREEN, t),
        channel(&JET_BLUE, t),
        255,
    )
}

/// Position of `value` between `min_val` and `max_val`, clamped to [0, 1].
/// NaN stays NaN.
pub fn normalize(value: f32, min_val: f32, max_val: f32) -> f32 {
    let range = max_val - min_val;
    let range = if range.abs() < f32::EPSILON { 1.0 } else { range };
    ((value - min_val) / range).clamp(0.0, 1.0)
}

/// Colour for a data value under fixed limits, `None` for NaN.
pub fn value_color(value: f32, min_val: f32, max_val: f32) -> Option<Color> {
    if value.is_nan() {
        None
    } else {
        Some(jet_color(normalize(value, min_val, max_val)))
    }
}

/// Render grid data as a gradient heatmap
///
/// # Arguments
/// - `data`: 2D grid of values (row-major order)
/// - `width`: Number of columns
/// - `height`: Number of rows
/// - `min_val`, `max_val`: Colour limits
/// - `color_fn`: Function to convert a normalized value (0-1) to a color
///
/// # Returns
/// RGBA pixel data (4 bytes per pixel); NaN cells are transparent.
pub fn render_grid<F>(
    data: &[f32],
    width: usize,
    height: usize,
    min_val: f32,
    max_val: f32,
    color_fn: F,
) -> Vec<u8>
where
    F: Fn(f32) -> Color,
{
    let mut pixels = vec![0u8; width * height * 4];

    for (idx, &value) in data.iter().take(width * height).enumerate() {
        let color = if value.is_nan() {
            Color::transparent()
        } else {
            color_fn(normalize(value, min_val, max_val))
        };

        let pixel_idx = idx * 4;
        pixels[pixel_idx] = color.r;
        pixels[pixel_idx + 1] = color.g;
        pixels[pixel_idx + 2] = color.b;
        pixels[pixel_idx + 3] = color.a;
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jet_endpoints() {
        assert_eq!(jet_color(0.0), Color::new(0, 0, 128, 255));
        assert_eq!(jet_color(1.0), Color::new(128, 0, 0, 255));
        // green plateau in the middle
        let mid = jet_color(0.5);
        assert_eq!(mid.g, 255);
    }

    #[test]
    fn test_normalize_clips() {
        assert_eq!(normalize(-10.0, -3.0, 45.0), 0.0);
        assert_eq!(normalize(100.0, -3.0, 45.0), 1.0);
        assert!((normalize(21.0, -3.0, 45.0) - 0.5).abs() < 1e-6);
        assert!(normalize(f32::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_value_color_nan_is_none() {
        assert!(value_color(f32::NAN, 0.0, 1.0).is_none());
        assert!(value_color(0.5, 0.0, 1.0).is_some());
    }

    #[test]
    fn test_render_grid_nan_transparent() {
        let pixels = render_grid(&[0.0, f32::NAN], 2, 1, 0.0, 1.0, jet_color);
        assert_eq!(&pixels[0..4], &[0, 0, 128, 255]);
        assert_eq!(&pixels[4..8], &[0, 0, 0, 0]);
    }
}
