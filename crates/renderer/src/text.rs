//! Text drawing with the embedded DejaVu Sans font.

use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use rusttype::{Font, Scale};

use crate::error::{RenderError, RenderResult};

/// Embedded font data - DejaVu Sans
const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Horizontal anchor of a text box relative to the given point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text box relative to the given point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Font plus the drawing helpers used by axes and legends.
pub struct TextRenderer {
    font: Font<'static>,
}

impl TextRenderer {
    pub fn new() -> RenderResult<Self> {
        let font = Font::try_from_bytes(FONT_DATA).ok_or(RenderError::Font)?;
        Ok(Self { font })
    }

    /// Height of one line of text at `px` pixels per em.
    pub fn line_height(&self, px: f32) -> i32 {
        let v = self.font.v_metrics(Scale::uniform(px));
        (v.ascent - v.descent).ceil() as i32
    }

    /// Width and line height of `text`.
    pub fn measure(&self, text: &str, px: f32) -> (i32, i32) {
        let (width, _) = text_size(Scale::uniform(px), &self.font, text);
        (width, self.line_height(px))
    }

    /// Draw horizontal text anchored at `(x, y)`.
    pub fn draw(
        &self,
        img: &mut RgbaImage,
        text: &str,
        x: i32,
        y: i32,
        px: f32,
        color: Rgba<u8>,
        align: (HAlign, VAlign),
    ) {
        if text.is_empty() {
            return;
        }
        let (w, h) = self.measure(text, px);
        let (left, top) = anchor(x, y, w, h, align);
        draw_text_mut(img, color, left, top, Scale::uniform(px), &self.font, text);
    }

    /// Draw text rotated 90 degrees counter-clockwise (reading bottom to
    /// top), anchored at `(x, y)` on the rotated box.
    pub fn draw_vertical(
        &self,
        img: &mut RgbaImage,
        text: &str,
        x: i32,
        y: i32,
        px: f32,
        color: Rgba<u8>,
        align: (HAlign, VAlign),
    ) {
        if text.is_empty() {
            return;
        }
        let (w, h) = self.measure(text, px);
        if w <= 0 || h <= 0 {
            return;
        }

        let mut scratch = RgbaImage::from_pixel(w as u32, h as u32, Rgba([0, 0, 0, 0]));
        draw_text_mut(&mut scratch, color, 0, 0, Scale::uniform(px), &self.font, text);
        let rotated = imageops::rotate270(&scratch);

        let (left, top) = anchor(x, y, h, w, align);
        imageops::overlay(img, &rotated, left as i64, top as i64);
    }
}

fn anchor(x: i32, y: i32, w: i32, h: i32, (halign, valign): (HAlign, VAlign)) -> (i32, i32) {
    let left = match halign {
        HAlign::Left => x,
        HAlign::Center => x - w / 2,
        HAlign::Right => x - w,
    };
    let top = match valign {
        VAlign::Top => y,
        VAlign::Center => y - h / 2,
        VAlign::Bottom => y - h,
    };
    (left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_ink(img: &RgbaImage) -> bool {
        img.pixels().any(|p| p.0 != [255, 255, 255, 255])
    }

    #[test]
    fn test_font_loads_and_measures() {
        let text = TextRenderer::new().unwrap();
        let (w_short, h) = text.measure("1", 40.0);
        let (w_long, _) = text.measure("1000", 40.0);
        assert!(h > 0);
        assert!(w_long > w_short);
    }

    #[test]
    fn test_draw_horizontal_and_vertical() {
        let text = TextRenderer::new().unwrap();
        let mut img = RgbaImage::from_pixel(200, 200, Rgba([255, 255, 255, 255]));
        text.draw(&mut img, "SST", 100, 50, 30.0, Rgba([0, 0, 0, 255]), (HAlign::Center, VAlign::Center));
        assert!(has_ink(&img));

        let mut img = RgbaImage::from_pixel(200, 200, Rgba([255, 255, 255, 255]));
        text.draw_vertical(&mut img, "Frequency", 20, 100, 20.0, Rgba([0, 0, 0, 255]), (HAlign::Left, VAlign::Center));
        assert!(has_ink(&img));
    }

    #[test]
    fn test_anchor() {
        assert_eq!(anchor(100, 50, 20, 10, (HAlign::Right, VAlign::Bottom)), (80, 40));
        assert_eq!(anchor(100, 50, 20, 10, (HAlign::Center, VAlign::Center)), (90, 45));
    }
}
