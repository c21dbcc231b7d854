//! Glyph measurement and text drawing on RGB canvases

use crate::error::{Error, Result};
use image::{Rgb, RgbImage};
use rusttype::{Font, Scale, point};
use std::fs;
use std::path::Path;

/// Load and parse a TrueType/OpenType font file.
pub fn load_font(path: &Path) -> Result<Font<'static>> {
    let bytes = fs::read(path)
        .map_err(|e| Error::Font(format!("Failed to read font {}: {e}", path.display())))?;
    Font::try_from_vec(bytes)
        .ok_or_else(|| Error::Font(format!("Failed to parse font {}", path.display())))
}

/// Measure `text` at `px` pixels, returning (width, line height).
///
/// Width is the plain sum of glyph advance widths with no pair kerning, so
/// measuring consecutive segments separately adds up to the measurement of
/// their concatenation. Drawing uses the same metric.
pub fn text_size(font: &Font<'_>, px: f32, text: &str) -> (f32, f32) {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let width = text
        .chars()
        .map(|ch| font.glyph(ch).scaled(scale).h_metrics().advance_width)
        .sum();
    (width, v_metrics.ascent - v_metrics.descent)
}

/// Draw `text` with its top-left corner at (x, y), alpha-blending glyph
/// coverage over the existing canvas pixels. Glyphs falling outside the
/// canvas are clipped.
pub fn draw_text(
    img: &mut RgbImage,
    font: &Font<'_>,
    px: f32,
    x: f32,
    y: f32,
    color: Rgb<u8>,
    text: &str,
) {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let mut caret_x = x;
    let baseline_y = y + v_metrics.ascent;

    for ch in text.chars() {
        let glyph = font.glyph(ch).scaled(scale);
        let advance = glyph.h_metrics().advance_width;
        let positioned = glyph.positioned(point(caret_x, baseline_y));
        if let Some(bb) = positioned.pixel_bounding_box() {
            positioned.draw(|gx, gy, v| {
                let px_x = gx as i32 + bb.min.x;
                let px_y = gy as i32 + bb.min.y;
                if px_x < 0 || px_y < 0 {
                    return;
                }
                let (px_x, px_y) = (px_x as u32, px_y as u32);
                if px_x >= img.width() || px_y >= img.height() || v <= 0.0 {
                    return;
                }
                let dst = img.get_pixel_mut(px_x, px_y);
                let inv = 1.0 - v;
                for c in 0..3 {
                    dst.0[c] = (color.0[c] as f32 * v + dst.0[c] as f32 * inv) as u8;
                }
            });
        }
        caret_x += advance;
    }
}
