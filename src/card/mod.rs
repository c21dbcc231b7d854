//! Canvas composition for the two card faces
//!
//! All functions here are pure of filesystem effects; persisting the rasters
//! is handled separately in [`crate::output`].

mod text;

pub use text::load_font;

use crate::config::{ContactFields, RenderConfig};
use crate::error::{Error, Result};
use image::imageops::{self, FilterType};
use image::RgbImage;
use rusttype::Font;

/// Shrink factor applied to the QR code before pasting it on the back face
const BACK_QR_SCALE: f32 = 0.75;

/// Allocate a blank card canvas filled with the theme background color.
pub fn blank(config: &RenderConfig) -> RgbImage {
    RgbImage::from_pixel(
        config.width,
        config.height,
        config.theme.palette().background,
    )
}

/// Split an email address on its first `@` into user and domain parts.
pub(crate) fn split_email(email: &str) -> Result<(&str, &str)> {
    email
        .split_once('@')
        .ok_or_else(|| Error::InvalidEmail(email.to_string()))
}

/// Compose the front face: the email address centered on a blank canvas,
/// drawn as three colored segments (user / `@` / domain).
pub fn front(config: &RenderConfig, contact: &ContactFields, font: &Font<'_>) -> Result<RgbImage> {
    // Validate the email before touching the canvas so a missing separator
    // surfaces as an email error, not a drawing artifact.
    let (user, domain) = split_email(&contact.email)?;

    let palette = config.theme.palette();
    let px = config.font_size as f32;
    let mut img = blank(config);

    let (total_w, total_h) = text::text_size(font, px, &contact.email);
    let mut x = (config.width as f32 - total_w) / 2.0;
    let y = (config.height as f32 - total_h) / 2.0;

    text::draw_text(&mut img, font, px, x, y, palette.muted, user);
    x += text::text_size(font, px, user).0;
    text::draw_text(&mut img, font, px, x, y, palette.accent, "@");
    x += text::text_size(font, px, "@").0;
    text::draw_text(&mut img, font, px, x, y, palette.text, domain);

    Ok(img)
}

/// Compose the back face: the QR code shrunk to 75% of its natural size
/// (aspect preserved, Lanczos3 downscale) and pasted centered.
pub fn back(config: &RenderConfig, qr: &RgbImage) -> RgbImage {
    let mut img = blank(config);

    let (qw, qh) = qr.dimensions();
    let mut tw = ((qw as f32 * BACK_QR_SCALE).round() as u32).max(1);
    let mut th = ((qh as f32 * BACK_QR_SCALE).round() as u32).max(1);

    // A code that still overflows the canvas is fitted within it, keeping
    // the aspect ratio.
    if tw > config.width || th > config.height {
        let ratio = (config.width as f32 / tw as f32).min(config.height as f32 / th as f32);
        tw = ((tw as f32 * ratio).floor() as u32).clamp(1, config.width);
        th = ((th as f32 * ratio).floor() as u32).clamp(1, config.height);
    }

    let scaled = imageops::resize(qr, tw, th, FilterType::Lanczos3);
    let x = (i64::from(config.width) - i64::from(tw)) / 2;
    let y = (i64::from(config.height) - i64::from(th)) / 2;
    imageops::replace(&mut img, &scaled, x, y);

    img
}
