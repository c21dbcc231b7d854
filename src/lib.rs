//! bizcard - printable business card generator
//!
//! This library renders a front/back business card image pair from a small
//! set of contact fields, embedding a scannable QR-encoded vCard on the back.
//!
//! # Features
//!
//! - **Typed configuration**: file + environment resolved once at the boundary
//! - **Themes**: fixed light/dark/bitcoin palettes shared by text and QR
//! - **Pure pipeline**: resolve, serialize, encode, and compose without I/O;
//!   persistence is an explicit separate step
//!
//! # Example
//!
//! ```no_run
//! use bizcard::{CardConfig, CardRenderer};
//!
//! fn main() -> bizcard::Result<()> {
//!     let params = CardConfig::load(None)?.resolve()?;
//!     let renderer = CardRenderer::new(params)?;
//!
//!     let front = renderer.front()?;
//!     let record = renderer.vcard();
//!     let qr = renderer.qr(&record)?;
//!     let back = renderer.back(&qr);
//!
//!     front.save("front.png")?;
//!     back.save("back.png")?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod card;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod qr;
pub mod theme;
pub mod vcard;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{
    CardConfig, CardParams, ContactFields, ContactOptions, LogRotation, LoggingOptions,
    OutputOptions, RenderConfig, RenderOptions,
};
pub use qr::{QrDecoder, QrEncoder};
pub use theme::{Palette, Theme};

use image::RgbImage;
use rusttype::Font;

/// High-level renderer combining resolved parameters with a loaded font
pub struct CardRenderer {
    params: CardParams,
    font: Font<'static>,
}

impl CardRenderer {
    /// Create a renderer for the given parameters, loading the configured font.
    pub fn new(params: CardParams) -> Result<Self> {
        let font = card::load_font(&params.render.font_path())?;
        Ok(Self { params, font })
    }

    /// The resolved parameters this renderer draws from.
    pub fn params(&self) -> &CardParams {
        &self.params
    }

    /// Serialize the contact fields into a vCard record.
    pub fn vcard(&self) -> String {
        vcard::render(&self.params.contact)
    }

    /// Encode a vCard record as a theme-colored QR image.
    pub fn qr(&self, record: &str) -> Result<RgbImage> {
        QrEncoder::new().encode(record, &self.params.render.theme.palette())
    }

    /// Allocate the blank card canvas both faces start from.
    pub fn blank(&self) -> RgbImage {
        card::blank(&self.params.render)
    }

    /// Compose the front face (centered, color-segmented email address).
    pub fn front(&self) -> Result<RgbImage> {
        card::front(&self.params.render, &self.params.contact, &self.font)
    }

    /// Compose the back face (QR code at 75% scale, centered).
    pub fn back(&self, qr: &RgbImage) -> RgbImage {
        card::back(&self.params.render, qr)
    }
}
