//! QR code encoder

use crate::error::{Error, Result};
use crate::theme::Palette;
use image::{Rgb, RgbImage};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

/// Side length of one QR module in pixels
const MODULE_SIZE: u32 = 10;

/// QR code encoder producing theme-colored raster images
pub struct QrEncoder {
    /// Error correction level
    ecc_level: EcLevel,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (Medium ECC)
    pub fn new() -> Self {
        Self {
            ecc_level: EcLevel::M,
        }
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_ecc_level(ecc_level: EcLevel) -> Self {
        Self { ecc_level }
    }

    /// Encode text into a QR code image at the smallest version that fits.
    ///
    /// Set modules use the palette accent color, unset modules the palette
    /// background, so the code sits seamlessly on the card's back face.
    pub fn encode(&self, data: &str, palette: &Palette) -> Result<RgbImage> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), self.ecc_level).map_err(
            |e| match e {
                QrError::DataTooLong => Error::QrCapacity(data.len()),
                other => Error::QrEncode(format!("Failed to create QR code: {}", other)),
            },
        )?;

        tracing::debug!(
            version = ?code.version(),
            payload_bytes = data.len(),
            "Encoded QR code"
        );

        let image = code
            .render::<Rgb<u8>>()
            .module_dimensions(MODULE_SIZE, MODULE_SIZE)
            .dark_color(palette.accent)
            .light_color(palette.background)
            .build();

        Ok(image)
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_encode_string() {
        let encoder = QrEncoder::new();
        let result = encoder.encode("Hello, card!", &Theme::Light.palette());
        assert!(result.is_ok());
    }

    #[test]
    fn encoded_image_is_square_and_module_aligned() {
        let encoder = QrEncoder::new();
        let img = encoder
            .encode("hello@alex-lewis.me", &Theme::Light.palette())
            .unwrap();
        assert_eq!(img.width(), img.height());
        assert_eq!(img.width() % MODULE_SIZE, 0);
    }

    #[test]
    fn bitcoin_theme_colors_the_modules() {
        let palette = Theme::Bitcoin.palette();
        let img = QrEncoder::new().encode("BEGIN:VCARD", &palette).unwrap();
        let pixels: std::collections::HashSet<_> = img.pixels().map(|p| p.0).collect();
        assert!(pixels.contains(&palette.accent.0));
        assert!(pixels.contains(&palette.background.0));
        assert_eq!(pixels.len(), 2);
    }

    #[test]
    fn oversized_payload_reports_capacity() {
        let encoder = QrEncoder::new();
        let huge = "x".repeat(8000); // beyond version 40 byte capacity
        match encoder.encode(&huge, &Theme::Light.palette()) {
            Err(Error::QrCapacity(len)) => assert_eq!(len, 8000),
            other => panic!("expected QrCapacity error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_round_trip() {
        use crate::qr::QrDecoder;

        let encoder = QrEncoder::new();
        let decoder = QrDecoder::new();

        let original = "Test payload for round trip";
        let qr_image = encoder.encode(original, &Theme::Light.palette()).unwrap();
        let decoded = decoder.decode(&qr_image).unwrap();

        assert_eq!(decoded, original);
    }
}
