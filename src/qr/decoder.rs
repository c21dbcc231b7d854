//! QR code decoder using rqrr

use crate::error::{Error, Result};
use image::{GrayImage, RgbImage};

/// QR code decoder
pub struct QrDecoder {
    // Configuration could go here (e.g., detection parameters)
}

impl QrDecoder {
    /// Create a new QR decoder with default settings
    pub fn new() -> Self {
        Self {}
    }

    /// Decode a QR code from a color image
    pub fn decode(&self, img: &RgbImage) -> Result<String> {
        let gray = image::imageops::grayscale(img);
        self.decode_gray(&gray)
    }

    /// Decode a QR code from a grayscale image
    pub fn decode_gray(&self, img: &GrayImage) -> Result<String> {
        let mut prepared = rqrr::PreparedImage::prepare(img.clone());

        let grids = prepared.detect_grids();

        if grids.is_empty() {
            return Err(Error::NoQrFound);
        }

        // Take the first detected QR code
        let grid = &grids[0];

        match grid.decode() {
            Ok((meta, content)) => {
                tracing::debug!(
                    "Decoded QR: version={:?}, ecc_level={:?}, length={}",
                    meta.version,
                    meta.ecc_level,
                    content.len()
                );

                Ok(content)
            }
            Err(e) => Err(Error::QrDecode(format!("Decode failed: {:?}", e))),
        }
    }
}

impl Default for QrDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_image_has_no_qr() {
        let decoder = QrDecoder::new();
        let blank = GrayImage::from_pixel(64, 64, image::Luma([255]));
        assert!(matches!(decoder.decode_gray(&blank), Err(Error::NoQrFound)));
    }
}
