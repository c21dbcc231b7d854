//! QR code encoding and decoding
//!
//! Encoding renders the vCard payload as a theme-colored matrix image for the
//! back face. Decoding exists so a generated card can be verified to scan
//! back to the exact record it was built from.

mod decoder;
mod encoder;

pub use decoder::QrDecoder;
pub use encoder::QrEncoder;
