//! Error types for bizcard operations

use thiserror::Error;

/// Result type alias using bizcard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for bizcard operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (unknown theme, unparsable config file, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email address without an `@` separator
    #[error("Invalid email address '{0}': expected user@domain")]
    InvalidEmail(String),

    /// Font file could not be loaded or parsed
    #[error("Font error: {0}")]
    Font(String),

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// Payload exceeds the largest QR version's capacity
    #[error("vCard payload of {0} bytes exceeds QR code capacity")]
    QrCapacity(usize),

    /// QR code decoding failed
    #[error("Failed to decode QR code: {0}")]
    QrDecode(String),

    /// No QR code found in image
    #[error("No QR code found in image")]
    NoQrFound,

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

// Implement From conversions for common error types

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Other(format!("JSON error: {}", e))
    }
}
