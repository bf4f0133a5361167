//! Error types for image file operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded data did not form a valid raster.
    #[error(transparent)]
    Core(#[from] photon_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

impl From<png::DecodingError> for IoError {
    fn from(e: png::DecodingError) -> Self {
        match e {
            png::DecodingError::IoError(io) => IoError::Io(io),
            other => IoError::DecodeError(other.to_string()),
        }
    }
}

impl From<png::EncodingError> for IoError {
    fn from(e: png::EncodingError) -> Self {
        match e {
            png::EncodingError::IoError(io) => IoError::Io(io),
            other => IoError::EncodeError(other.to_string()),
        }
    }
}
