//! Error types for photon-core.
//!
//! # Usage
//!
//! ```rust
//! use photon_core::{Error, Result};
//!
//! fn check(len: usize, width: u32, height: u32) -> Result<()> {
//!     let expected = width as usize * height as usize * 4;
//!     if len != expected {
//!         return Err(Error::BufferSize { width, height, expected, got: len });
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by raster construction and region access.
///
/// - **Bounds errors**: [`InvalidRegion`](Error::InvalidRegion)
/// - **Buffer errors**: [`BufferSize`](Error::BufferSize), [`InvalidDimensions`](Error::InvalidDimensions)
#[derive(Debug, Error)]
pub enum Error {
    /// Region extends beyond image bounds.
    #[error("region ({rx}, {ry}, {rw}x{rh}) exceeds image bounds {width}x{height}")]
    InvalidRegion {
        /// Region X origin
        rx: u32,
        /// Region Y origin
        ry: u32,
        /// Region width
        rw: u32,
        /// Region height
        rh: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Pixel buffer length does not match the declared dimensions.
    #[error("buffer holds {got} bytes, {width}x{height} RGBA needs {expected}")]
    BufferSize {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Required byte count
        expected: usize,
        /// Actual byte count
        got: usize,
    },

    /// Dimensions overflow the addressable buffer size.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidRegion`] error.
    #[inline]
    pub fn invalid_region(rx: u32, ry: u32, rw: u32, rh: u32, width: u32, height: u32) -> Self {
        Self::InvalidRegion {
            rx,
            ry,
            rw,
            rh,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_region_message() {
        let err = Error::invalid_region(3, 3, 2, 2, 4, 4);
        assert_eq!(err.to_string(), "region (3, 3, 2x2) exceeds image bounds 4x4");
        assert!(matches!(err, Error::InvalidRegion { rx: 3, width: 4, .. }));
    }

    #[test]
    fn test_buffer_size_message() {
        let err = Error::BufferSize {
            width: 2,
            height: 2,
            expected: 16,
            got: 12,
        };
        assert_eq!(err.to_string(), "buffer holds 12 bytes, 2x2 RGBA needs 16");
    }
}
