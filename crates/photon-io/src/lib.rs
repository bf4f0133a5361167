//! # photon-io
//!
//! Image file I/O for the photon editor.
//!
//! PNG is the only on-disk format. Files are recognized by their signature
//! first and their extension second; anything else is rejected with
//! [`IoError::UnsupportedFormat`].
//!
//! - [`read`] / [`write`] - Path-based entry points with format checks
//! - [`png`] - Codec working on bytes or paths
//! - [`Format`] - Format detection
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use photon_io::{read, write};
//!
//! let image = read("input.png")?;
//! write("copy.png", &image)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod detect;
mod error;
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};

use photon_core::Raster;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads an image file, detecting the format from its contents.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for anything that is not a PNG, plus any
/// I/O or decode failure.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();

    let mut head = [0u8; 8];
    let n = File::open(path)?.read(&mut head)?;

    match Format::detect(path, &head[..n]) {
        Format::Png => png::read(path),
        Format::Unknown => Err(IoError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Writes an image, choosing the format from the extension.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] if the extension is not `.png`.
pub fn write<P: AsRef<Path>>(path: P, raster: &Raster) -> IoResult<()> {
    let path = path.as_ref();
    match Format::from_extension(path) {
        Format::Png => png::write(path, raster),
        Format::Unknown => Err(IoError::UnsupportedFormat(format!(
            "{} (only .png can be written)",
            path.display()
        ))),
    }
}
