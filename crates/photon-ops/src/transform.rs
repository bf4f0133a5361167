//! Geometric edits: quarter-turn rotation and rectangular crop.
//!
//! Only fixed multiples of 90° are supported, so no resampling is involved
//! and every pixel is copied exactly.
//!
//! # Operations
//!
//! - [`rotate_90_cw`] / [`rotate_90_ccw`] - Quarter turns (W×H becomes H×W)
//! - [`rotate_180`] - Half turn
//! - [`rotate`] - Dispatch on [`Rotation`]
//! - [`crop`] - Extract a rectangle
//!
//! # Example
//!
//! ```rust
//! use photon_core::{Raster, Rect};
//! use photon_ops::transform::{crop, rotate, Rotation};
//!
//! let src = Raster::filled(64, 32, [10, 20, 30, 255]);
//!
//! let turned = rotate(&src, Rotation::Cw90);
//! assert_eq!(turned.dimensions(), (32, 64));
//!
//! let cropped = crop(&src, Rect::new(16, 8, 32, 16)).unwrap();
//! assert_eq!(cropped.dimensions(), (32, 16));
//! ```

use crate::{OpsError, OpsResult};
use photon_core::{Raster, Rect, Surface};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A rotation by a fixed multiple of 90°.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// 90° clockwise.
    Cw90,
    /// 90° counter-clockwise.
    Ccw90,
    /// 180°.
    Half,
}

impl Rotation {
    /// Rotation angle in degrees, clockwise positive.
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Cw90 => 90,
            Self::Ccw90 => -90,
            Self::Half => 180,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.degrees())
    }
}

impl FromStr for Rotation {
    type Err = OpsError;

    /// Accepts `90`/`cw`, `-90`/`270`/`ccw`, and `180`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "90" | "cw" => Ok(Self::Cw90),
            "-90" | "270" | "ccw" => Ok(Self::Ccw90),
            "180" | "-180" => Ok(Self::Half),
            other => Err(OpsError::InvalidParameter(format!(
                "unsupported rotation '{}': use 90, 180 or 270",
                other
            ))),
        }
    }
}

/// Rotates 90° clockwise.
///
/// ```rust
/// use photon_core::Raster;
/// use photon_ops::transform::rotate_90_cw;
///
/// let mut src = Raster::new(2, 1);
/// src.set_pixel(0, 0, [1, 0, 0, 255]);
/// src.set_pixel(1, 0, [2, 0, 0, 255]);
///
/// let dst = rotate_90_cw(&src);
/// assert_eq!(dst.dimensions(), (1, 2));
/// assert_eq!(dst.pixel(0, 0)[0], 1); // left pixel moves to the top
/// assert_eq!(dst.pixel(0, 1)[0], 2);
/// ```
pub fn rotate_90_cw(src: &Raster) -> Raster {
    let (width, height) = src.dimensions();
    let mut dst = Raster::new(height, width);

    for (x, y, px) in src.pixels() {
        // (x, y) -> (height-1-y, x)
        dst.set_pixel(height - 1 - y, x, px);
    }

    dst
}

/// Rotates 90° counter-clockwise.
pub fn rotate_90_ccw(src: &Raster) -> Raster {
    let (width, height) = src.dimensions();
    let mut dst = Raster::new(height, width);

    for (x, y, px) in src.pixels() {
        dst.set_pixel(y, width - 1 - x, px);
    }

    dst
}

/// Rotates 180°.
pub fn rotate_180(src: &Raster) -> Raster {
    let (width, height) = src.dimensions();
    let mut dst = Raster::new(width, height);

    for (x, y, px) in src.pixels() {
        dst.set_pixel(width - 1 - x, height - 1 - y, px);
    }

    dst
}

/// Applies `rotation`.
pub fn rotate(src: &Raster, rotation: Rotation) -> Raster {
    trace!(width = src.width(), height = src.height(), %rotation, "rotate");
    match rotation {
        Rotation::Cw90 => rotate_90_cw(src),
        Rotation::Ccw90 => rotate_90_ccw(src),
        Rotation::Half => rotate_180(src),
    }
}

/// Crops `region` out of `src`.
///
/// # Errors
///
/// [`OpsError::InvalidDimensions`] if the region is empty or extends past
/// the image.
pub fn crop(src: &Raster, region: Rect) -> OpsResult<Raster> {
    trace!(width = src.width(), height = src.height(), %region, "crop");

    if region.is_empty() {
        return Err(OpsError::InvalidDimensions(format!(
            "crop region {} is empty",
            region
        )));
    }
    if !src.bounds().contains_rect(&region) {
        return Err(OpsError::InvalidDimensions(format!(
            "crop region {}x{} at ({},{}) exceeds {}x{}",
            region.width,
            region.height,
            region.x,
            region.y,
            src.width(),
            src.height()
        )));
    }

    Ok(src.read_region(region)?)
}
