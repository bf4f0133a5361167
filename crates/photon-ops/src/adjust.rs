//! Per-channel RGB scaling.
//!
//! Each of R, G and B is multiplied by its own factor and clamped back into
//! a byte. Alpha is left untouched. This is plain scaling of the stored
//! sRGB values; no linearization happens.
//!
//! # Example
//!
//! ```rust
//! use photon_core::Raster;
//! use photon_ops::adjust::{scale_channels, ChannelScale};
//!
//! let src = Raster::filled(2, 2, [100, 100, 100, 128]);
//! let warm = ChannelScale::new(1.2, 1.0, 0.8).unwrap();
//! let dst = scale_channels(&src, warm);
//! assert_eq!(dst.pixel(0, 0), [120, 100, 80, 128]);
//! ```

use crate::{OpsError, OpsResult};
use photon_core::{clamp_u8, Raster, CHANNELS};
use std::str::FromStr;
use tracing::{debug, trace};

/// Multipliers for the red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelScale {
    /// Red multiplier.
    pub r: f32,
    /// Green multiplier.
    pub g: f32,
    /// Blue multiplier.
    pub b: f32,
}

impl Default for ChannelScale {
    fn default() -> Self {
        Self::identity()
    }
}

impl ChannelScale {
    /// Creates a scale, rejecting negative or non-finite factors.
    pub fn new(r: f32, g: f32, b: f32) -> OpsResult<Self> {
        for (name, v) in [("red", r), ("green", g), ("blue", b)] {
            if !v.is_finite() || v < 0.0 {
                return Err(OpsError::InvalidParameter(format!(
                    "{} scale must be a finite value >= 0, got {}",
                    name, v
                )));
            }
        }
        Ok(Self { r, g, b })
    }

    /// Scale that leaves every channel unchanged.
    pub const fn identity() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        }
    }

    /// Returns `true` if all factors are exactly 1.
    pub fn is_identity(&self) -> bool {
        self.r == 1.0 && self.g == 1.0 && self.b == 1.0
    }

    /// Applies the scale to one RGBA pixel.
    #[inline]
    pub fn apply(&self, px: [u8; 4]) -> [u8; 4] {
        [
            clamp_u8(px[0] as f32 * self.r),
            clamp_u8(px[1] as f32 * self.g),
            clamp_u8(px[2] as f32 * self.b),
            px[3],
        ]
    }
}

impl FromStr for ChannelScale {
    type Err = OpsError;

    /// Parses `"r,g,b"`, e.g. `"1.1,1,0.9"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(OpsError::InvalidParameter(format!(
                "expected 'r,g,b', got '{}'",
                s
            )));
        }
        let mut values = [0.0f32; 3];
        for (v, part) in values.iter_mut().zip(&parts) {
            *v = part.parse().map_err(|_| {
                OpsError::InvalidParameter(format!("'{}' is not a number", part))
            })?;
        }
        Self::new(values[0], values[1], values[2])
    }
}

/// Scales the R, G and B channels of every pixel.
pub fn scale_channels(src: &Raster, scale: ChannelScale) -> Raster {
    trace!(width = src.width(), height = src.height(), r = scale.r, g = scale.g, b = scale.b, "scale_channels");

    let mut dst = src.clone();
    if scale.is_identity() {
        debug!("Identity channel scale, copying");
        return dst;
    }

    for px in dst.data_mut().chunks_exact_mut(CHANNELS) {
        let out = scale.apply([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&out);
    }
    dst
}
