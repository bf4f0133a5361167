//! Resampling for the editor's display canvas.
//!
//! The editor never shows an image bigger than its canvas: large photos are
//! scaled down to fit, small ones are shown at 1:1.
//!
//! # Filters
//!
//! - [`Filter::Nearest`] - No interpolation (blocky, exact colors)
//! - [`Filter::Bilinear`] - Triangle filter, widened when downscaling
//!
//! # Example
//!
//! ```rust
//! use photon_core::Raster;
//! use photon_ops::resize::{fit_to_canvas, Filter};
//!
//! let photo = Raster::filled(1920, 1080, [40, 80, 120, 255]);
//! let shown = fit_to_canvas(&photo, 640, 640, Filter::Bilinear).unwrap();
//! assert_eq!(shown.dimensions(), (640, 360));
//! ```

use crate::{OpsError, OpsResult};
use photon_core::{clamp_u8, Raster, CHANNELS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Resampling filter.
///
/// Serialized in lowercase (`nearest`, `bilinear`), matching [`Display`](fmt::Display).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Nearest-neighbor.
    #[serde(alias = "box")]
    Nearest,
    /// Bilinear interpolation.
    #[default]
    #[serde(alias = "linear", alias = "triangle")]
    Bilinear,
}

impl Filter {
    /// Support radius at 1:1 scale.
    #[inline]
    pub fn support(&self) -> f32 {
        match self {
            Filter::Nearest => 0.5,
            Filter::Bilinear => 1.0,
        }
    }

    /// Evaluates the kernel at distance `x`.
    #[inline]
    pub fn weight(&self, x: f32) -> f32 {
        let ax = x.abs();
        match self {
            Filter::Nearest => {
                if ax < 0.5 { 1.0 } else { 0.0 }
            }
            Filter::Bilinear => {
                if ax < 1.0 { 1.0 - ax } else { 0.0 }
            }
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Nearest => f.write_str("nearest"),
            Filter::Bilinear => f.write_str("bilinear"),
        }
    }
}

impl FromStr for Filter {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "box" => Ok(Filter::Nearest),
            "bilinear" | "linear" | "triangle" => Ok(Filter::Bilinear),
            other => Err(OpsError::InvalidParameter(format!(
                "unknown filter '{}': use nearest or bilinear",
                other
            ))),
        }
    }
}

/// Largest size that fits inside `max_w`x`max_h` with the same aspect.
///
/// Never upscales. A non-empty image never maps to a zero side, even for
/// extreme aspect ratios or a zero-sized box. An empty image maps to 0x0.
///
/// ```rust
/// use photon_ops::resize::fit_dimensions;
///
/// assert_eq!(fit_dimensions(1920, 1080, 640, 480), (640, 360));
/// assert_eq!(fit_dimensions(320, 240, 640, 480), (320, 240));
/// ```
pub fn fit_dimensions(width: u32, height: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    let max_w = max_w.max(1);
    let max_h = max_h.max(1);

    let scale_w = max_w as f64 / width as f64;
    let scale_h = max_h as f64 / height as f64;
    let scale = scale_w.min(scale_h).min(1.0);

    let new_w = ((width as f64 * scale).round() as u32).clamp(1, max_w.min(width));
    let new_h = ((height as f64 * scale).round() as u32).clamp(1, max_h.min(height));

    (new_w, new_h)
}

/// Resizes `src` to exactly `dst_w`x`dst_h`.
///
/// Two separable passes (horizontal then vertical) run on f32 samples; the
/// result is rounded and clamped back to bytes. Alpha is filtered like the
/// color channels.
///
/// # Errors
///
/// [`OpsError::InvalidDimensions`] if the source is empty or a destination
/// side is 0.
pub fn resize(src: &Raster, dst_w: u32, dst_h: u32, filter: Filter) -> OpsResult<Raster> {
    trace!(
        src_w = src.width(),
        src_h = src.height(),
        dst_w,
        dst_h,
        %filter,
        "resize"
    );

    if src.is_empty() {
        return Err(OpsError::InvalidDimensions("cannot resize an empty image".into()));
    }
    if dst_w == 0 || dst_h == 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "destination size must be > 0, got {}x{}",
            dst_w, dst_h
        )));
    }
    if src.dimensions() == (dst_w, dst_h) {
        return Ok(src.clone());
    }

    let (src_w, src_h) = (src.width() as usize, src.height() as usize);
    let samples: Vec<f32> = src.data().iter().map(|&v| v as f32).collect();

    let temp = resize_horizontal(&samples, src_w, src_h, dst_w as usize, filter);
    let out = resize_vertical(&temp, dst_w as usize, src_h, dst_h as usize, filter);

    let bytes = out.into_iter().map(clamp_u8).collect();
    Ok(Raster::from_rgba(dst_w, dst_h, bytes)?)
}

/// Scales `src` down to fit the canvas, or returns a copy if it already fits.
pub fn fit_to_canvas(src: &Raster, max_w: u32, max_h: u32, filter: Filter) -> OpsResult<Raster> {
    if src.is_empty() {
        return Ok(src.clone());
    }
    let (w, h) = fit_dimensions(src.width(), src.height(), max_w, max_h);
    if (w, h) == src.dimensions() {
        return Ok(src.clone());
    }
    debug!(
        from = %format!("{}x{}", src.width(), src.height()),
        to = %format!("{}x{}", w, h),
        "Fitting image to canvas"
    );
    resize(src, w, h, filter)
}

/// Source taps for one output sample: first index and weights.
///
/// Weights are normalized. When the kernel misses every tap (nearest filter
/// with the center exactly between two samples) the closest sample wins.
fn taps(center: f32, scale: f32, src_len: usize, filter: Filter) -> (usize, Vec<f32>) {
    let stretch = scale.max(1.0);
    let support = filter.support() * stretch;
    let last = src_len - 1;

    let first = ((center - support).floor().max(0.0) as usize).min(last);
    let end = ((center + support).ceil().max(0.0) as usize).min(last);

    let mut weights: Vec<f32> = (first..=end)
        .map(|s| filter.weight((s as f32 - center) / stretch))
        .collect();
    let sum: f32 = weights.iter().sum();

    if sum > 0.0 {
        for w in &mut weights {
            *w /= sum;
        }
        (first, weights)
    } else {
        let nearest = (center.round().max(0.0) as usize).min(last);
        (nearest, vec![1.0])
    }
}

fn resize_horizontal(src: &[f32], src_w: usize, src_h: usize, dst_w: usize, filter: Filter) -> Vec<f32> {
    let mut dst = vec![0.0f32; dst_w * src_h * CHANNELS];
    let scale = src_w as f32 / dst_w as f32;

    for x in 0..dst_w {
        let center = (x as f32 + 0.5) * scale - 0.5;
        let (first, weights) = taps(center, scale, src_w, filter);

        for y in 0..src_h {
            let mut sum = [0.0f32; CHANNELS];
            for (i, &w) in weights.iter().enumerate() {
                let idx = (y * src_w + first + i) * CHANNELS;
                for c in 0..CHANNELS {
                    sum[c] += src[idx + c] * w;
                }
            }
            let dst_idx = (y * dst_w + x) * CHANNELS;
            dst[dst_idx..dst_idx + CHANNELS].copy_from_slice(&sum);
        }
    }

    dst
}

fn resize_vertical(src: &[f32], src_w: usize, src_h: usize, dst_h: usize, filter: Filter) -> Vec<f32> {
    let mut dst = vec![0.0f32; src_w * dst_h * CHANNELS];
    let scale = src_h as f32 / dst_h as f32;

    for y in 0..dst_h {
        let center = (y as f32 + 0.5) * scale - 0.5;
        let (first, weights) = taps(center, scale, src_h, filter);

        for x in 0..src_w {
            let mut sum = [0.0f32; CHANNELS];
            for (i, &w) in weights.iter().enumerate() {
                let idx = ((first + i) * src_w + x) * CHANNELS;
                for c in 0..CHANNELS {
                    sum[c] += src[idx + c] * w;
                }
            }
            let dst_idx = (y * src_w + x) * CHANNELS;
            dst[dst_idx..dst_idx + CHANNELS].copy_from_slice(&sum);
        }
    }

    dst
}
