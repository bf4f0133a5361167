//! Frequency spectrum of an image, ready for display.
//!
//! Pipeline: RGBA raster → grayscale field → 2D FFT → magnitude spectrum →
//! log-scaled, center-shifted RGBA view.
//!
//! # Display mapping
//!
//! The zero-frequency bin is moved from the corner to the center
//! ("fftshift"): destination pixel (x, y) reads the magnitude at
//! `((x + W/2) mod W, (y + H/2) mod H)`.
//!
//! Intensity is `floor(255 * ln(1 + mag/max) / ln 2)`, so a zero magnitude
//! is black and the strongest bin is 255. The mapping only affects the view;
//! the [`MagnitudeSpectrum`] keeps the raw values.
//!
//! # Example
//!
//! ```rust
//! use photon_core::Raster;
//! use photon_ops::spectrum::analyze;
//!
//! let img = Raster::filled(8, 8, [200, 200, 200, 255]);
//! let analysis = analyze(&img);
//!
//! // Constant image: all energy in DC, drawn at the center.
//! assert_eq!(analysis.image.pixel(4, 4), [255, 255, 255, 255]);
//! assert_eq!(analysis.image.pixel(0, 0), [0, 0, 0, 255]);
//! ```

use crate::fft::{fft_2d, ComplexField};
use crate::OpsResult;
use photon_core::{luma_rec601, Raster, Surface, CHANNELS};
use std::f64::consts::LN_2;
use tracing::{debug, trace};

/// Grayscale image in [0, 1], one `f32` per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayField {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl GrayField {
    /// Field width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major samples.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Sample at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    /// Moves the samples into the real plane of a complex field.
    pub fn into_complex(self) -> ComplexField {
        ComplexField::from_real_vec(self.data, self.width, self.height)
    }
}

/// Converts RGBA bytes to luma in [0, 1]. Alpha is ignored.
///
/// ```rust
/// use photon_core::Raster;
/// use photon_ops::spectrum::grayscale;
///
/// let red = Raster::filled(1, 1, [255, 0, 0, 255]);
/// assert!((grayscale(&red).get(0, 0) - 0.299).abs() < 1e-6);
/// ```
pub fn grayscale(raster: &Raster) -> GrayField {
    let data = raster
        .data()
        .chunks_exact(CHANNELS)
        .map(|px| luma_rec601(px[0], px[1], px[2]) / 255.0)
        .collect();

    GrayField {
        width: raster.width() as usize,
        height: raster.height() as usize,
        data,
    }
}

/// Per-bin magnitude of a complex field, plus the largest value.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeSpectrum {
    width: usize,
    height: usize,
    data: Vec<f32>,
    max: f32,
}

impl MagnitudeSpectrum {
    /// Spectrum width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Spectrum height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major magnitudes, DC at index 0.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Largest magnitude; 0 for an empty or all-zero spectrum.
    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Magnitude at (x, y) in unshifted coordinates.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }
}

/// `sqrt(re² + im²)` for every bin, tracking the maximum in the same pass.
pub fn magnitude(field: &ComplexField) -> MagnitudeSpectrum {
    let mut max = 0.0f32;
    let data = field
        .re()
        .iter()
        .zip(field.im())
        .map(|(&r, &i)| {
            let m = (r * r + i * i).sqrt();
            max = max.max(m);
            m
        })
        .collect();

    MagnitudeSpectrum {
        width: field.width(),
        height: field.height(),
        data,
        max,
    }
}

/// Source index in an unshifted `w`x`h` spectrum for display pixel (x, y).
///
/// ```rust
/// use photon_ops::spectrum::shifted_source_index;
///
/// // The center of a 4x4 view shows the DC bin.
/// assert_eq!(shifted_source_index(2, 2, 4, 4), 0);
/// // Odd sizes: DC lands at (w - w/2, h - h/2), i.e. rounded up.
/// assert_eq!(shifted_source_index(3, 2, 5, 3), 0);
/// ```
#[inline]
pub fn shifted_source_index(x: usize, y: usize, w: usize, h: usize) -> usize {
    let src_x = (x + w / 2) % w;
    let src_y = (y + h / 2) % h;
    src_y * w + src_x
}

/// Log-compressed display intensity of `mag` relative to `max`.
///
/// Monotonic in `mag`; 0 maps to 0 and `max` maps to 255. Returns 0 when
/// `max` is not positive.
///
/// ```rust
/// use photon_ops::spectrum::log_intensity;
///
/// assert_eq!(log_intensity(0.0, 10.0), 0);
/// assert_eq!(log_intensity(10.0, 10.0), 255);
/// assert_eq!(log_intensity(5.0, 10.0), 149);
/// ```
pub fn log_intensity(mag: f32, max: f32) -> u8 {
    if mag.is_nan() || max.is_nan() || mag <= 0.0 || max <= 0.0 {
        return 0;
    }
    let ratio = mag as f64 / max as f64;
    if ratio >= 1.0 {
        return 255;
    }
    let v = 255.0 * ratio.ln_1p() / LN_2;
    v.floor().clamp(0.0, 255.0) as u8
}

/// Renders the spectrum as an opaque grayscale RGBA raster with DC centered.
pub fn visualize(spectrum: &MagnitudeSpectrum) -> Raster {
    let (w, h) = (spectrum.width, spectrum.height);
    let mut out = Raster::new(w as u32, h as u32);

    for (i, px) in out.data_mut().chunks_exact_mut(CHANNELS).enumerate() {
        let (x, y) = (i % w, i / w);
        let v = log_intensity(spectrum.data[shifted_source_index(x, y, w, h)], spectrum.max);
        px.copy_from_slice(&[v, v, v, 255]);
    }

    out
}

/// Result of one analyzer run.
#[derive(Debug, Clone)]
pub struct SpectrumAnalysis {
    /// Raw magnitudes, DC at the top-left.
    pub magnitude: MagnitudeSpectrum,
    /// Log-scaled, centered view of the same size as the input.
    pub image: Raster,
}

/// Runs the full pipeline on a raster snapshot.
///
/// Every call allocates its own buffers.
pub fn analyze(raster: &Raster) -> SpectrumAnalysis {
    trace!(width = raster.width(), height = raster.height(), "spectrum::analyze");

    let spectrum = fft_2d(grayscale(raster).into_complex());
    let magnitude = magnitude(&spectrum);
    debug!(max = magnitude.max, "Magnitude spectrum computed");

    let image = visualize(&magnitude);
    SpectrumAnalysis { magnitude, image }
}

/// Reads the whole surface and analyzes the snapshot.
///
/// # Errors
///
/// Propagates a failed read from the surface.
pub fn analyze_surface<S: Surface + ?Sized>(surface: &S) -> OpsResult<SpectrumAnalysis> {
    let snapshot = surface.snapshot()?;
    Ok(analyze(&snapshot))
}
