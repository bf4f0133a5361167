//! # photon-ops
//!
//! Image operations behind the photon editor.
//!
//! # Modules
//!
//! - [`fft`] - Radix-2 FFT, 1D and separable 2D
//! - [`spectrum`] - Grayscale conversion, magnitude spectrum, log-scaled centered view
//! - [`transform`] - Quarter-turn rotation and rectangular crop
//! - [`crop`] - Mapping a dragged display-space selection to image pixels
//! - [`adjust`] - Per-channel RGB scaling
//! - [`resize`] - Fitting an image onto a display canvas
//!
//! # Example
//!
//! ```rust
//! use photon_core::Raster;
//! use photon_ops::spectrum::analyze;
//!
//! let img = Raster::filled(2, 2, [255, 255, 255, 255]);
//! let analysis = analyze(&img);
//! assert_eq!(analysis.image.pixel(1, 1), [255, 255, 255, 255]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod adjust;
pub mod crop;
pub mod fft;
pub mod resize;
pub mod spectrum;
pub mod transform;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use adjust::ChannelScale;
pub use crop::CropSelection;
pub use error::{OpsError, OpsResult};
pub use fft::ComplexField;
pub use resize::Filter;
pub use spectrum::{GrayField, MagnitudeSpectrum, SpectrumAnalysis};
pub use transform::Rotation;
