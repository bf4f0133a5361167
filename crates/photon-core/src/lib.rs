//! # photon-core
//!
//! Core types shared by every photon crate.
//!
//! - [`Raster`] - Owned RGBA8 pixel buffer, row-major, origin top-left
//! - [`Surface`] - Anything that can hand out RGBA data for a rectangle
//! - [`Rect`] - Pixel rectangle used for crops and region reads
//! - [`pixel`] - Luma weights and byte clamping
//!
//! ## Crate Structure
//!
//! ```text
//! photon-core (this crate)
//!    ^
//!    |
//!    +-- photon-ops (spectrum, rotate, crop, channel scaling, resize)
//!    +-- photon-io (PNG)
//!    +-- photon-edit (editing session)
//!    +-- photon-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod raster;
pub mod rect;

pub use error::*;
pub use pixel::{clamp_u8, luma_rec601, REC601_LUMA, REC601_LUMA_B, REC601_LUMA_G, REC601_LUMA_R};
pub use raster::{Raster, Surface, CHANNELS};
pub use rect::*;

/// Prelude module for convenient imports.
///
/// ```
/// use photon_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{clamp_u8, luma_rec601};
    pub use crate::raster::{Raster, Surface};
    pub use crate::rect::Rect;
}
