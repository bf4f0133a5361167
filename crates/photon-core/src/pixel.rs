//! Per-pixel helpers: luma weights and byte clamping.
//!
//! The spectrum path uses the Rec.601 weights (`0.299, 0.587, 0.114`), which
//! is what browsers and most photo tools apply to sRGB bytes when they ask
//! for "grayscale".

/// Rec.601 luma coefficient for the red channel.
pub const REC601_LUMA_R: f32 = 0.299;

/// Rec.601 luma coefficient for the green channel.
pub const REC601_LUMA_G: f32 = 0.587;

/// Rec.601 luma coefficient for the blue channel.
pub const REC601_LUMA_B: f32 = 0.114;

/// Rec.601 luma coefficients as an array [R, G, B].
pub const REC601_LUMA: [f32; 3] = [REC601_LUMA_R, REC601_LUMA_G, REC601_LUMA_B];

/// Weighted luma of 8-bit sRGB values, still on the 0..=255 scale.
///
/// # Example
/// ```
/// use photon_core::luma_rec601;
///
/// assert!((luma_rec601(255, 255, 255) - 255.0).abs() < 1e-3);
/// assert_eq!(luma_rec601(0, 0, 0), 0.0);
/// ```
#[inline]
pub fn luma_rec601(r: u8, g: u8, b: u8) -> f32 {
    REC601_LUMA_R * r as f32 + REC601_LUMA_G * g as f32 + REC601_LUMA_B * b as f32
}

/// Rounds a channel value and clamps it into a byte.
///
/// NaN maps to 0.
///
/// ```
/// use photon_core::clamp_u8;
///
/// assert_eq!(clamp_u8(-3.0), 0);
/// assert_eq!(clamp_u8(127.5), 128);
/// assert_eq!(clamp_u8(300.0), 255);
/// ```
#[inline]
pub fn clamp_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}
