//! RGBA8 raster buffer and the [`Surface`] read boundary.
//!
//! A [`Raster`] is the unit every edit and the spectrum analyzer consume:
//! 8-bit sRGB samples, 4 channels, row-major, origin top-left, no padding
//! between rows.
//!
//! # Example
//!
//! ```rust
//! use photon_core::{Raster, Rect, Surface};
//!
//! let mut img = Raster::filled(4, 4, [255, 0, 0, 255]);
//! img.set_pixel(1, 1, [0, 0, 255, 255]);
//!
//! let region = img.read_region(Rect::new(1, 1, 2, 2)).unwrap();
//! assert_eq!(region.pixel(0, 0), [0, 0, 255, 255]);
//! ```

use crate::{Error, Rect, Result};

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Owned RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Byte length of a `width`x`height` RGBA buffer, overflow-checked.
fn byte_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflows usize"))
}

impl Raster {
    /// Creates a transparent black raster.
    ///
    /// # Panics
    ///
    /// Panics if the byte size of `width`x`height` overflows `usize`.
    /// [`Raster::from_rgba`] reports that case as an error instead.
    pub fn new(width: u32, height: u32) -> Self {
        let len = match byte_len(width, height) {
            Ok(len) => len,
            Err(e) => panic!("Raster::new: {e}"),
        };
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Creates a raster where every pixel is `pixel`.
    ///
    /// ```rust
    /// use photon_core::Raster;
    ///
    /// let white = Raster::filled(2, 2, [255; 4]);
    /// assert!(white.data().iter().all(|&b| b == 255));
    /// ```
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Self {
        let mut img = Self::new(width, height);
        for px in img.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&pixel);
        }
        img
    }

    /// Wraps existing RGBA bytes.
    ///
    /// # Errors
    ///
    /// [`Error::BufferSize`] if `data.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                width,
                height,
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the raster has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Full-image rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the raster, returning its bytes.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Pixel at (x, y), or `None` outside the image.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width && y < self.height).then(|| self.pixel(x, y))
    }

    /// Writes the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [u8; 4]) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&pixel);
    }

    /// Bytes of row `y`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = self.offset(0, y);
        &self.data[start..start + self.width as usize * CHANNELS]
    }

    /// Iterates `(x, y, [r, g, b, a])` row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [u8; 4])> + '_ {
        let w = self.width.max(1);
        self.data
            .chunks_exact(CHANNELS)
            .enumerate()
            .map(move |(i, px)| {
                let i = i as u32;
                (i % w, i / w, [px[0], px[1], px[2], px[3]])
            })
    }
}

/// A surface that can hand out RGBA bytes for a rectangle of known size.
///
/// The analyzer and the editor read images through this trait so the
/// pixels can live in whatever the host owns (a canvas, a decoded file,
/// a test fixture). Each read returns an owned snapshot.
pub trait Surface {
    /// `(width, height)` of the surface.
    fn dimensions(&self) -> (u32, u32);

    /// Copies the RGBA pixels of `region` into a new raster.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRegion`] if `region` is not inside the surface.
    fn read_region(&self, region: Rect) -> Result<Raster>;

    /// Copies the whole surface.
    fn snapshot(&self) -> Result<Raster> {
        let (w, h) = self.dimensions();
        self.read_region(Rect::from_size(w, h))
    }
}

impl Surface for Raster {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn read_region(&self, region: Rect) -> Result<Raster> {
        if !self.bounds().contains_rect(&region) {
            return Err(Error::invalid_region(
                region.x,
                region.y,
                region.width,
                region.height,
                self.width,
                self.height,
            ));
        }

        let row_bytes = region.width as usize * CHANNELS;
        let mut data = Vec::with_capacity(row_bytes * region.height as usize);
        for y in region.y..region.bottom() {
            let start = self.offset(region.x, y);
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }

        Raster::from_rgba(region.width, region.height, data)
    }
}
