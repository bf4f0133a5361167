//! Interactive crop selection.
//!
//! The editor shows the image scaled onto a display canvas and the user
//! drags a rectangle there. [`CropSelection`] records the drag in display
//! coordinates; [`CropSelection::to_image_rect`] turns it into the pixel
//! rectangle to cut from the full-resolution image.
//!
//! Mapping rules:
//! - corners may be dragged in any direction
//! - display → image scale is `image / display` per axis
//! - the result is clamped to the image
//! - the origin is floored and the far edge ceiled, so every touched pixel
//!   is kept
//! - a click without a drag selects nothing
//!
//! # Example
//!
//! ```rust
//! use photon_core::Rect;
//! use photon_ops::crop::CropSelection;
//!
//! // 4000x3000 photo shown at 800x600.
//! let mut sel = CropSelection::begin([100.0, 50.0]);
//! sel.update([300.0, 250.0]);
//!
//! let rect = sel.to_image_rect((800, 600), (4000, 3000)).unwrap();
//! assert_eq!(rect, Rect::new(500, 250, 1000, 1000));
//! ```

use photon_core::Rect;

/// A drag from `anchor` to `cursor`, in display-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CropSelection {
    anchor: [f32; 2],
    cursor: [f32; 2],
}

impl CropSelection {
    /// Starts a selection at `point` (pointer down).
    pub fn begin(point: [f32; 2]) -> Self {
        Self {
            anchor: point,
            cursor: point,
        }
    }

    /// Builds a finished selection from both corners.
    pub fn from_corners(anchor: [f32; 2], cursor: [f32; 2]) -> Self {
        Self { anchor, cursor }
    }

    /// Moves the free corner (pointer move).
    pub fn update(&mut self, point: [f32; 2]) {
        self.cursor = point;
    }

    /// Where the drag started.
    pub fn anchor(&self) -> [f32; 2] {
        self.anchor
    }

    /// Where the pointer is now.
    pub fn cursor(&self) -> [f32; 2] {
        self.cursor
    }

    /// `(min, max)` corners in display space.
    pub fn display_bounds(&self) -> ([f32; 2], [f32; 2]) {
        (
            [self.anchor[0].min(self.cursor[0]), self.anchor[1].min(self.cursor[1])],
            [self.anchor[0].max(self.cursor[0]), self.anchor[1].max(self.cursor[1])],
        )
    }

    /// Returns `true` if the drag covers no area.
    pub fn is_degenerate(&self) -> bool {
        let (min, max) = self.display_bounds();
        !(max[0] - min[0] > 0.0 && max[1] - min[1] > 0.0)
    }

    /// Pixel rectangle in the full-size image.
    ///
    /// `display` is the size the image is drawn at, `image` its real size.
    /// Returns `None` for a degenerate drag, a selection entirely outside
    /// the image, or zero-sized inputs.
    pub fn to_image_rect(&self, display: (u32, u32), image: (u32, u32)) -> Option<Rect> {
        if display.0 == 0 || display.1 == 0 || image.0 == 0 || image.1 == 0 {
            return None;
        }
        if self.is_degenerate() {
            return None;
        }

        let (min, max) = self.display_bounds();
        let min = display_to_image(min, display, image);
        let max = display_to_image(max, display, image);

        let x0 = min[0].floor().clamp(0.0, image.0 as f32) as u32;
        let y0 = min[1].floor().clamp(0.0, image.1 as f32) as u32;
        let x1 = max[0].ceil().clamp(0.0, image.0 as f32) as u32;
        let y1 = max[1].ceil().clamp(0.0, image.1 as f32) as u32;

        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
    }
}

/// Maps a display-space point to image-space coordinates (unclamped).
///
/// ```rust
/// use photon_ops::crop::display_to_image;
///
/// assert_eq!(display_to_image([50.0, 25.0], (100, 50), (400, 200)), [200.0, 100.0]);
/// ```
pub fn display_to_image(point: [f32; 2], display: (u32, u32), image: (u32, u32)) -> [f32; 2] {
    let sx = image.0 as f32 / display.0.max(1) as f32;
    let sy = image.1 as f32 / display.1.max(1) as f32;
    [point[0] * sx, point[1] * sy]
}
