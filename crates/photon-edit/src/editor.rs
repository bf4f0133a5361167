//! The editing session.
//!
//! An [`Editor`] holds at most one image. Every edit replaces it and bumps
//! the session [`Generation`]. Outcomes are reported twice: as a `Result`
//! for the caller and as a notification for the user.
//!
//! # Example
//!
//! ```rust
//! use photon_core::Raster;
//! use photon_edit::{Editor, LatestFrame, MemoryNotifier};
//! use photon_ops::Rotation;
//!
//! let mut editor = Editor::new(MemoryNotifier::new());
//! editor.load(Raster::filled(8, 4, [200, 100, 50, 255]));
//! editor.rotate(Rotation::Cw90).unwrap();
//!
//! let mut view = LatestFrame::new();
//! editor.show_spectrum(&mut view).unwrap();
//! assert_eq!(view.frame().unwrap().image.dimensions(), (4, 8));
//! ```

use crate::config::EditorConfig;
use crate::notify::{Level, Notifier};
use crate::view::{Generation, SpectrumFrame, SpectrumView};
use crate::{EditError, EditResult};
use photon_core::{Raster, Rect};
use photon_ops::adjust::{self, ChannelScale};
use photon_ops::crop::CropSelection;
use photon_ops::resize::{fit_dimensions, fit_to_canvas};
use photon_ops::spectrum;
use photon_ops::transform::{self, Rotation};
use std::path::Path;
use tracing::{debug, trace};

/// Single-image editing session.
#[derive(Debug)]
pub struct Editor<N: Notifier> {
    config: EditorConfig,
    image: Option<Raster>,
    generation: Generation,
    notifier: N,
}

impl<N: Notifier> Editor<N> {
    /// Creates a session with the default configuration.
    pub fn new(notifier: N) -> Self {
        Self {
            config: EditorConfig::default(),
            image: None,
            generation: 0,
            notifier,
        }
    }

    /// Creates a session with `config`.
    ///
    /// # Errors
    ///
    /// [`EditError::Config`] if the configuration does not validate.
    pub fn with_config(config: EditorConfig, notifier: N) -> EditResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            image: None,
            generation: 0,
            notifier,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Current image, if any.
    pub fn image(&self) -> Option<&Raster> {
        self.image.as_ref()
    }

    /// Returns `true` if an image is loaded.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Edit counter; changes whenever the image does.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The notification sink.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable access to the notification sink.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Ends the session, returning the notifier.
    pub fn into_notifier(self) -> N {
        self.notifier
    }

    /// Replaces the current image.
    pub fn load(&mut self, raster: Raster) {
        let msg = format!("Loaded {}x{} image", raster.width(), raster.height());
        self.replace(raster);
        self.notifier.notify(Level::Info, &msg);
    }

    /// Decodes PNG bytes and loads the result.
    pub fn load_png(&mut self, bytes: &[u8]) -> EditResult<()> {
        let raster = self.report("Could not decode image", photon_io::png::decode(bytes))?;
        self.load(raster);
        Ok(())
    }

    /// Reads an image file and loads it.
    pub fn open(&mut self, path: impl AsRef<Path>) -> EditResult<()> {
        let path = path.as_ref();
        let raster = self.report(
            &format!("Could not open {}", path.display()),
            photon_io::read(path),
        )?;
        self.load(raster);
        Ok(())
    }

    /// Rotates the current image.
    pub fn rotate(&mut self, rotation: Rotation) -> EditResult<()> {
        let out = transform::rotate(self.require_image("rotate")?, rotation);
        self.replace(out);
        self.notifier.notify(Level::Info, &format!("Rotated {}", rotation));
        Ok(())
    }

    /// Crops the current image to `region` (image pixels).
    pub fn crop(&mut self, region: Rect) -> EditResult<()> {
        let result = transform::crop(self.require_image("crop")?, region);
        let out = self.report("Crop failed", result)?;
        self.replace(out);
        self.notifier.notify(Level::Info, &format!("Cropped to {}", region));
        Ok(())
    }

    /// Crops to a selection dragged on a `display_dims`-sized view of the image.
    ///
    /// Returns the image rectangle that was applied.
    pub fn crop_selection(&mut self, selection: &CropSelection, display_dims: (u32, u32)) -> EditResult<Rect> {
        let dims = self.require_image("crop")?.dimensions();
        let Some(region) = selection.to_image_rect(display_dims, dims) else {
            self.notifier.notify(Level::Warning, "Select an area to crop first");
            return Err(EditError::EmptySelection);
        };
        debug!(?display_dims, %region, "Mapped crop selection");
        self.crop(region)?;
        Ok(region)
    }

    /// Multiplies the R, G and B channels.
    pub fn scale_channels(&mut self, scale: ChannelScale) -> EditResult<()> {
        let out = adjust::scale_channels(self.require_image("adjust colors")?, scale);
        self.replace(out);
        self.notifier.notify(
            Level::Info,
            &format!("Scaled channels by {}, {}, {}", scale.r, scale.g, scale.b),
        );
        Ok(())
    }

    /// Size the current image is shown at on the canvas.
    pub fn display_dimensions(&self) -> Option<(u32, u32)> {
        let (max_w, max_h) = self.config.canvas();
        self.image
            .as_ref()
            .map(|img| fit_dimensions(img.width(), img.height(), max_w, max_h))
    }

    /// Copy of the current image scaled to fit the canvas.
    pub fn display_image(&mut self) -> EditResult<Raster> {
        let (max_w, max_h) = self.config.canvas();
        let filter = self.config.display_filter;
        let result = fit_to_canvas(self.require_image("display")?, max_w, max_h, filter);
        self.report("Could not prepare display image", result)
    }

    /// Computes the spectrum of the current image and hands it to `view`.
    ///
    /// Refuses with a warning when nothing is loaded. A failing view is
    /// reported as an error notification and returned, never propagated as
    /// a panic.
    pub fn show_spectrum<V: SpectrumView + ?Sized>(&mut self, view: &mut V) -> EditResult<()> {
        let analysis = match self.image.as_ref() {
            Some(img) => spectrum::analyze(img),
            None => {
                self.notifier.notify(Level::Warning, "Load an image before viewing its spectrum");
                return Err(EditError::NoImage);
            }
        };

        let frame = SpectrumFrame {
            max: analysis.magnitude.max(),
            image: analysis.image,
            generation: self.generation,
        };
        trace!(generation = frame.generation, max = frame.max, "show_spectrum");

        match view.present(&frame) {
            Ok(()) => {
                let (w, h) = frame.image.dimensions();
                self.notifier
                    .notify(Level::Success, &format!("Spectrum ready ({}x{})", w, h));
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .notify(Level::Error, &format!("Could not show spectrum: {}", e));
                Err(e.into())
            }
        }
    }

    /// Encodes the current image as PNG.
    pub fn export_png(&mut self) -> EditResult<Vec<u8>> {
        let result = photon_io::png::encode(self.require_image("export")?);
        self.report("Export failed", result)
    }

    /// Writes the current image to `path`.
    pub fn save(&mut self, path: impl AsRef<Path>) -> EditResult<()> {
        let path = path.as_ref();
        let result = photon_io::write(path, self.require_image("save")?);
        self.report(&format!("Could not save {}", path.display()), result)?;
        self.notifier
            .notify(Level::Success, &format!("Saved {}", path.display()));
        Ok(())
    }

    fn replace(&mut self, raster: Raster) {
        self.image = Some(raster);
        self.generation += 1;
        trace!(generation = self.generation, "Image replaced");
    }

    /// The current image, or a warning and [`EditError::NoImage`].
    fn require_image(&mut self, action: &str) -> EditResult<&Raster> {
        if self.image.is_none() {
            self.notifier
                .notify(Level::Warning, &format!("Load an image before you {}", action));
        }
        self.image.as_ref().ok_or(EditError::NoImage)
    }

    /// Notifies failures as errors and converts them.
    fn report<T, E>(&mut self, what: &str, result: Result<T, E>) -> EditResult<T>
    where
        E: Into<EditError>,
    {
        result.map_err(|e| {
            let err = e.into();
            self.notifier.notify(Level::Error, &format!("{}: {}", what, err));
            err
        })
    }
}
