//! Presentation boundary for spectrum images.
//!
//! The analyzer produces a frame; something else shows it. Frames carry the
//! session generation they were computed from, so a surface that receives
//! results out of order can drop the stale ones.

use photon_core::Raster;
use photon_io::IoError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Monotonic edit counter of an editing session.
pub type Generation = u64;

/// One analyzer result ready for display.
#[derive(Debug, Clone)]
pub struct SpectrumFrame {
    /// Centered log-magnitude view, same size as the analyzed image.
    pub image: Raster,
    /// Largest magnitude in the spectrum (what maps to 255).
    pub max: f32,
    /// Session generation the frame was computed from.
    pub generation: Generation,
}

/// Failure of a presentation surface.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The surface could not be opened or has gone away.
    #[error("presentation surface unavailable: {0}")]
    Unavailable(String),

    /// Writing the frame out failed.
    #[error("failed to write spectrum: {0}")]
    Write(#[from] IoError),
}

/// Something that can show a spectrum frame.
pub trait SpectrumView {
    /// Shows `frame`, replacing whatever was shown before.
    fn present(&mut self, frame: &SpectrumFrame) -> Result<(), ViewError>;
}

impl<V: SpectrumView + ?Sized> SpectrumView for &mut V {
    fn present(&mut self, frame: &SpectrumFrame) -> Result<(), ViewError> {
        (**self).present(frame)
    }
}

/// Writes each frame to a PNG file.
///
/// Frames older than the last one written are skipped.
#[derive(Debug, Clone)]
pub struct PngFileView {
    path: PathBuf,
    last: Option<Generation>,
}

impl PngFileView {
    /// Creates a view writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last: None,
        }
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Generation of the last frame written.
    pub fn last_generation(&self) -> Option<Generation> {
        self.last
    }
}

impl SpectrumView for PngFileView {
    fn present(&mut self, frame: &SpectrumFrame) -> Result<(), ViewError> {
        if self.last.is_some_and(|g| frame.generation < g) {
            debug!(frame = frame.generation, last = ?self.last, "Dropping stale spectrum frame");
            return Ok(());
        }
        photon_io::write(&self.path, &frame.image)?;
        self.last = Some(frame.generation);
        Ok(())
    }
}

/// Keeps the newest frame in memory.
#[derive(Debug, Clone, Default)]
pub struct LatestFrame {
    frame: Option<SpectrumFrame>,
}

impl LatestFrame {
    /// Creates an empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The newest frame presented so far.
    pub fn frame(&self) -> Option<&SpectrumFrame> {
        self.frame.as_ref()
    }

    /// Takes the frame out.
    pub fn take(&mut self) -> Option<SpectrumFrame> {
        self.frame.take()
    }
}

impl SpectrumView for LatestFrame {
    fn present(&mut self, frame: &SpectrumFrame) -> Result<(), ViewError> {
        let stale = self
            .frame
            .as_ref()
            .is_some_and(|f| frame.generation < f.generation);
        if !stale {
            self.frame = Some(frame.clone());
        }
        Ok(())
    }
}
