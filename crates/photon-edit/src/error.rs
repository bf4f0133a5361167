//! Error types for the editing session.

use crate::config::ConfigError;
use crate::view::ViewError;
use photon_io::IoError;
use photon_ops::OpsError;
use thiserror::Error;

/// Result type for editor operations.
pub type EditResult<T> = Result<T, EditError>;

/// Editor operation error.
#[derive(Debug, Error)]
pub enum EditError {
    /// The operation needs an image and none is loaded.
    #[error("no image loaded")]
    NoImage,

    /// A crop selection covered no pixels.
    #[error("crop selection is empty")]
    EmptySelection,

    /// An image operation failed.
    #[error(transparent)]
    Ops(#[from] OpsError),

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// The presentation surface failed.
    #[error(transparent)]
    View(#[from] ViewError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
