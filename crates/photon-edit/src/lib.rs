//! # photon-edit
//!
//! The editing session behind the photon editor.
//!
//! - [`Editor`] - Current image, edits, spectrum, export
//! - [`Notifier`] - Where user-facing messages go
//! - [`SpectrumView`] - Where spectrum frames go
//! - [`EditorConfig`] - Canvas size and display filter, from YAML
//!
//! The crate owns no window or event loop. Embedders plug in their own
//! notifier and view; the `photon` CLI uses [`LogNotifier`] and
//! [`PngFileView`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod editor;
mod error;
pub mod notify;
pub mod view;

pub use config::{ConfigError, EditorConfig};
pub use editor::Editor;
pub use error::{EditError, EditResult};
pub use notify::{Level, LogNotifier, MemoryNotifier, Notifier};
pub use view::{Generation, LatestFrame, PngFileView, SpectrumFrame, SpectrumView, ViewError};
