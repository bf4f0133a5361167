//! Spectrum command

use crate::SpectrumArgs;
use anyhow::{Context, Result};
use photon_edit::{EditorConfig, PngFileView};
use std::time::Instant;
use tracing::debug;

pub fn run(args: SpectrumArgs, config: EditorConfig) -> Result<()> {
    let mut editor = super::open_editor(config, &args.input)?;
    let mut view = PngFileView::new(&args.output);

    let start = Instant::now();
    editor
        .show_spectrum(&mut view)
        .with_context(|| format!("Failed to write spectrum: {}", args.output.display()))?;
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "Spectrum done");

    Ok(())
}
