//! Fit-to-canvas command

use crate::FitArgs;
use anyhow::{Context, Result};
use photon_edit::EditorConfig;

pub fn run(args: FitArgs, mut config: EditorConfig) -> Result<()> {
    if let Some(w) = args.max_width {
        config.canvas_max_width = w;
    }
    if let Some(h) = args.max_height {
        config.canvas_max_height = h;
    }
    if let Some(filter) = args.filter {
        config.display_filter = filter;
    }

    let mut editor = super::open_editor(config, &args.input)?;
    let shown = editor.display_image()?;
    photon_io::write(&args.output, &shown)
        .with_context(|| format!("Failed to save: {}", args.output.display()))
}
