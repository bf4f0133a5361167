//! Crop command

use crate::CropArgs;
use anyhow::{bail, Context, Result};
use photon_core::Rect;
use photon_edit::EditorConfig;
use photon_ops::CropSelection;
use tracing::info;

pub fn run(args: CropArgs, config: EditorConfig) -> Result<()> {
    let mut editor = super::open_editor(config, &args.input)?;

    let region = match &args.select {
        Some(corners) => {
            let [x0, y0, x1, y1] = parse_corners(corners)?;
            let display = editor
                .display_dimensions()
                .context("No image loaded")?;
            let selection = CropSelection::from_corners([x0, y0], [x1, y1]);
            editor.crop_selection(&selection, display)?
        }
        None => {
            let (Some(x), Some(y), Some(w), Some(h)) = (args.x, args.y, args.w, args.h) else {
                bail!("crop needs -x, -y, -w and -H, or --select");
            };
            let region = Rect::new(x, y, w, h);
            editor.crop(region)?;
            region
        }
    };

    info!(%region, "Cropped");
    super::save(&mut editor, &args.output)
}

/// Parses `x0,y0,x1,y1`.
fn parse_corners(text: &str) -> Result<[f32; 4]> {
    let values: Vec<f32> = text
        .split(',')
        .map(|s| s.trim().parse::<f32>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("Invalid selection '{}'", text))?;

    match values.as_slice() {
        &[x0, y0, x1, y1] => Ok([x0, y0, x1, y1]),
        _ => bail!("Selection needs 4 values x0,y0,x1,y1, got {}", values.len()),
    }
}
