//! Rotate command

use crate::RotateArgs;
use anyhow::Result;
use photon_edit::EditorConfig;
use tracing::info;

pub fn run(args: RotateArgs, config: EditorConfig) -> Result<()> {
    let mut editor = super::open_editor(config, &args.input)?;
    editor.rotate(args.angle)?;

    if let Some(img) = editor.image() {
        info!(angle = %args.angle, width = img.width(), height = img.height(), "Rotated");
    }
    super::save(&mut editor, &args.output)
}
