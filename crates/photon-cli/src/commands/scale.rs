//! Channel scale command

use crate::ScaleArgs;
use anyhow::Result;
use photon_edit::EditorConfig;

pub fn run(args: ScaleArgs, config: EditorConfig) -> Result<()> {
    let mut editor = super::open_editor(config, &args.input)?;
    editor.scale_channels(args.rgb)?;
    super::save(&mut editor, &args.output)
}
