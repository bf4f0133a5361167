//! CLI command implementations

pub mod crop;
pub mod fit;
pub mod info;
pub mod rotate;
pub mod scale;
pub mod spectrum;

use anyhow::{Context, Result};
use photon_edit::{Editor, EditorConfig, LogNotifier};
use std::path::Path;

/// Load the editor config, or defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(EditorConfig::default()),
    }
}

/// Start a session with `input` loaded.
pub fn open_editor(config: EditorConfig, input: &Path) -> Result<Editor<LogNotifier>> {
    let mut editor = Editor::with_config(config, LogNotifier).context("Invalid editor config")?;
    editor
        .open(input)
        .with_context(|| format!("Failed to load: {}", input.display()))?;
    Ok(editor)
}

/// Write the session's image to `output`.
pub fn save(editor: &mut Editor<LogNotifier>, output: &Path) -> Result<()> {
    editor
        .save(output)
        .with_context(|| format!("Failed to save: {}", output.display()))
}
