//! Editor configuration.
//!
//! Loaded from YAML; every field is optional:
//!
//! ```yaml
//! canvas_max_width: 1280
//! canvas_max_height: 720
//! display_filter: nearest
//! ```

use photon_ops::resize::Filter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file not found.
    #[error("config file not found: {path}")]
    NotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Widest the display canvas may be.
    pub canvas_max_width: u32,
    /// Tallest the display canvas may be.
    pub canvas_max_height: u32,
    /// Resampling filter for the display copy: `nearest` or `bilinear`.
    pub display_filter: Filter,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_max_width: 1024,
            canvas_max_height: 768,
            display_filter: Filter::Bilinear,
        }
    }
}

impl EditorConfig {
    /// Loads and validates a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses and validates YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_max_width == 0 || self.canvas_max_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.canvas_max_width, self.canvas_max_height
            )));
        }
        Ok(())
    }

    /// Canvas bounds as `(width, height)`.
    pub fn canvas(&self) -> (u32, u32) {
        (self.canvas_max_width, self.canvas_max_height)
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
