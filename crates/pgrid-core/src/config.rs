// ABOUTME: Grid configuration handling.
// ABOUTME: Loads and saves layout settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Total width available to the grid, in pixels
    pub extent: u32,

    /// Width of the divider drawn between two panes
    pub handle_size: u32,

    /// Redistribute panes evenly on resize instead of keeping their proportions
    pub reflow_on_resize: bool,

    /// Remove a pane automatically once its last view is closed
    pub collapse_empty_panes: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            extent: 1200,
            handle_size: 0,
            reflow_on_resize: false,
            collapse_empty_panes: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigPath,
}

impl GridConfig {
    /// Get the default config file path (~/.config/pane-grid/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pane-grid").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigPath)?;
        self.save(&path)?;
        Ok(path)
    }
}
