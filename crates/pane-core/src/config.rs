// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves solver settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::files::{app_file, write_creating_dirs};

/// Fractional digits used for size comparisons and rounding.
pub const DEFAULT_PRECISION: u32 = 4;

/// Percentage a keyboard resize moves a handle by
pub const DEFAULT_KEYBOARD_STEP: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fractional digits kept when comparing and rounding pane sizes
    pub precision: u32,

    /// Percentage moved by one arrow-key press on a resize handle
    pub keyboard_step: f64,

    /// Restore and save group layouts through the layout store
    pub persist_layouts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            keyboard_step: DEFAULT_KEYBOARD_STEP,
            persist_layouts: false,
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
}

impl Config {
    /// Get the default config file path (~/.config/splitpane/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        app_file(dirs::config_dir(), "config.toml")
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
        let content = toml::to_string_pretty(self)?;
        write_creating_dirs(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.precision, 4);
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            precision: 6,
            keyboard_step: 5.0,
            persist_layouts: true,
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "precision = \"four\"").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn default_path_is_namespaced() {
        if let Some(p) = Config::default_path() {
            assert!(p.ends_with("splitpane/config.toml"));
        }
    }
}
