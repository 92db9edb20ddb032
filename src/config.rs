//! Overlay configuration
//!
//! Style and key bindings stored as pretty JSON in the user's config
//! directory. A missing file is not an error; the defaults are used.

use crate::input_system::KeyBindings;
use crate::style::MenuStyle;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR_NAME: &str = "menu_overlay";
const CONFIG_FILE_NAME: &str = "overlay.json";

/// Errors from loading or saving the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No config directory available on this platform")]
    NoConfigDir,
}

/// Everything the overlay reads from disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub style: MenuStyle,
    pub key_bindings: KeyBindings,
}

impl OverlayConfig {
    /// `<config dir>/menu_overlay/overlay.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        path.push(CONFIG_DIR_NAME);
        path.push(CONFIG_FILE_NAME);
        Ok(path)
    }

    /// Loads from the default location, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Ok(path) => Self::load_from(path),
            Err(ConfigError::NoConfigDir) => {
                warn!("No config directory, using default overlay config");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Loads from `path`; a missing file yields the defaults
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            info!("No overlay config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes pretty JSON to `path`, creating parent directories
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(io_error)?;

        info!("Overlay config saved to {}", path.display());
        Ok(())
    }

    /// Saves to the default location
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path()?;
        self.save_to(&path)?;
        Ok(path)
    }
}
