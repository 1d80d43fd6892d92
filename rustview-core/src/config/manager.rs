//! Settings persistence

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::settings::WindowSettings;

/// Directory under the user config dir holding our files.
const CONFIG_DIR_NAME: &str = "rustview";

/// Name of the settings file.
const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Errors that can occur loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform user configuration directory could not be determined.
    #[error("could not determine the user configuration directory")]
    NoConfigDir,

    /// Reading the settings file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the settings file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The file being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`WindowSettings`].
    #[error("invalid settings file {path}: {source}")]
    Parse {
        /// The offending file.
        path: PathBuf,
        /// The TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Serializing settings to TOML failed.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Loads and saves [`WindowSettings`] as TOML.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager over the default settings path
    /// (`<config dir>/rustview/settings.toml`).
    pub fn new() -> ConfigResult<Self> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self {
            path: config_dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME),
        })
    }

    /// Creates a manager over an explicit settings path.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The settings file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings, returning defaults when no file exists yet.
    ///
    /// The zoom level is clamped into the accepted range on load.
    pub fn load(&self) -> ConfigResult<WindowSettings> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(WindowSettings::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let settings: WindowSettings = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(settings.sanitized())
    }

    /// Saves settings, creating the parent directory as needed.
    pub fn save(&self, settings: &WindowSettings) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let raw = toml::to_string_pretty(settings)?;
        fs::write(&self.path, raw).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
