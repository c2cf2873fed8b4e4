//! OS directory resolution for the terrain tool.
//!
//! Resolves platform-appropriate locations (XDG on Linux, Known Folders on
//! Windows, Library on macOS) for the config file and log output.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const APP_NAME: &str = "massif";

/// OS-specific directory paths for the terrain tool.
pub struct AppDirs {
    /// User configuration: `config.ron`.
    pub config_dir: PathBuf,
    /// Log files.
    pub log_dir: PathBuf,
}

impl AppDirs {
    /// Resolve platform-specific directories without creating them on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if the OS does not expose a
    /// configuration directory.
    pub fn resolve() -> Result<Self, ConfigError> {
        let config_base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        let app_dir = config_base.join(APP_NAME);
        Ok(Self {
            config_dir: app_dir.clone(),
            log_dir: app_dir.join("logs"),
        })
    }

    /// Resolve directories rooted under a custom base path.
    ///
    /// Useful for testing without touching real OS directories.
    pub fn resolve_with_root(root: &Path) -> Self {
        let app_dir = root.join(APP_NAME);
        Self {
            config_dir: app_dir.clone(),
            log_dir: app_dir.join("logs"),
        }
    }

    /// Create all directories on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WriteError`] if any directory cannot be created.
    pub fn create_dirs(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.config_dir).map_err(ConfigError::WriteError)?;
        std::fs::create_dir_all(&self.log_dir).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
