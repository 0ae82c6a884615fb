//! Path management for jpdb-export
//!
//! ## Path Resolution Order
//!
//! 1. `JPDB_EXPORT_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/jpdb-export` or `~/.config/jpdb-export`
//! 3. Windows: `%APPDATA%\jpdb-export`

use std::path::PathBuf;

use crate::error::ExportError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "JPDB_EXPORT_CONFIG_DIR";

/// Manages the paths used by jpdb-export
#[derive(Debug, Clone)]
pub struct ExportPaths {
    base_dir: PathBuf,
}

impl ExportPaths {
    /// Resolve the config directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or app-data directory can be determined.
    pub fn new() -> Result<Self, ExportError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExportPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), ExportError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExportError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ExportError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                ExportError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("jpdb-export"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ExportError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ExportError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("jpdb-export"))
}
