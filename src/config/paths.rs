//! Path management for GrowBank
//!
//! ## Path Resolution Order
//!
//! 1. `GROWBANK_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (e.g. `~/.config/growbank` on Linux, `%APPDATA%\growbank\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::GrowBankError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "GROWBANK_DATA_DIR";

/// Manages all paths used by GrowBank
#[derive(Debug, Clone)]
pub struct GrowBankPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl GrowBankPaths {
    /// Create a new GrowBankPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined for the platform.
    pub fn new() -> Result<Self, GrowBankError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create GrowBankPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory holding JSON-lines log files
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), GrowBankError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GrowBankError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| GrowBankError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, GrowBankError> {
    ProjectDirs::from("", "", "growbank")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| GrowBankError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GrowBankPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_dir(), temp_dir.path().join("logs"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GrowBankPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.log_dir().exists());
    }
}
