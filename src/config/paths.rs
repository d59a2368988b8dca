//! Path management for edubudget
//!
//! Provides XDG-compliant path resolution for settings, the activity log and
//! exports.
//!
//! ## Path Resolution Order
//!
//! 1. `EDUBUDGET_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/edubudget` or `~/.config/edubudget`
//! 3. Otherwise the platform config directory reported by `directories`

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::EdubudgetError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EDUBUDGET_DATA_DIR";

/// Manages all paths used by edubudget
#[derive(Debug, Clone)]
pub struct EdubudgetPaths {
    /// Base directory for all edubudget files
    base_dir: PathBuf,
}

impl EdubudgetPaths {
    /// Create a new EdubudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration directory can be determined.
    pub fn new() -> Result<Self, EdubudgetError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create EdubudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/edubudget/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the activity log
    pub fn activity_log(&self) -> PathBuf {
        self.base_dir.join("activity.log")
    }

    /// Directory for exports written from the terminal dashboard
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), EdubudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EdubudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| EdubudgetError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if edubudget has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, EdubudgetError> {
    if cfg!(not(windows)) {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg.is_empty() {
                return Ok(PathBuf::from(xdg).join("edubudget"));
            }
        }
    }

    ProjectDirs::from("", "", "edubudget")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| EdubudgetError::Config("Could not determine a config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EdubudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.activity_log(), temp_dir.path().join("activity.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var(DATA_DIR_ENV, temp_dir.path());

        let paths = EdubudgetPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        std::env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EdubudgetPaths::with_base_dir(temp_dir.path().join("nested"));
        assert!(!paths.is_initialized());

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.export_dir().exists());
    }
}
