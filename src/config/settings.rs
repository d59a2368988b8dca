//! User settings for edubudget
//!
//! Manages user preferences: the data file, table page size, fiscal years
//! used by the growth insight, export defaults and the activity log switch.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::EdubudgetPaths;
use crate::error::EdubudgetError;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::reports::ChartKind;

/// Data file used when neither `--data` nor settings name one
pub const DEFAULT_DATA_FILE: &str = "nyc-education-data.csv";

/// User settings for edubudget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// CSV file to load when `--data` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Rows per table page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Fiscal years accepted at load time and compared by the growth insight.
    /// An empty list accepts every year.
    #[serde(default = "default_fiscal_years")]
    pub fiscal_years: Vec<i32>,

    /// File name used by CSV export when no output path is given
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    /// Chart drawn when the dashboard opens
    #[serde(default)]
    pub default_chart_kind: ChartKind,

    /// Whether dashboard activity is appended to the activity log
    #[serde(default = "default_true")]
    pub activity_log_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_page_size() -> usize {
    50
}

fn default_fiscal_years() -> Vec<i32> {
    vec![2023, 2024, 2025]
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: None,
            page_size: default_page_size(),
            fiscal_years: default_fiscal_years(),
            export_file_name: default_export_file_name(),
            default_chart_kind: ChartKind::default(),
            activity_log_enabled: true,
        }
    }
}

impl Settings {
    /// Data file to load: the explicit path, else the configured one, else the default
    pub fn resolve_data_file(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &EdubudgetPaths) -> Result<Self, EdubudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                EdubudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                EdubudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // not persisted until the caller saves
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EdubudgetPaths) -> Result<(), EdubudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            EdubudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            EdubudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
