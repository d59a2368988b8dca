//! Export module for edubudget
//!
//! - CSV: the active view, loadable again by the CSV loader
//! - JSON: machine-readable dashboard snapshot
//! - YAML: human-readable dashboard snapshot

pub mod csv;
pub mod json;
pub mod yaml;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EdubudgetError;

pub use self::csv::{export_view_csv, export_view_to_path, DEFAULT_EXPORT_FILE, EXPORT_HEADERS};
pub use self::json::{export_snapshot_json, SnapshotExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_snapshot_yaml;

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = EdubudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(EdubudgetError::unknown_value(
                "export format",
                s,
                &["csv", "json", "yaml"],
            )),
        }
    }
}
