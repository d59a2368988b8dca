//! JSON Export functionality
//!
//! Exports a dashboard snapshot (everything currently on screen) with schema
//! versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::dashboard::{Dashboard, DashboardSnapshot};
use crate::error::{EdubudgetError, EdubudgetResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot export structure
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Records in the whole dataset
    pub dataset_records: usize,

    /// Records in the current view
    pub view_records: usize,

    pub snapshot: DashboardSnapshot,
}

impl SnapshotExport {
    /// Capture the dashboard as it stands
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            dataset_records: dashboard.dataset().len(),
            view_records: dashboard.view().len(),
            snapshot: dashboard.snapshot(),
        }
    }
}

/// Export the dashboard snapshot as pretty-printed JSON
pub fn export_snapshot_json<W: Write>(dashboard: &Dashboard, writer: &mut W) -> EdubudgetResult<()> {
    let export = SnapshotExport::from_dashboard(dashboard);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| EdubudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| EdubudgetError::Export(e.to_string()))?;
    Ok(())
}
