//! YAML Export functionality
//!
//! Human-readable rendition of the dashboard snapshot.

use std::io::Write;

use crate::dashboard::Dashboard;
use crate::error::{EdubudgetError, EdubudgetResult};
use crate::export::json::SnapshotExport;

/// Export the dashboard snapshot as YAML
pub fn export_snapshot_yaml<W: Write>(dashboard: &Dashboard, writer: &mut W) -> EdubudgetResult<()> {
    let export = SnapshotExport::from_dashboard(dashboard);
    let io_err = |e: std::io::Error| EdubudgetError::Export(e.to_string());

    writeln!(writer, "# edubudget dashboard snapshot").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(
        writer,
        "# View: {} of {} records",
        export.view_records, export.dataset_records
    )
    .map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| EdubudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardOptions;
    use crate::models::{Money, Record};
    use crate::storage::Dataset;

    #[test]
    fn test_yaml_export() {
        let dashboard = Dashboard::new(
            Dataset::from_records(vec![Record::new(2024, "DOE")
                .with_department("Arts")
                .with_budget_name("Music")
                .with_amounts(Money::from_dollars(100), Money::from_dollars(150))]),
            DashboardOptions::default(),
        );

        let mut output = Vec::new();
        export_snapshot_yaml(&dashboard, &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# edubudget dashboard snapshot"));
        assert!(yaml.contains("# View: 1 of 1 records"));
        assert!(yaml.contains("schema_version:"));
        assert!(yaml.contains("department: Arts"));
        assert!(yaml.contains("budget_name: Music"));
    }
}
