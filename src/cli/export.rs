//! CLI command for exporting the current view

use serde_json::json;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::audit::Action;
use crate::error::{EdubudgetError, EdubudgetResult};
use crate::export::{export_snapshot_json, export_snapshot_yaml, export_view_csv, ExportFormat};

use super::view::{CliContext, ViewArgs};

/// Export the filtered, sorted view (CSV) or the dashboard snapshot (JSON, YAML)
pub fn handle_export(
    ctx: &CliContext,
    args: &ViewArgs,
    output: Option<PathBuf>,
    format: ExportFormat,
) -> EdubudgetResult<()> {
    let dashboard = ctx.open_view(args)?;

    let path = output.unwrap_or_else(|| match format {
        ExportFormat::Csv => PathBuf::from(&ctx.settings.export_file_name),
        other => PathBuf::from(format!("education-budget-snapshot.{}", other)),
    });

    let file = File::create(&path).map_err(|e| {
        EdubudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            let rows = export_view_csv(dashboard.dataset(), dashboard.view(), &mut writer)?;
            println!("Exported {} records to: {}", rows, path.display());
        }
        ExportFormat::Json => {
            export_snapshot_json(&dashboard, &mut writer)?;
            println!("Dashboard snapshot exported to: {}", path.display());
        }
        ExportFormat::Yaml => {
            export_snapshot_yaml(&dashboard, &mut writer)?;
            println!("Dashboard snapshot exported to: {}", path.display());
        }
    }

    ctx.record(
        Action::Export,
        &json!({ "path": path.display().to_string(), "format": format }),
        Some(dashboard.view().len()),
    );
    Ok(())
}
