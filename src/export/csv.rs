//! CSV Export functionality
//!
//! Writes the active view in view order, using the same column names the
//! loader reads so an export can be loaded again.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{EdubudgetError, EdubudgetResult};
use crate::models::View;
use crate::storage::loader::{
    HEADER_AGENCY, HEADER_BUDGET_NAME, HEADER_CASH_EXPENSE, HEADER_DEPARTMENT, HEADER_MODIFIED,
    HEADER_YEAR,
};
use crate::storage::Dataset;

/// File name used when no output path is given
pub const DEFAULT_EXPORT_FILE: &str = "education-budget-export.csv";

/// Export column order
pub const EXPORT_HEADERS: [&str; 6] = [
    HEADER_AGENCY,
    HEADER_YEAR,
    HEADER_DEPARTMENT,
    HEADER_BUDGET_NAME,
    HEADER_MODIFIED,
    HEADER_CASH_EXPENSE,
];

fn export_err(e: csv::Error) -> EdubudgetError {
    EdubudgetError::Export(e.to_string())
}

/// Write every record of a view; returns the number of rows written
pub fn export_view_csv<W: Write>(
    dataset: &Dataset,
    view: &View,
    writer: &mut W,
) -> EdubudgetResult<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(EXPORT_HEADERS).map_err(export_err)?;

    let mut rows = 0;
    for record in view.records(dataset) {
        let year = record.year.to_string();
        let modified = record.modified.to_plain_string();
        let cash_expense = record.cash_expense.to_plain_string();
        csv.write_record([
            record.agency.as_str(),
            year.as_str(),
            record.department.as_deref().unwrap_or(""),
            record.budget_name.as_deref().unwrap_or(""),
            modified.as_str(),
            cash_expense.as_str(),
        ])
        .map_err(export_err)?;
        rows += 1;
    }

    csv.flush()
        .map_err(|e| EdubudgetError::Export(e.to_string()))?;
    Ok(rows)
}

/// Export a view to a file, replacing it if present
pub fn export_view_to_path<P: AsRef<Path>>(
    dataset: &Dataset,
    view: &View,
    path: P,
) -> EdubudgetResult<usize> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|e| {
        EdubudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    export_view_csv(dataset, view, &mut file)
}
