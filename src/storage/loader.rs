//! CSV loading
//!
//! Reads the budget CSV by header name and builds the dataset. Rows missing an
//! agency or a usable fiscal year are dropped; unparsable amounts become zero.
//! Neither case is an error. Only an unreadable file or undecodable CSV fails
//! the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;

use super::dataset::Dataset;
use crate::error::{EdubudgetError, EdubudgetResult};
use crate::models::{Money, Record};

/// Header names recognized in the source file
pub const HEADER_AGENCY: &str = "Agency";
pub const HEADER_YEAR: &str = "Year";
pub const HEADER_DEPARTMENT: &str = "Department";
pub const HEADER_BUDGET_NAME: &str = "Budget Name";
pub const HEADER_MODIFIED: &str = "Modified";
pub const HEADER_CASH_EXPENSE: &str = "Cash Expense";

/// Options controlling which rows are kept
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Fiscal years accepted at load time; empty accepts any year
    pub allowed_years: Vec<i32>,
}

impl LoadOptions {
    /// Accept only the given fiscal years
    pub fn with_allowed_years(years: impl Into<Vec<i32>>) -> Self {
        Self {
            allowed_years: years.into(),
        }
    }
}

/// Why a row was left out of the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRejection {
    /// No agency, or only whitespace
    MissingAgency,
    /// No year, or a year that is not a whole number
    MissingYear,
    /// A year outside the configured fiscal years
    YearNotAllowed(i32),
}

/// Counts of rows dropped during load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RejectionCounts {
    pub missing_agency: usize,
    pub missing_year: usize,
    pub year_not_allowed: usize,
}

impl RejectionCounts {
    fn record(&mut self, rejection: RowRejection) {
        match rejection {
            RowRejection::MissingAgency => self.missing_agency += 1,
            RowRejection::MissingYear => self.missing_year += 1,
            RowRejection::YearNotAllowed(_) => self.year_not_allowed += 1,
        }
    }

    /// Total rows dropped
    pub fn total(&self) -> usize {
        self.missing_agency + self.missing_year + self.year_not_allowed
    }
}

/// Result of a successful load
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// The kept records
    pub dataset: Dataset,
    /// Data rows read from the file (excluding the header)
    pub rows_read: usize,
    /// Rows dropped, by reason
    pub rejected: RejectionCounts,
}

/// Column positions of the recognized headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    agency: Option<usize>,
    year: Option<usize>,
    department: Option<usize>,
    budget_name: Option<usize>,
    modified: Option<usize>,
    cash_expense: Option<usize>,
}

impl HeaderMap {
    /// Locate recognized columns by exact header name
    pub fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            agency: position(HEADER_AGENCY),
            year: position(HEADER_YEAR),
            department: position(HEADER_DEPARTMENT),
            budget_name: position(HEADER_BUDGET_NAME),
            modified: position(HEADER_MODIFIED),
            cash_expense: position(HEADER_CASH_EXPENSE),
        }
    }
}

fn cell<'r>(record: &'r StringRecord, column: Option<usize>) -> Option<&'r str> {
    column.and_then(|i| record.get(i))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Parse a fiscal year cell
///
/// Whole numbers are accepted, including integral decimals such as "2024.0".
/// Zero counts as missing.
pub fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let year = match s.parse::<i32>() {
        Ok(year) => year,
        Err(_) => {
            let value = s.parse::<f64>().ok()?;
            if !value.is_finite() || value.fract() != 0.0 || value.abs() > i32::MAX as f64 {
                return None;
            }
            value as i32
        }
    };
    (year != 0).then_some(year)
}

/// Turn one CSV row into a record, or say why it was dropped
pub fn parse_row(
    record: &StringRecord,
    headers: &HeaderMap,
    options: &LoadOptions,
) -> Result<Record, RowRejection> {
    let agency = non_blank(cell(record, headers.agency)).ok_or(RowRejection::MissingAgency)?;

    let year = cell(record, headers.year)
        .and_then(parse_year)
        .ok_or(RowRejection::MissingYear)?;

    if !options.allowed_years.is_empty() && !options.allowed_years.contains(&year) {
        return Err(RowRejection::YearNotAllowed(year));
    }

    let amount = |column| cell(record, column).map(Money::parse_lenient).unwrap_or_default();

    Ok(Record {
        year,
        agency,
        department: non_blank(cell(record, headers.department)),
        budget_name: non_blank(cell(record, headers.budget_name)),
        modified: amount(headers.modified),
        cash_expense: amount(headers.cash_expense),
    })
}

/// Load a dataset from any reader producing CSV text
pub fn load_from_reader<R: Read>(reader: R, options: &LoadOptions) -> EdubudgetResult<LoadReport> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = HeaderMap::from_headers(reader.headers()?);

    let mut records = Vec::new();
    let mut rejected = RejectionCounts::default();
    let mut rows_read = 0;

    for (idx, result) in reader.records().enumerate() {
        let row = result.map_err(|e| {
            EdubudgetError::Load(format!("Failed to read CSV row {}: {}", idx + 1, e))
        })?;
        rows_read += 1;

        match parse_row(&row, &headers, options) {
            Ok(record) => records.push(record),
            Err(rejection) => rejected.record(rejection),
        }
    }

    Ok(LoadReport {
        dataset: Dataset::from_records(records),
        rows_read,
        rejected,
    })
}

/// Load a dataset from CSV text
pub fn load_from_str(text: &str, options: &LoadOptions) -> EdubudgetResult<LoadReport> {
    load_from_reader(text.as_bytes(), options)
}

/// Load a dataset from a CSV file
pub fn load_from_path<P: AsRef<Path>>(path: P, options: &LoadOptions) -> EdubudgetResult<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        EdubudgetError::Load(format!("Failed to open {}: {}", path.display(), e))
    })?;
    load_from_reader(file, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Agency,Year,Department,Budget Name,Modified,Cash Expense";

    fn load(body: &str) -> LoadReport {
        load_from_str(&format!("{}\n{}", HEADER, body), &LoadOptions::default()).unwrap()
    }

    #[test]
    fn test_complete_row() {
        let report = load("DOE,2024,Facilities,Repairs,1000.50,1200");
        assert_eq!(report.rows_read, 1);
        let r = &report.dataset.records()[0];
        assert_eq!(r.agency, "DOE");
        assert_eq!(r.year, 2024);
        assert_eq!(r.department.as_deref(), Some("Facilities"));
        assert_eq!(r.budget_name.as_deref(), Some("Repairs"));
        assert_eq!(r.modified, Money::from_cents(100050));
        assert_eq!(r.cash_expense, Money::from_dollars(1200));
    }

    #[test]
    fn test_row_missing_agency_is_dropped() {
        let report = load(",2024,Facilities,Repairs,1,1\n   ,2024,A,B,1,1");
        assert!(report.dataset.is_empty());
        assert_eq!(report.rejected.missing_agency, 2);
    }

    #[test]
    fn test_row_missing_year_is_dropped() {
        let report = load("DOE,,Facilities,Repairs,1,1\nDOE,FY24,A,B,1,1\nDOE,0,A,B,1,1");
        assert!(report.dataset.is_empty());
        assert_eq!(report.rejected.missing_year, 3);
    }

    #[test]
    fn test_optional_fields_may_be_missing() {
        let report = load("DOE,2024,,,,");
        assert_eq!(report.dataset.len(), 1);
        let r = &report.dataset.records()[0];
        assert_eq!(r.department, None);
        assert_eq!(r.budget_name, None);
        assert!(r.modified.is_zero());
        assert!(r.cash_expense.is_zero());
    }

    #[test]
    fn test_non_numeric_amounts_become_zero() {
        let report = load("DOE,2024,A,B,pending,$1200");
        let r = &report.dataset.records()[0];
        assert!(r.modified.is_zero());
        assert!(r.cash_expense.is_zero());
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let report = load("DOE,2024,Facilities");
        assert_eq!(report.dataset.len(), 1);
        assert!(report.dataset.records()[0].cash_expense.is_zero());
    }

    #[test]
    fn test_whitespace_optional_fields_are_missing() {
        let report = load("DOE,2024,   ,  ,1,1");
        assert_eq!(report.dataset.len(), 1);
        let r = &report.dataset.records()[0];
        assert_eq!(r.department, None);
        assert_eq!(r.budget_name, None);
        assert_eq!(r.department_or_unknown(), "Unknown");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let report = load("DOE,2024,A,B,1,1\n\nDOE,2025,A,B,1,1\n");
        assert_eq!(report.rows_read, 2);
        assert_eq!(report.dataset.len(), 2);
    }

    #[test]
    fn test_columns_found_by_header_name() {
        let csv = "Cash Expense,Notes,Year,Agency\n500,ignored,2023,DOE\n";
        let report = load_from_str(csv, &LoadOptions::default()).unwrap();
        let r = &report.dataset.records()[0];
        assert_eq!(r.agency, "DOE");
        assert_eq!(r.year, 2023);
        assert_eq!(r.cash_expense, Money::from_dollars(500));
        assert!(r.modified.is_zero());
    }

    #[test]
    fn test_missing_agency_header_drops_everything() {
        let csv = "Year,Department\n2024,Arts\n";
        let report = load_from_str(csv, &LoadOptions::default()).unwrap();
        assert!(report.dataset.is_empty());
        assert_eq!(report.rejected.missing_agency, 1);
    }

    #[test]
    fn test_allowed_years() {
        let options = LoadOptions::with_allowed_years(vec![2023, 2024, 2025]);
        let csv = format!("{}\nDOE,2022,A,B,1,1\nDOE,2024,A,B,1,1\n", HEADER);
        let report = load_from_str(&csv, &options).unwrap();
        assert_eq!(report.dataset.len(), 1);
        assert_eq!(report.rejected.year_not_allowed, 1);
        assert_eq!(report.rejected.total(), 1);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2024"), Some(2024));
        assert_eq!(parse_year(" 2024 "), Some(2024));
        assert_eq!(parse_year("2024.0"), Some(2024));
        assert_eq!(parse_year("2024.5"), None);
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("0"), None);
    }

    #[test]
    fn test_quoted_fields() {
        let report = load("\"Dept. of Education, NYC\",2024,\"Arts, Music\",B,1,1");
        let r = &report.dataset.records()[0];
        assert_eq!(r.agency, "Dept. of Education, NYC");
        assert_eq!(r.department.as_deref(), Some("Arts, Music"));
    }

    #[test]
    fn test_invalid_utf8_fails_load() {
        let mut bytes = format!("{}\n", HEADER).into_bytes();
        bytes.extend_from_slice(b"DOE,2024,\xff\xfe,B,1,1\n");
        let err = load_from_reader(bytes.as_slice(), &LoadOptions::default()).unwrap_err();
        assert!(err.is_load());
    }

    #[test]
    fn test_missing_file_fails_load() {
        let err = load_from_path("/nonexistent/budget.csv", &LoadOptions::default()).unwrap_err();
        assert!(err.is_load());
    }
}
