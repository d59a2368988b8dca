//! Shared plumbing for view-shaping commands
//!
//! Loads the dataset, builds the dashboard and applies the filter and sort
//! flags every view command accepts.

use clap::Args;
use serde_json::json;
use std::path::PathBuf;

use crate::audit::{Action, ActivityLog};
use crate::config::{EdubudgetPaths, Settings};
use crate::dashboard::{Dashboard, DashboardOptions};
use crate::error::EdubudgetResult;
use crate::models::{Column, SortSpec};
use crate::services::{FilterCriteria, Selection};
use crate::storage::{load_from_path, LoadOptions, LoadReport};

/// Filter and sort flags shared by the view commands
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Fiscal year, or "all"
    #[arg(short, long, default_value = "all")]
    pub year: Selection<i32>,

    /// Department (exact name), or "all"
    #[arg(short, long, default_value = "all")]
    pub department: Selection<String>,

    /// Budget name (exact), or "all"
    #[arg(short, long, default_value = "all")]
    pub program: Selection<String>,

    /// Free-text search over department, budget name and agency
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Column to sort by (year, agency, department, budget-name, modified,
    /// cash-expense, difference, status)
    #[arg(long)]
    pub sort: Option<Column>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

impl ViewArgs {
    /// The filter criteria these flags describe
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            year: self.year.clone(),
            department: self.department.clone(),
            program: self.program.clone(),
            search: self.search.clone(),
        }
    }

    /// The sort these flags describe, if any
    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort.map(|column| {
            if self.desc {
                SortSpec::descending(column)
            } else {
                SortSpec::ascending(column)
            }
        })
    }
}

/// Everything a command needs: resolved paths, settings and the data location
pub struct CliContext {
    pub paths: EdubudgetPaths,
    pub settings: Settings,
    pub data_file: PathBuf,
    pub activity: ActivityLog,
}

impl CliContext {
    /// Resolve the data file and open an activity session
    pub fn new(paths: EdubudgetPaths, settings: Settings, data: Option<PathBuf>) -> Self {
        let data_file = settings.resolve_data_file(data);
        let activity = ActivityLog::new(paths.activity_log(), settings.activity_log_enabled);
        Self {
            paths,
            settings,
            data_file,
            activity,
        }
    }

    /// Record an action; a failed write only produces a warning
    pub fn record<T: serde::Serialize>(&self, action: Action, detail: &T, count: Option<usize>) {
        if let Err(e) = self.activity.record(action, detail, count) {
            eprintln!("Warning: {}", e);
        }
    }

    /// Load the configured data file
    pub fn load(&self) -> EdubudgetResult<LoadReport> {
        let options = LoadOptions::with_allowed_years(self.settings.fiscal_years.clone());
        let report = load_from_path(&self.data_file, &options)?;
        self.record(
            Action::Load,
            &json!({
                "file": self.data_file.display().to_string(),
                "rows_read": report.rows_read,
                "rejected": report.rejected,
            }),
            Some(report.dataset.len()),
        );
        Ok(report)
    }

    /// Load the data and build a dashboard with no filters applied
    pub fn open_dashboard(&self) -> EdubudgetResult<Dashboard> {
        let report = self.load()?;
        Ok(Dashboard::from_load_report(
            report,
            DashboardOptions::from_settings(&self.settings),
        ))
    }

    /// Load the data, then apply the filter and sort flags
    pub fn open_view(&self, args: &ViewArgs) -> EdubudgetResult<Dashboard> {
        let mut dashboard = self.open_dashboard()?;

        let criteria = args.criteria();
        if !criteria.is_empty() {
            dashboard.set_criteria(criteria);
            self.record(Action::Filter, dashboard.criteria(), Some(dashboard.view().len()));
        }

        if let Some(spec) = args.sort_spec() {
            dashboard.set_sort(spec);
            self.record(Action::Sort, &spec, Some(dashboard.view().len()));
        }

        Ok(dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOrder;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        view: ViewArgs,
    }

    #[test]
    fn test_defaults_match_everything() {
        let cli = TestCli::parse_from(["test"]);
        assert!(cli.view.criteria().is_empty());
        assert!(cli.view.sort_spec().is_none());
    }

    #[test]
    fn test_flags_build_criteria_and_sort() {
        let cli = TestCli::parse_from([
            "test",
            "--year",
            "2024",
            "--department",
            "Arts",
            "--search",
            "music",
            "--sort",
            "cash",
            "--desc",
        ]);
        let criteria = cli.view.criteria();
        assert_eq!(criteria.year, Selection::Only(2024));
        assert_eq!(criteria.department, Selection::Only("Arts".to_string()));
        assert!(criteria.program.is_all());
        assert_eq!(criteria.search, "music");

        let spec = cli.view.sort_spec().unwrap();
        assert_eq!(spec.column, Column::CashExpense);
        assert_eq!(spec.order, SortOrder::Descending);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(TestCli::try_parse_from(["test", "--year", "soon"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--sort", "color"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--desc"]).is_err());
    }
}
