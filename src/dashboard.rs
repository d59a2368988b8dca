//! Dashboard controller
//!
//! Owns the dataset and every piece of interactive state (filter criteria,
//! sort, current view, page, chart kind). Each interaction recomputes the
//! view from the full dataset; reports are computed on demand from the current
//! view, so nothing cached can go stale.

use serde::Serialize;

use crate::config::settings::Settings;
use crate::error::EdubudgetResult;
use crate::models::{Column, Record, RecordId, SortSpec, SortState, View};
use crate::reports::{
    ChartKind, DepartmentChart, EfficiencyBand, HeroStats, Insights, OffendersReport,
    SummaryReport, ViewTotals,
};
use crate::services::{
    filter, sort, FilterCriteria, Page, Pagination, Selection, DEFAULT_PAGE_SIZE,
};
use crate::storage::{Dataset, LoadReport};

/// Fiscal years covered by the bundled dataset
pub const DEFAULT_FISCAL_YEARS: [i32; 3] = [2023, 2024, 2025];

/// Construction options for a dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    pub page_size: usize,
    pub fiscal_years: Vec<i32>,
    pub chart_kind: ChartKind,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            fiscal_years: DEFAULT_FISCAL_YEARS.to_vec(),
            chart_kind: ChartKind::default(),
        }
    }
}

impl DashboardOptions {
    /// Options taken from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            page_size: settings.page_size,
            fiscal_years: settings.fiscal_years.clone(),
            chart_kind: settings.default_chart_kind,
        }
    }
}

/// Interactive state, separate from the immutable dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub criteria: FilterCriteria,
    pub sort: SortState,
    pub view: View,
    pub pagination: Pagination,
    pub chart_kind: ChartKind,
}

/// Values offered by the filter dropdowns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub departments: Vec<String>,
    pub programs: Vec<String>,
}

/// Result of searching within the current view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSearchResult {
    pub query: String,
    /// First page of matches, in view order
    pub rows: Vec<(RecordId, Record)>,
    /// Matches across the whole view
    pub total_matches: usize,
}

impl TableSearchResult {
    /// Record count summary for the search
    pub fn summary(&self) -> String {
        if self.total_matches == 0 {
            "Showing 0 records".to_string()
        } else {
            format!("Showing 1-{} of {}", self.rows.len(), self.total_matches)
        }
    }
}

/// Everything the presentation layer draws, in one serializable value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub hero: HeroStats,
    pub metrics: ViewTotals,
    pub efficiency: Option<f64>,
    pub efficiency_band: EfficiencyBand,
    pub chart: DepartmentChart,
    pub page: Page,
    pub rows: Vec<Record>,
    pub insights: Insights,
    pub offenders: OffendersReport,
    pub criteria: FilterCriteria,
    pub sort: Option<SortSpec>,
}

/// The dashboard controller
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    fiscal_years: Vec<i32>,
    state: DashboardState,
}

impl Dashboard {
    /// Create a dashboard showing every record on page 1
    pub fn new(dataset: Dataset, options: DashboardOptions) -> Self {
        let view = View::all(&dataset);
        Self {
            dataset,
            fiscal_years: options.fiscal_years,
            state: DashboardState {
                criteria: FilterCriteria::default(),
                sort: SortState::new(),
                view,
                pagination: Pagination::new(options.page_size),
                chart_kind: options.chart_kind,
            },
        }
    }

    /// Create a dashboard from a finished load
    pub fn from_load_report(report: LoadReport, options: DashboardOptions) -> Self {
        Self::new(report.dataset, options)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.state.criteria
    }

    pub fn view(&self) -> &View {
        &self.state.view
    }

    pub fn active_sort(&self) -> Option<SortSpec> {
        self.state.sort.active()
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.state.chart_kind
    }

    pub fn fiscal_years(&self) -> &[i32] {
        &self.fiscal_years
    }

    /// Records of the current view, in view order
    pub fn view_records(&self) -> impl Iterator<Item = &Record> {
        self.state.view.records(&self.dataset)
    }

    // Filtering

    pub fn set_year(&mut self, year: Selection<i32>) {
        self.state.criteria.year = year;
        self.refresh();
    }

    pub fn set_department(&mut self, department: Selection<String>) {
        self.state.criteria.department = department;
        self.refresh();
    }

    pub fn set_program(&mut self, program: Selection<String>) {
        self.state.criteria.program = program;
        self.refresh();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.criteria.search = search.into();
        self.refresh();
    }

    /// Replace every criterion at once
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.state.criteria = criteria;
        self.refresh();
    }

    /// Drop all criteria; the active sort is kept
    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    /// Re-run the pipeline from the full dataset and go back to page 1
    fn refresh(&mut self) {
        let filtered = filter(&self.dataset, &self.state.criteria);
        self.state.view = match self.state.sort.active() {
            Some(spec) => sort(&self.dataset, &filtered, spec),
            None => filtered,
        };
        self.state.pagination.reset();
    }

    // Sorting

    /// Header click: toggle the column's direction and re-sort the view
    pub fn sort_by(&mut self, column: Column) -> SortSpec {
        let spec = self.state.sort.toggle(column);
        self.apply_sort_spec(spec);
        spec
    }

    /// Sort by an explicit column and direction
    pub fn set_sort(&mut self, spec: SortSpec) {
        self.state.sort.set(spec);
        self.apply_sort_spec(spec);
    }

    fn apply_sort_spec(&mut self, spec: SortSpec) {
        self.state.view = sort(&self.dataset, &self.state.view, spec);
        self.state.pagination.reset();
    }

    // Paging

    /// Advance one page; returns false on the last page
    pub fn next_page(&mut self) -> bool {
        self.state.pagination.next(self.state.view.len())
    }

    /// Go back one page; returns false on the first page
    pub fn prev_page(&mut self) -> bool {
        self.state.pagination.prev()
    }

    pub fn go_to_page(&mut self, page: usize) -> EdubudgetResult<()> {
        self.state.pagination.go_to(page, self.state.view.len())
    }

    /// The current table page
    pub fn page(&self) -> Page {
        self.state.pagination.page(&self.state.view)
    }

    /// Records on the current page, with their ids
    pub fn page_rows(&self) -> Vec<(RecordId, &Record)> {
        let range = self.state.pagination.range(self.state.view.len());
        self.state.view.records_in(&self.dataset, range).collect()
    }

    // Chart

    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        self.state.chart_kind = kind;
    }

    pub fn toggle_chart_kind(&mut self) -> ChartKind {
        self.state.chart_kind = self.state.chart_kind.toggled();
        self.state.chart_kind
    }

    // Reports

    /// Hero stats over the dataset plus totals over the current view
    pub fn summary(&self) -> SummaryReport {
        SummaryReport::generate(self.dataset.records(), self.view_records())
    }

    /// Department chart over the current view
    pub fn chart(&self) -> DepartmentChart {
        DepartmentChart::generate(self.view_records(), self.state.chart_kind)
    }

    /// Insights over the full dataset
    pub fn insights(&self) -> Insights {
        Insights::generate(&self.dataset, &self.fiscal_years)
    }

    /// Worst offenders over the full dataset
    pub fn offenders(&self) -> OffendersReport {
        OffendersReport::generate(&self.dataset)
    }

    /// Search within the current view without replacing it
    ///
    /// Matches department, budget name, agency or year (as text),
    /// case-insensitively. Returns the first page of matches.
    pub fn table_search(&self, query: &str) -> TableSearchResult {
        let needle = query.trim().to_lowercase();
        let matches: Vec<(RecordId, &Record)> = self
            .state
            .view
            .records_in(&self.dataset, 0..self.state.view.len())
            .filter(|(_, record)| needle.is_empty() || table_row_matches(record, &needle))
            .collect();

        TableSearchResult {
            query: query.to_string(),
            total_matches: matches.len(),
            rows: matches
                .into_iter()
                .take(self.state.pagination.page_size())
                .map(|(id, record)| (id, record.clone()))
                .collect(),
        }
    }

    /// Values for the year, department and program dropdowns
    pub fn filter_options(&self) -> FilterOptions {
        let years = if self.fiscal_years.is_empty() {
            self.dataset.years()
        } else {
            self.fiscal_years.clone()
        };
        FilterOptions {
            years,
            departments: self.dataset.departments(),
            programs: self.dataset.programs(),
        }
    }

    /// Capture everything the presentation layer needs
    pub fn snapshot(&self) -> DashboardSnapshot {
        let summary = self.summary();
        DashboardSnapshot {
            hero: summary.hero,
            metrics: summary.metrics,
            efficiency: summary.efficiency,
            efficiency_band: summary.efficiency_band,
            chart: self.chart(),
            page: self.page(),
            rows: self
                .page_rows()
                .into_iter()
                .map(|(_, record)| record.clone())
                .collect(),
            insights: self.insights(),
            offenders: self.offenders(),
            criteria: self.state.criteria.clone(),
            sort: self.state.sort.active(),
        }
    }
}

fn table_row_matches(record: &Record, needle: &str) -> bool {
    let contains = |field: Option<&str>| {
        field
            .map(|value| value.to_lowercase().contains(needle))
            .unwrap_or(false)
    };
    contains(record.department.as_deref())
        || contains(record.budget_name.as_deref())
        || contains(Some(record.agency.as_str()))
        || record.year.to_string().contains(needle)
}
