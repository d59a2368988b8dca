//! Application state for the TUI
//!
//! Wraps the dashboard controller with what only the interactive session
//! needs: input mode, the search box, the offenders carousel and a status
//! line. Derived panels are recomputed whenever the view changes.

use serde_json::json;
use std::path::PathBuf;

use crate::audit::{Action, ActivityLog};
use crate::config::{EdubudgetPaths, Settings};
use crate::dashboard::{Dashboard, FilterOptions};
use crate::error::EdubudgetResult;
use crate::export::export_view_to_path;
use crate::models::Column;
use crate::reports::{DepartmentChart, Insights, OffendersReport, SummaryReport};
use crate::services::Selection;

use super::widgets::{Carousel, TextInput};

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search box; the view follows every keystroke
    Search,
}

/// Step a dropdown-style selection to the next option, wrapping through "all"
pub fn cycle_selection<T: Clone + PartialEq>(current: &Selection<T>, options: &[T]) -> Selection<T> {
    match current {
        Selection::All => options.first().cloned().into(),
        Selection::Only(value) => {
            let next = options
                .iter()
                .position(|o| o == value)
                .and_then(|i| options.get(i + 1));
            next.cloned().into()
        }
    }
}

/// Main application state
pub struct App {
    pub dashboard: Dashboard,
    pub input_mode: InputMode,
    pub search_input: TextInput,
    /// Search text to restore when a search edit is cancelled
    search_before_edit: String,
    pub carousel: Carousel,
    pub filter_options: FilterOptions,

    // Panels derived from the current view
    pub summary: SummaryReport,
    pub chart: DepartmentChart,

    // Panels derived from the full dataset; they never change in a session
    pub insights: Insights,
    pub offenders: OffendersReport,

    pub export_path: PathBuf,
    activity: ActivityLog,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create the app for a loaded dashboard and a terminal of the given width
    pub fn new(dashboard: Dashboard, settings: &Settings, paths: &EdubudgetPaths, width: u16) -> Self {
        let summary = dashboard.summary();
        let chart = dashboard.chart();
        let insights = dashboard.insights();
        let offenders = dashboard.offenders();
        let filter_options = dashboard.filter_options();
        let carousel = Carousel::new(offenders.offenders.len(), width);

        Self {
            dashboard,
            input_mode: InputMode::Normal,
            search_input: TextInput::new()
                .label("Search")
                .placeholder("department, budget name or agency"),
            search_before_edit: String::new(),
            carousel,
            filter_options,
            summary,
            chart,
            insights,
            offenders,
            export_path: paths.export_dir().join(&settings.export_file_name),
            activity: ActivityLog::new(paths.activity_log(), settings.activity_log_enabled),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    fn record<T: serde::Serialize>(&mut self, action: Action, detail: &T) {
        let count = Some(self.dashboard.view().len());
        if let Err(e) = self.activity.record(action, detail, count) {
            self.set_status(format!("Activity log unavailable: {}", e));
        }
    }

    fn sync_view_panels(&mut self) {
        self.summary = self.dashboard.summary();
        self.chart = self.dashboard.chart();
    }

    fn after_filter(&mut self) {
        self.sync_view_panels();
        let criteria = self.dashboard.criteria().clone();
        self.record(Action::Filter, &criteria);
        let shown = self.dashboard.view().len();
        self.set_status(format!("{} matching records", shown));
    }

    pub fn cycle_year(&mut self) {
        let next = cycle_selection(&self.dashboard.criteria().year, &self.filter_options.years);
        self.dashboard.set_year(next);
        self.after_filter();
    }

    pub fn cycle_department(&mut self) {
        let next = cycle_selection(
            &self.dashboard.criteria().department,
            &self.filter_options.departments,
        );
        self.dashboard.set_department(next);
        self.after_filter();
    }

    pub fn cycle_program(&mut self) {
        let next = cycle_selection(
            &self.dashboard.criteria().program,
            &self.filter_options.programs,
        );
        self.dashboard.set_program(next);
        self.after_filter();
    }

    /// Drop every filter; the active sort stays
    pub fn reset_filters(&mut self) {
        self.dashboard.clear_filters();
        self.search_input.clear();
        self.after_filter();
    }

    /// Sort by the nth column (0-based), toggling direction on repeats
    pub fn sort_by_index(&mut self, index: usize) {
        let Some(&column) = Column::ALL.get(index) else {
            return;
        };
        let spec = self.dashboard.sort_by(column);
        self.record(Action::Sort, &spec);
        self.set_status(format!("Sorted by {} {}", column.header(), spec.order.arrow()));
    }

    pub fn next_page(&mut self) {
        if self.dashboard.next_page() {
            self.after_page();
        }
    }

    pub fn prev_page(&mut self) {
        if self.dashboard.prev_page() {
            self.after_page();
        }
    }

    fn after_page(&mut self) {
        let page = self.dashboard.page();
        self.record(Action::Page, &json!({ "page": page.number }));
        self.set_status(page.label());
    }

    pub fn toggle_chart(&mut self) {
        let kind = self.dashboard.toggle_chart_kind();
        self.chart = self.dashboard.chart();
        self.set_status(format!("{} chart", kind.label()));
    }

    pub fn start_search(&mut self) {
        self.search_before_edit = self.dashboard.criteria().search.clone();
        self.search_input.set_value(self.search_before_edit.clone());
        self.search_input.focused = true;
        self.input_mode = InputMode::Search;
    }

    /// Re-filter from the search box contents
    pub fn apply_search_input(&mut self) {
        let text = self.search_input.value().to_string();
        self.dashboard.set_search(text);
        self.sync_view_panels();
    }

    /// Keep the typed search and leave search mode
    pub fn commit_search(&mut self) {
        self.search_input.focused = false;
        self.input_mode = InputMode::Normal;
        let query = self.dashboard.criteria().search.clone();
        self.record(Action::Search, &json!({ "query": query }));
        let shown = self.dashboard.view().len();
        self.set_status(format!("{} matching records", shown));
    }

    /// Restore the search in effect before editing began
    pub fn cancel_search(&mut self) {
        self.search_input.focused = false;
        self.input_mode = InputMode::Normal;
        let previous = std::mem::take(&mut self.search_before_edit);
        self.search_input.set_value(previous.clone());
        self.dashboard.set_search(previous);
        self.sync_view_panels();
    }

    pub fn carousel_next(&mut self) {
        self.carousel.next();
    }

    pub fn carousel_prev(&mut self) {
        self.carousel.prev();
    }

    pub fn resize(&mut self, width: u16) {
        self.carousel.resize(width);
    }

    /// Write the current view to the export file
    pub fn export_view(&mut self) -> EdubudgetResult<usize> {
        if let Some(dir) = self.export_path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let rows = export_view_to_path(
            self.dashboard.dataset(),
            self.dashboard.view(),
            &self.export_path,
        )?;
        let path = self.export_path.display().to_string();
        self.record(Action::Export, &json!({ "path": path, "format": "csv" }));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardOptions;
    use crate::models::{Money, Record, SortOrder};
    use crate::storage::Dataset;
    use tempfile::TempDir;

    fn record(year: i32, dept: &str, program: &str, modified: i64, cash: i64) -> Record {
        Record::new(year, "Department of Education")
            .with_department(dept)
            .with_budget_name(program)
            .with_amounts(Money::from_dollars(modified), Money::from_dollars(cash))
    }

    fn test_app(temp: &TempDir) -> App {
        let dataset = Dataset::from_records(vec![
            record(2023, "Arts", "Music", 1000, 1200),
            record(2024, "Arts", "Theater", 2000, 1500),
            record(2024, "Science", "Labs", 5000, 7000),
            record(2025, "Math", "Tutoring", 800, 700),
        ]);
        let paths = EdubudgetPaths::with_base_dir(temp.path().to_path_buf());
        let settings = Settings::default();
        let dashboard = Dashboard::new(dataset, DashboardOptions::from_settings(&settings));
        App::new(dashboard, &settings, &paths, 200)
    }

    #[test]
    fn test_cycle_selection_wraps_through_all() {
        let years = [2023, 2024];
        let first = cycle_selection(&Selection::All, &years);
        assert_eq!(first, Selection::Only(2023));
        let second = cycle_selection(&first, &years);
        assert_eq!(second, Selection::Only(2024));
        assert_eq!(cycle_selection(&second, &years), Selection::All);
        assert_eq!(cycle_selection::<i32>(&Selection::All, &[]), Selection::All);
    }

    #[test]
    fn test_cycle_year_updates_panels() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        assert_eq!(app.summary.metrics.record_count, 4);

        app.cycle_year();
        assert_eq!(app.dashboard.criteria().year, Selection::Only(2023));
        assert_eq!(app.summary.metrics.record_count, 1);
        assert_eq!(app.chart.entries.len(), 1);
        // Full-dataset panels do not follow filters
        assert_eq!(app.summary.hero.department_count, 3);
    }

    #[test]
    fn test_search_cancel_restores_previous() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);

        app.start_search();
        for c in "lab".chars() {
            app.search_input.insert(c);
            app.apply_search_input();
        }
        assert_eq!(app.dashboard.view().len(), 1);

        app.cancel_search();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.dashboard.criteria().search, "");
        assert_eq!(app.dashboard.view().len(), 4);
    }

    #[test]
    fn test_search_commit_keeps_query() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);

        app.start_search();
        app.search_input.set_value("arts");
        app.apply_search_input();
        app.commit_search();
        assert_eq!(app.dashboard.criteria().search, "arts");
        assert_eq!(app.summary.metrics.record_count, 2);
    }

    #[test]
    fn test_sort_by_index_toggles() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);

        app.sort_by_index(5);
        assert_eq!(app.dashboard.active_sort().map(|s| s.order), Some(SortOrder::Ascending));
        app.sort_by_index(5);
        assert_eq!(app.dashboard.active_sort().map(|s| s.order), Some(SortOrder::Descending));

        app.sort_by_index(42);
        assert_eq!(app.dashboard.active_sort().map(|s| s.column), Some(Column::ALL[5]));
    }

    #[test]
    fn test_reset_filters_clears_search_box() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        app.cycle_department();
        app.search_input.set_value("music");
        app.apply_search_input();

        app.reset_filters();
        assert!(app.dashboard.criteria().is_empty());
        assert_eq!(app.search_input.value(), "");
        assert_eq!(app.dashboard.view().len(), 4);
    }

    #[test]
    fn test_export_view_writes_file_and_logs() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        app.cycle_year();

        let rows = app.export_view().unwrap();
        assert_eq!(rows, 1);
        assert!(app.export_path.exists());
        assert!(temp.path().join("activity.log").exists());
    }

    #[test]
    fn test_carousel_tracks_offenders() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        // Music and Labs overran their budgets
        assert_eq!(app.carousel.total(), 2);
        app.resize(80);
        app.carousel_next();
        assert_eq!(app.carousel.index(), 1);
        app.carousel_next();
        assert_eq!(app.carousel.index(), 1);
    }
}
