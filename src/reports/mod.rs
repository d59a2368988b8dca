//! Reports module for edubudget
//!
//! The aggregation engine: headline figures, the department chart, insights
//! and the worst-offender list. Each report is a plain struct computed from
//! borrowed records, with terminal and CSV renderings alongside.

pub mod departments;
pub mod insights;
pub mod offenders;
pub mod summary;

pub use departments::{department_totals, ChartKind, DepartmentChart, DepartmentTotal};
pub use insights::{
    most_efficient_department, top_overrun, year_over_year, DepartmentEfficiency, Insights,
    TopOverrun, YearGrowth,
};
pub use offenders::{worst_offenders, Offender, OffendersReport, OFFENDER_LIMIT};
pub use summary::{EfficiencyBand, HeroStats, SummaryReport, ViewTotals};
