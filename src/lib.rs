//! edubudget - education budget dashboard for the terminal
//!
//! This library loads a CSV of municipal education budget lines into an
//! in-memory dataset and drives a filter, sort and aggregate pipeline over
//! it. The resulting view feeds several synchronized panels: headline
//! figures, spending by department, a paginated records table, insights and
//! the worst budget overruns.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Records, money, budget status, sort columns and views
//! - `storage`: CSV loading and the immutable dataset
//! - `services`: Filter, sort and pagination engines
//! - `reports`: Aggregations behind each dashboard panel
//! - `dashboard`: The controller that keeps every panel in step
//! - `display`: Terminal formatting helpers
//! - `export`: CSV, JSON and YAML export
//! - `config`: Paths and user settings
//! - `audit`: Activity log
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use edubudget::dashboard::{Dashboard, DashboardOptions};
//! use edubudget::storage::{load_from_path, LoadOptions};
//!
//! let report = load_from_path("nyc-education-data.csv", &LoadOptions::default())?;
//! let mut dashboard = Dashboard::from_load_report(report, DashboardOptions::default());
//! dashboard.set_search("music");
//! println!("{}", dashboard.summary().format_terminal());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{EdubudgetError, EdubudgetResult};
