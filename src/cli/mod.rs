//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the dashboard controller.

pub mod export;
pub mod log;
pub mod report;
pub mod view;

pub use export::handle_export;
pub use log::handle_log;
pub use report::{
    handle_chart, handle_filters, handle_insights, handle_offenders, handle_search,
    handle_summary, handle_table,
};
pub use view::{CliContext, ViewArgs};
