//! Display formatting for terminal output
//!
//! Provides utilities for formatting amounts, percentages and record tables
//! for the command line and the terminal dashboard.

pub mod report;
pub mod table;

pub use report::{
    format_bar, format_count, format_currency, format_growth, format_percent, text_or_placeholder,
    truncate, PLACEHOLDER,
};
pub use table::{format_page, format_records_table, record_cells, table_headers};
