//! Storage layer for edubudget
//!
//! Loads the source CSV once and holds the resulting immutable dataset.

pub mod dataset;
pub mod loader;

pub use dataset::Dataset;
pub use loader::{
    load_from_path, load_from_reader, load_from_str, parse_row, parse_year, HeaderMap,
    LoadOptions, LoadReport, RejectionCounts, RowRejection,
};
