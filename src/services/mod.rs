//! Service layer for edubudget
//!
//! The view pipeline: filtering the dataset, sorting the resulting view, and
//! cutting it into table pages. Every operation returns a new value and leaves
//! its inputs untouched.

pub mod filter;
pub mod pagination;
pub mod sort;

pub use filter::{filter, filter_view, matches_search, FilterCriteria, Selection};
pub use pagination::{Page, Pagination, DEFAULT_PAGE_SIZE};
pub use sort::sort;
