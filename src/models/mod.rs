//! Core data models for edubudget
//!
//! This module contains the data structures of the budget domain: budget line
//! records, amounts, status bands, sortable columns and views.

pub mod column;
pub mod money;
pub mod record;
pub mod status;
pub mod view;

pub use column::{Column, Comparator, SortOrder, SortSpec, SortState};
pub use money::Money;
pub use record::{Record, RecordId, UNKNOWN_DEPARTMENT};
pub use status::BudgetStatus;
pub use view::View;
