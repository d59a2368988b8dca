//! Filter engine
//!
//! Criteria are a conjunction: a record is kept only if every constraint
//! holds. Filtering never reorders and never touches record data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Record, View};
use crate::storage::Dataset;

/// A dropdown-style constraint: everything, or one exact value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether a value satisfies this selection
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    /// Whether this selection constrains anything
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Selection::Only(v),
            None => Selection::All,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(v) => write!(f, "{}", v),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    /// "all" (any case) means no constraint
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// Filter criteria for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Fiscal year
    pub year: Selection<i32>,
    /// Department, exact match
    pub department: Selection<String>,
    /// Budget name (the program dropdown), exact match
    pub program: Selection<String>,
    /// Case-insensitive substring over department, budget name and agency
    pub search: String,
}

impl FilterCriteria {
    /// Criteria that match every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Selection::Only(year);
        self
    }

    /// Constrain the department
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Selection::Only(department.into());
        self
    }

    /// Constrain the budget name
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Selection::Only(program.into());
        self
    }

    /// Set the free-text search
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether these criteria match everything
    pub fn is_empty(&self) -> bool {
        self.year.is_all()
            && self.department.is_all()
            && self.program.is_all()
            && self.search.is_empty()
    }

    /// Check if a record matches every constraint
    pub fn matches(&self, record: &Record) -> bool {
        if !self.year.admits(&record.year) {
            return false;
        }

        if let Selection::Only(ref department) = self.department {
            if record.department.as_deref() != Some(department.as_str()) {
                return false;
            }
        }

        if let Selection::Only(ref program) = self.program {
            if record.budget_name.as_deref() != Some(program.as_str()) {
                return false;
            }
        }

        matches_search(record, &self.search)
    }
}

/// Case-insensitive substring match over department, budget name and agency
pub fn matches_search(record: &Record, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    let contains = |field: Option<&str>| {
        field
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false)
    };

    contains(record.department.as_deref())
        || contains(record.budget_name.as_deref())
        || contains(Some(record.agency.as_str()))
}

/// Filter the full dataset, preserving dataset order
pub fn filter(dataset: &Dataset, criteria: &FilterCriteria) -> View {
    filter_view(dataset, &View::all(dataset), criteria)
}

/// Filter an existing view, preserving its order and sort
pub fn filter_view(dataset: &Dataset, view: &View, criteria: &FilterCriteria) -> View {
    let ids = view
        .ids()
        .iter()
        .copied()
        .filter(|id| dataset.get(*id).map(|r| criteria.matches(r)).unwrap_or(false))
        .collect();
    View::from_ids(ids, view.sort())
}
