//! Budget line record model
//!
//! One row of the source CSV after parsing. Records are created once at load
//! time and never modified afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::status::BudgetStatus;

/// Department label used in aggregations when a record has none
pub const UNKNOWN_DEPARTMENT: &str = "Unknown";

/// Position of a record in its dataset (CSV row order among kept rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(usize);

impl RecordId {
    /// Create an id from a dataset position
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The dataset position
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0 + 1)
    }
}

/// A single budget line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Fiscal year
    pub year: i32,

    /// Reporting agency (always non-empty)
    pub agency: String,

    /// Department, if the row had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Budget (program) name, if the row had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_name: Option<String>,

    /// Approved / working budget amount
    pub modified: Money,

    /// Actual recorded spend
    pub cash_expense: Money,
}

impl Record {
    /// Create a record with only the required fields set
    pub fn new(year: i32, agency: impl Into<String>) -> Self {
        Self {
            year,
            agency: agency.into(),
            department: None,
            budget_name: None,
            modified: Money::zero(),
            cash_expense: Money::zero(),
        }
    }

    /// Set the department
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Set the budget name
    pub fn with_budget_name(mut self, budget_name: impl Into<String>) -> Self {
        self.budget_name = Some(budget_name.into());
        self
    }

    /// Set approved and actual amounts
    pub fn with_amounts(mut self, modified: Money, cash_expense: Money) -> Self {
        self.modified = modified;
        self.cash_expense = cash_expense;
        self
    }

    /// Actual spend minus approved amount
    pub fn difference(&self) -> Money {
        self.cash_expense - self.modified
    }

    /// Difference as a percentage of the approved amount
    pub fn overrun_percent(&self) -> Option<f64> {
        self.difference().percent_of(self.modified)
    }

    /// Spend as a percentage of the approved amount
    pub fn spend_ratio(&self) -> Option<f64> {
        self.cash_expense.percent_of(self.modified)
    }

    /// Status band of this line
    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::classify(self.modified, self.cash_expense)
    }

    /// Spend above the 10% tolerance band over a positive approved amount
    pub fn is_over_budget(&self) -> bool {
        self.modified.is_positive() && self.cash_expense.exceeds_fraction_of(self.modified, 11, 10)
    }

    /// Department name used for grouping
    pub fn department_or_unknown(&self) -> &str {
        self.department.as_deref().unwrap_or(UNKNOWN_DEPARTMENT)
    }
}
