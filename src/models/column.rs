//! Table columns and sort specifications
//!
//! The set of sortable columns is closed. Every column maps to exactly one
//! comparator through [`Column::comparator`].

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::record::Record;
use crate::error::EdubudgetError;

/// Signature shared by all record comparators
pub type Comparator = fn(&Record, &Record) -> Ordering;

/// A sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Agency,
    Year,
    Department,
    BudgetName,
    Modified,
    CashExpense,
    Difference,
    Status,
}

impl Column {
    /// All columns in table display order
    pub const ALL: [Column; 8] = [
        Column::Year,
        Column::Agency,
        Column::Department,
        Column::BudgetName,
        Column::Modified,
        Column::CashExpense,
        Column::Difference,
        Column::Status,
    ];

    /// Header text as shown in the table (and as used by the source CSV)
    pub const fn header(&self) -> &'static str {
        match self {
            Column::Agency => "Agency",
            Column::Year => "Year",
            Column::Department => "Department",
            Column::BudgetName => "Budget Name",
            Column::Modified => "Modified",
            Column::CashExpense => "Cash Expense",
            Column::Difference => "Difference",
            Column::Status => "Status",
        }
    }

    /// Command-line name of the column
    pub const fn key(&self) -> &'static str {
        match self {
            Column::Agency => "agency",
            Column::Year => "year",
            Column::Department => "department",
            Column::BudgetName => "budget-name",
            Column::Modified => "modified",
            Column::CashExpense => "cash-expense",
            Column::Difference => "difference",
            Column::Status => "status",
        }
    }

    /// Whether the column compares numerically (or by status rank)
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Column::Modified | Column::CashExpense | Column::Difference | Column::Status
        )
    }

    /// The ascending comparator for this column
    pub fn comparator(&self) -> Comparator {
        match self {
            Column::Agency => compare_agency,
            Column::Year => compare_year_text,
            Column::Department => compare_department,
            Column::BudgetName => compare_budget_name,
            Column::Modified => compare_modified,
            Column::CashExpense => compare_cash_expense,
            Column::Difference => compare_difference,
            Column::Status => compare_status,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Column {
    type Err = EdubudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        let column = match normalized.as_str() {
            "agency" => Column::Agency,
            "year" => Column::Year,
            "department" | "dept" => Column::Department,
            "budget-name" | "program" => Column::BudgetName,
            "modified" | "budget" => Column::Modified,
            "cash-expense" | "cash" | "spent" => Column::CashExpense,
            "difference" | "diff" => Column::Difference,
            "status" => Column::Status,
            _ => {
                let accepted: Vec<&str> = Column::ALL.iter().map(|c| c.key()).collect();
                return Err(EdubudgetError::unknown_value("column", s, &accepted));
            }
        };
        Ok(column)
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn compare_agency(a: &Record, b: &Record) -> Ordering {
    a.agency.cmp(&b.agency)
}

fn compare_year_text(a: &Record, b: &Record) -> Ordering {
    a.year.to_string().cmp(&b.year.to_string())
}

fn compare_department(a: &Record, b: &Record) -> Ordering {
    text(&a.department).cmp(text(&b.department))
}

fn compare_budget_name(a: &Record, b: &Record) -> Ordering {
    text(&a.budget_name).cmp(text(&b.budget_name))
}

fn compare_modified(a: &Record, b: &Record) -> Ordering {
    a.modified.cmp(&b.modified)
}

fn compare_cash_expense(a: &Record, b: &Record) -> Ordering {
    a.cash_expense.cmp(&b.cash_expense)
}

fn compare_difference(a: &Record, b: &Record) -> Ordering {
    a.difference().cmp(&b.difference())
}

fn compare_status(a: &Record, b: &Record) -> Ordering {
    a.status().rank().cmp(&b.status().rank())
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// The opposite direction
    pub const fn reversed(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Arrow shown next to the active column header
    pub const fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "▲",
            SortOrder::Descending => "▼",
        }
    }
}

/// A column together with a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: Column,
    pub order: SortOrder,
}

impl SortSpec {
    /// Ascending sort on a column
    pub const fn ascending(column: Column) -> Self {
        Self {
            column,
            order: SortOrder::Ascending,
        }
    }

    /// Descending sort on a column
    pub const fn descending(column: Column) -> Self {
        Self {
            column,
            order: SortOrder::Descending,
        }
    }

    /// Compare two records under this spec
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ordering = (self.column.comparator())(a, b);
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.order.arrow())
    }
}

/// Header-click sort state
///
/// Selecting the active column flips its direction; selecting another column
/// starts it ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    active: Option<SortSpec>,
}

impl SortState {
    /// Create an unsorted state
    pub fn new() -> Self {
        Self::default()
    }

    /// The active sort, if any
    pub fn active(&self) -> Option<SortSpec> {
        self.active
    }

    /// Register a click on a column header and return the resulting spec
    pub fn toggle(&mut self, column: Column) -> SortSpec {
        let spec = match self.active {
            Some(current) if current.column == column => SortSpec {
                column,
                order: current.order.reversed(),
            },
            _ => SortSpec::ascending(column),
        };
        self.active = Some(spec);
        spec
    }

    /// Force a specific sort
    pub fn set(&mut self, spec: SortSpec) {
        self.active = Some(spec);
    }

    /// Forget the active sort
    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_parse_column_names() {
        assert_eq!("Budget Name".parse::<Column>().unwrap(), Column::BudgetName);
        assert_eq!("cash_expense".parse::<Column>().unwrap(), Column::CashExpense);
        assert_eq!("program".parse::<Column>().unwrap(), Column::BudgetName);
        assert_eq!("STATUS".parse::<Column>().unwrap(), Column::Status);
        assert!("color".parse::<Column>().is_err());
    }

    #[test]
    fn test_every_column_round_trips_through_key() {
        for column in Column::ALL {
            assert_eq!(column.key().parse::<Column>().unwrap(), column);
        }
    }

    #[test]
    fn test_text_comparator_uses_both_operands() {
        let a = Record::new(2024, "Alpha");
        let b = Record::new(2024, "Beta");
        let cmp = Column::Agency.comparator();
        assert_eq!(cmp(&a, &b), Ordering::Less);
        assert_eq!(cmp(&b, &a), Ordering::Greater);
        assert_eq!(cmp(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_text_comparator_is_case_sensitive() {
        let upper = Record::new(2024, "Zeta");
        let lower = Record::new(2024, "alpha");
        assert_eq!(Column::Agency.comparator()(&upper, &lower), Ordering::Less);
    }

    #[test]
    fn test_missing_text_sorts_first() {
        let none = Record::new(2024, "A");
        let some = Record::new(2024, "A").with_department("Facilities");
        assert_eq!(Column::Department.comparator()(&none, &some), Ordering::Less);
    }

    #[test]
    fn test_difference_comparator() {
        let small = Record::new(2024, "A").with_amounts(Money::from_dollars(100), Money::from_dollars(110));
        let large = Record::new(2024, "A").with_amounts(Money::from_dollars(100), Money::from_dollars(300));
        assert_eq!(Column::Difference.comparator()(&small, &large), Ordering::Less);
    }

    #[test]
    fn test_descending_spec_reverses() {
        let a = Record::new(2023, "A");
        let b = Record::new(2025, "A");
        assert_eq!(SortSpec::ascending(Column::Year).compare(&a, &b), Ordering::Less);
        assert_eq!(SortSpec::descending(Column::Year).compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_toggle_same_column_flips() {
        let mut state = SortState::new();
        assert_eq!(state.toggle(Column::Modified), SortSpec::ascending(Column::Modified));
        assert_eq!(state.toggle(Column::Modified), SortSpec::descending(Column::Modified));
        assert_eq!(state.toggle(Column::Modified), SortSpec::ascending(Column::Modified));
    }

    #[test]
    fn test_toggle_other_column_resets_to_ascending() {
        let mut state = SortState::new();
        state.toggle(Column::Modified);
        state.toggle(Column::Modified);
        assert_eq!(state.toggle(Column::Agency), SortSpec::ascending(Column::Agency));
    }
}
