//! Department spending report
//!
//! Groups spend by department for the chart. Records without a department are
//! grouped under "Unknown".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::display::report::{format_bar, format_currency, format_percent, truncate};
use crate::error::{EdubudgetError, EdubudgetResult};
use crate::models::{Money, Record};

/// Number of departments shown in the chart
pub const CHART_DEPARTMENTS: usize = 10;

/// How the department chart is drawn; never affects the numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
}

impl ChartKind {
    /// The other kind
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Bar => Self::Pie,
            Self::Pie => Self::Bar,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ChartKind {
    type Err = EdubudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "pie" | "doughnut" => Ok(Self::Pie),
            _ => Err(EdubudgetError::unknown_value("chart kind", s, &["bar", "pie"])),
        }
    }
}

/// Total spend for one department
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentTotal {
    /// Department name, or "Unknown"
    pub department: String,
    /// Sum of actual spend
    pub total: Money,
    /// Number of budget lines
    pub record_count: usize,
    /// Percentage of the charted total (0 when the charted total is not positive)
    pub share: f64,
}

/// Sum spend per department, largest first; ties keep first-appearance order
pub fn department_totals<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<DepartmentTotal> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<DepartmentTotal> = Vec::new();

    for record in records {
        let department = record.department_or_unknown();
        let index = *positions.entry(department).or_insert_with(|| {
            totals.push(DepartmentTotal {
                department: department.to_string(),
                total: Money::zero(),
                record_count: 0,
                share: 0.0,
            });
            totals.len() - 1
        });
        totals[index].total += record.cash_expense;
        totals[index].record_count += 1;
    }

    // stable: equal totals stay in first-appearance order
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Chart data: the top departments plus the chart kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentChart {
    pub kind: ChartKind,
    pub entries: Vec<DepartmentTotal>,
    /// Sum of the charted entries
    pub charted_total: Money,
}

impl DepartmentChart {
    /// Aggregate and keep the top departments
    pub fn generate<'a>(records: impl IntoIterator<Item = &'a Record>, kind: ChartKind) -> Self {
        let mut entries = department_totals(records);
        entries.truncate(CHART_DEPARTMENTS);

        let charted_total = entries.iter().fold(Money::zero(), |acc, e| acc + e.total);
        for entry in &mut entries {
            entry.share = if charted_total.is_positive() {
                entry.total.percent_of(charted_total).unwrap_or(0.0)
            } else {
                0.0
            };
        }

        Self {
            kind,
            entries,
            charted_total,
        }
    }

    /// (label, value) pairs for a chart widget, values in whole dollars
    pub fn series(&self) -> Vec<(String, u64)> {
        self.entries
            .iter()
            .map(|e| (e.department.clone(), e.total.dollars().max(0) as u64))
            .collect()
    }

    /// Whether there is anything to draw
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format the chart for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Spending by Department (top {}, {} chart)\n\n",
            CHART_DEPARTMENTS, self.kind
        ));

        if self.entries.is_empty() {
            output.push_str("No results\n");
            return output;
        }

        let max = self
            .entries
            .iter()
            .map(|e| e.total.as_f64())
            .fold(0.0_f64, f64::max);

        for entry in &self.entries {
            let measure = match self.kind {
                ChartKind::Bar => format_bar(entry.total.as_f64(), max, 30),
                ChartKind::Pie => format_bar(entry.share, 100.0, 30),
            };
            output.push_str(&format!(
                "{:<28} {} {:>10} {:>7}\n",
                truncate(&entry.department, 28),
                measure,
                format_currency(entry.total),
                format_percent(Some(entry.share))
            ));
        }

        output
    }

    /// Export the chart data to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> EdubudgetResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Department", "Cash Expense", "Records", "Share"])
            .map_err(|e| EdubudgetError::Export(e.to_string()))?;

        for entry in &self.entries {
            csv.write_record([
                entry.department.clone(),
                entry.total.to_plain_string(),
                entry.record_count.to_string(),
                format!("{:.2}", entry.share),
            ])
            .map_err(|e| EdubudgetError::Export(e.to_string()))?;
        }

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spend(department: Option<&str>, cash: i64) -> Record {
        let r = Record::new(2024, "DOE").with_amounts(Money::zero(), Money::from_dollars(cash));
        match department {
            Some(d) => r.with_department(d),
            None => r,
        }
    }

    #[test]
    fn test_grouping_and_order() {
        let records = vec![
            spend(Some("Arts"), 10),
            spend(Some("Busing"), 40),
            spend(None, 5),
            spend(Some("Arts"), 25),
        ];
        let totals = department_totals(&records);
        let names: Vec<_> = totals.iter().map(|t| t.department.as_str()).collect();
        assert_eq!(names, vec!["Busing", "Arts", "Unknown"]);
        assert_eq!(totals[1].total, Money::from_dollars(35));
        assert_eq!(totals[1].record_count, 2);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let records = vec![
            spend(Some("Zeta"), 10),
            spend(Some("Alpha"), 10),
            spend(Some("Mid"), 20),
        ];
        let totals = department_totals(&records);
        let names: Vec<_> = totals.iter().map(|t| t.department.as_str()).collect();
        assert_eq!(names, vec!["Mid", "Zeta", "Alpha"]);
    }

    #[test]
    fn test_chart_keeps_top_ten() {
        let records: Vec<_> = (0..15)
            .map(|i| spend(Some(&format!("Dept {}", i)), 100 + i))
            .collect();
        let chart = DepartmentChart::generate(&records, ChartKind::Bar);
        assert_eq!(chart.entries.len(), CHART_DEPARTMENTS);
        assert_eq!(chart.entries[0].department, "Dept 14");
        assert_eq!(chart.entries[9].department, "Dept 5");
    }

    #[test]
    fn test_chart_kind_does_not_change_data() {
        let records = vec![spend(Some("Arts"), 30), spend(Some("Busing"), 10)];
        let bar = DepartmentChart::generate(&records, ChartKind::Bar);
        let pie = DepartmentChart::generate(&records, ChartKind::Pie);
        assert_eq!(bar.entries, pie.entries);
        assert_eq!(bar.series(), vec![("Arts".to_string(), 30), ("Busing".to_string(), 10)]);
        assert!((bar.entries[0].share - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_chart_kind_parse() {
        assert_eq!("Pie".parse::<ChartKind>().unwrap(), ChartKind::Pie);
        assert_eq!("bar".parse::<ChartKind>().unwrap(), ChartKind::Bar);
        let err = "line".parse::<ChartKind>().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ChartKind::Bar.toggled(), ChartKind::Pie);
    }

    #[test]
    fn test_empty_chart() {
        let chart = DepartmentChart::generate(&Vec::<Record>::new(), ChartKind::Pie);
        assert!(chart.is_empty());
        assert!(chart.format_terminal().contains("No results"));
    }

    #[test]
    fn test_export_csv() {
        let records = vec![spend(Some("Arts"), 30)];
        let chart = DepartmentChart::generate(&records, ChartKind::Bar);
        let mut out = Vec::new();
        chart.export_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Arts,30,1,100.00"));
    }
}
