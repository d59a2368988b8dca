//! Dataset insights
//!
//! Three observations over the full dataset: the single largest overrun on a
//! sizeable budget line, year-over-year spending growth, and the department
//! that tracks its budgets most closely.

use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

use crate::display::report::{format_currency, format_growth, format_percent, text_or_placeholder};
use crate::error::{EdubudgetError, EdubudgetResult};
use crate::models::{Money, Record, RecordId};
use crate::storage::Dataset;

/// Minimum approved amount for a line to count as the top overrun
pub const TOP_OVERRUN_MIN_BUDGET: Money = Money::from_dollars(100_000);

/// Minimum approved amount for a line to count toward department efficiency
pub const EFFICIENCY_MIN_BUDGET: Money = Money::from_dollars(10_000);

/// Departments averaging at or below this spend ratio are ignored
const EFFICIENCY_FLOOR: f64 = 50.0;

/// Departments averaging at or above this spend ratio are ignored
const EFFICIENCY_CEILING: f64 = 999.0;

/// The budget line with the largest overrun
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopOverrun {
    pub id: RecordId,
    pub record: Record,
    pub overrun: Money,
}

/// Largest positive overrun among lines approved for at least $100,000
///
/// The first line wins on ties.
pub fn top_overrun(dataset: &Dataset) -> Option<TopOverrun> {
    let mut best: Option<(RecordId, &Record, Money)> = None;

    for (id, record) in dataset.iter() {
        if record.modified < TOP_OVERRUN_MIN_BUDGET {
            continue;
        }
        let diff = record.difference();
        let current = best.map(|(_, _, amount)| amount).unwrap_or_else(Money::zero);
        if diff > current {
            best = Some((id, record, diff));
        }
    }

    best.map(|(id, record, overrun)| TopOverrun {
        id,
        record: record.clone(),
        overrun,
    })
}

/// Spending in one year compared with the year before
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearGrowth {
    pub year: i32,
    pub previous_year: i32,
    pub total: Money,
    pub previous_total: Money,
    /// Percentage change; `None` when the previous year had no spend
    pub growth: Option<f64>,
}

/// Total spend per fiscal year, in the order the years are given
pub fn year_totals(dataset: &Dataset, years: &[i32]) -> Vec<(i32, Money)> {
    let mut totals: Vec<(i32, Money)> = years.iter().map(|y| (*y, Money::zero())).collect();
    for record in dataset.records() {
        if let Some(entry) = totals.iter_mut().find(|(year, _)| *year == record.year) {
            entry.1 += record.cash_expense;
        }
    }
    totals
}

/// Growth between each consecutive pair of fiscal years
pub fn year_over_year(dataset: &Dataset, years: &[i32]) -> Vec<YearGrowth> {
    year_totals(dataset, years)
        .windows(2)
        .map(|pair| {
            let (previous_year, previous_total) = pair[0];
            let (year, total) = pair[1];
            YearGrowth {
                year,
                previous_year,
                total,
                previous_total,
                growth: (total - previous_total).percent_of(previous_total),
            }
        })
        .collect()
}

/// Department whose sizeable lines spend closest to (but above half of) budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentEfficiency {
    pub department: String,
    /// Mean of cash / modified * 100 over the department's lines
    pub average_ratio: f64,
    pub line_count: usize,
}

/// Lowest average spend ratio among departments averaging above 50%
///
/// Only lines with a department and an approved amount of at least $10,000
/// take part. The first department encountered wins on ties.
pub fn most_efficient_department(dataset: &Dataset) -> Option<DepartmentEfficiency> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut sums: Vec<(&str, f64, usize)> = Vec::new();

    for record in dataset.records() {
        let Some(department) = record.department.as_deref() else {
            continue;
        };
        if record.modified < EFFICIENCY_MIN_BUDGET {
            continue;
        }
        let Some(ratio) = record.spend_ratio() else {
            continue;
        };
        let index = *positions.entry(department).or_insert_with(|| {
            sums.push((department, 0.0, 0));
            sums.len() - 1
        });
        sums[index].1 += ratio;
        sums[index].2 += 1;
    }

    let mut best: Option<DepartmentEfficiency> = None;
    let mut best_ratio = EFFICIENCY_CEILING;
    for (department, sum, count) in sums {
        let average = sum / count as f64;
        if average < best_ratio && average > EFFICIENCY_FLOOR {
            best_ratio = average;
            best = Some(DepartmentEfficiency {
                department: department.to_string(),
                average_ratio: average,
                line_count: count,
            });
        }
    }
    best
}

/// All insights for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub top_overrun: Option<TopOverrun>,
    pub growth: Vec<YearGrowth>,
    /// Spend in the last configured fiscal year
    pub latest_year: Option<(i32, Money)>,
    pub most_efficient: Option<DepartmentEfficiency>,
}

impl Insights {
    /// Compute every insight over the full dataset
    pub fn generate(dataset: &Dataset, fiscal_years: &[i32]) -> Self {
        let totals = year_totals(dataset, fiscal_years);
        Self {
            top_overrun: top_overrun(dataset),
            growth: year_over_year(dataset, fiscal_years),
            latest_year: totals.last().copied(),
            most_efficient: most_efficient_department(dataset),
        }
    }

    /// Format the insights for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Largest Overrun\n");
        match &self.top_overrun {
            Some(top) => {
                output.push_str(&format!(
                    "  {} / {}\n  {} over working budget in {}\n",
                    top.record.department_or_unknown(),
                    text_or_placeholder(top.record.budget_name.as_deref()),
                    format_currency(top.overrun),
                    top.record.year
                ));
            }
            None => output.push_str("  No line over $100K ran over budget\n"),
        }
        output.push('\n');

        output.push_str("Spending Trends\n");
        for growth in &self.growth {
            output.push_str(&format!(
                "  {} vs {}: {}\n",
                growth.year,
                growth.previous_year,
                format_growth(growth.growth)
            ));
        }
        if let Some((year, total)) = self.latest_year {
            output.push_str(&format!("  Total {} spending: {}\n", year, format_currency(total)));
        }
        output.push('\n');

        output.push_str("Most Efficient Department\n");
        match &self.most_efficient {
            Some(best) => output.push_str(&format!(
                "  {}: {} of budget spent on average\n",
                best.department,
                format_percent(Some(best.average_ratio))
            )),
            None => output.push_str("  Not enough data\n"),
        }

        output
    }

    /// Export the insights to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> EdubudgetResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let mut rows: Vec<[String; 3]> = Vec::new();

        if let Some(top) = &self.top_overrun {
            rows.push([
                "top_overrun".into(),
                top.record.department_or_unknown().to_string(),
                top.overrun.to_plain_string(),
            ]);
        }
        for growth in &self.growth {
            rows.push([
                "growth".into(),
                format!("{} vs {}", growth.year, growth.previous_year),
                growth.growth.map(|g| format!("{:.1}", g)).unwrap_or_default(),
            ]);
        }
        if let Some(best) = &self.most_efficient {
            rows.push([
                "most_efficient".into(),
                best.department.clone(),
                format!("{:.1}", best.average_ratio),
            ]);
        }

        csv.write_record(["Insight", "Subject", "Value"])
            .map_err(|e| EdubudgetError::Export(e.to_string()))?;
        for row in rows {
            csv.write_record(&row)
                .map_err(|e| EdubudgetError::Export(e.to_string()))?;
        }
        csv.flush()?;
        Ok(())
    }
}
