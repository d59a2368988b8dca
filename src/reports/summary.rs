//! Headline figures and view totals
//!
//! Hero stats describe the whole dataset; view totals describe whatever the
//! current filters leave in view.

use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

use crate::display::report::{format_count, format_currency, format_percent, separator};
use crate::error::{EdubudgetError, EdubudgetResult};
use crate::models::{Money, Record};

/// Efficiency below this percentage reads as under budget
pub const EFFICIENCY_UNDER_THRESHOLD: f64 = 95.0;
/// Efficiency above this percentage reads as over budget
pub const EFFICIENCY_OVER_THRESHOLD: f64 = 105.0;

/// Where overall spend sits relative to the approved budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyBand {
    UnderBudget,
    OnTrack,
    OverBudget,
}

impl EfficiencyBand {
    /// Band for an efficiency percentage; undefined efficiency reads as zero
    pub fn from_efficiency(efficiency: Option<f64>) -> Self {
        let pct = efficiency.unwrap_or(0.0);
        if pct < EFFICIENCY_UNDER_THRESHOLD {
            Self::UnderBudget
        } else if pct > EFFICIENCY_OVER_THRESHOLD {
            Self::OverBudget
        } else {
            Self::OnTrack
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UnderBudget => "Under budget",
            Self::OnTrack => "On track",
            Self::OverBudget => "Over budget",
        }
    }
}

/// Totals over a set of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ViewTotals {
    /// Number of records summed
    pub record_count: usize,
    /// Sum of actual spend
    pub total_cash_expense: Money,
    /// Sum of approved amounts
    pub total_modified: Money,
    /// Records spending more than 110% of a positive approved amount
    pub over_budget_count: usize,
}

impl ViewTotals {
    /// Sum a set of records
    pub fn compute<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut totals = Self::default();
        for record in records {
            totals.record_count += 1;
            totals.total_cash_expense += record.cash_expense;
            totals.total_modified += record.modified;
            if record.is_over_budget() {
                totals.over_budget_count += 1;
            }
        }
        totals
    }

    /// Spend as a percentage of the approved total; `None` when nothing was approved
    pub fn efficiency(&self) -> Option<f64> {
        self.total_cash_expense.percent_of(self.total_modified)
    }

    /// Efficiency band of these totals
    pub fn efficiency_band(&self) -> EfficiencyBand {
        EfficiencyBand::from_efficiency(self.efficiency())
    }
}

/// Dataset-wide headline counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HeroStats {
    /// Sum of actual spend over every record
    pub total_spent: Money,
    /// Distinct non-empty departments
    pub department_count: usize,
    /// Records over the 10% tolerance band
    pub alert_count: usize,
}

impl HeroStats {
    /// Compute headline counters
    pub fn compute<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut departments = HashSet::new();
        let mut stats = Self::default();
        for record in records {
            stats.total_spent += record.cash_expense;
            if let Some(department) = record.department.as_deref() {
                departments.insert(department);
            }
            if record.is_over_budget() {
                stats.alert_count += 1;
            }
        }
        stats.department_count = departments.len();
        stats
    }
}

/// Hero stats plus the metrics panel for the current view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryReport {
    pub hero: HeroStats,
    pub metrics: ViewTotals,
    pub efficiency: Option<f64>,
    pub efficiency_band: EfficiencyBand,
}

impl SummaryReport {
    /// Build the summary from the full dataset and the current view
    pub fn generate<'a, 'b>(
        dataset: impl IntoIterator<Item = &'a Record>,
        view: impl IntoIterator<Item = &'b Record>,
    ) -> Self {
        let metrics = ViewTotals::compute(view);
        Self {
            hero: HeroStats::compute(dataset),
            efficiency: metrics.efficiency(),
            efficiency_band: metrics.efficiency_band(),
            metrics,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Education Budget Overview\n");
        output.push_str(&separator(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>20}\n",
            "Total spent (all years):",
            format_currency(self.hero.total_spent)
        ));
        output.push_str(&format!(
            "{:<28} {:>20}\n",
            "Departments:",
            format_count(self.hero.department_count)
        ));
        output.push_str(&format!(
            "{:<28} {:>20}\n\n",
            "Over-budget alerts:",
            format_count(self.hero.alert_count)
        ));

        output.push_str(&format!(
            "Current view ({} records)\n",
            format_count(self.metrics.record_count)
        ));
        output.push_str(&separator(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>20}\n",
            "Total spent:",
            format_currency(self.metrics.total_cash_expense)
        ));
        output.push_str(&format!(
            "{:<28} {:>20}\n",
            "Approved budget:",
            format_currency(self.metrics.total_modified)
        ));
        output.push_str(&format!(
            "{:<28} {:>20}\n",
            "Over budget (>10%):",
            format_count(self.metrics.over_budget_count)
        ));
        output.push_str(&format!(
            "{:<28} {:>20}\n",
            "Budget efficiency:",
            format!(
                "{} ({})",
                format_percent(Some(self.efficiency.unwrap_or(0.0))),
                self.efficiency_band.label()
            )
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> EdubudgetResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let efficiency = self
            .efficiency
            .map(|e| format!("{:.1}", e))
            .unwrap_or_default();
        let rows = [
            ("hero_total_spent", self.hero.total_spent.to_plain_string()),
            ("hero_department_count", self.hero.department_count.to_string()),
            ("hero_alert_count", self.hero.alert_count.to_string()),
            ("view_record_count", self.metrics.record_count.to_string()),
            ("view_total_spent", self.metrics.total_cash_expense.to_plain_string()),
            ("view_total_budget", self.metrics.total_modified.to_plain_string()),
            ("view_over_budget_count", self.metrics.over_budget_count.to_string()),
            ("view_efficiency_percent", efficiency),
        ];

        csv.write_record(["Metric", "Value"])
            .map_err(|e| EdubudgetError::Export(e.to_string()))?;
        for (metric, value) in rows {
            csv.write_record([metric, value.as_str()])
                .map_err(|e| EdubudgetError::Export(e.to_string()))?;
        }
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(department: Option<&str>, modified: i64, cash: i64) -> Record {
        let r = Record::new(2024, "DOE")
            .with_amounts(Money::from_dollars(modified), Money::from_dollars(cash));
        match department {
            Some(d) => r.with_department(d),
            None => r,
        }
    }

    #[test]
    fn test_totals_and_efficiency() {
        let records = vec![record(None, 80, 100), record(None, 100, 50)];
        let totals = ViewTotals::compute(&records);
        assert_eq!(totals.total_cash_expense, Money::from_dollars(150));
        assert_eq!(totals.total_modified, Money::from_dollars(180));
        let efficiency = totals.efficiency().unwrap();
        assert_eq!(format!("{:.1}", efficiency), "83.3");
        assert_eq!(totals.efficiency_band(), EfficiencyBand::UnderBudget);
    }

    #[test]
    fn test_over_budget_threshold() {
        let records = vec![record(None, 100, 111), record(None, 100, 109), record(None, 100, 110)];
        let totals = ViewTotals::compute(&records);
        assert_eq!(totals.over_budget_count, 1);
    }

    #[test]
    fn test_empty_view_has_undefined_efficiency() {
        let totals = ViewTotals::compute(&Vec::<Record>::new());
        assert_eq!(totals.record_count, 0);
        assert_eq!(totals.efficiency(), None);
        assert_eq!(totals.efficiency_band(), EfficiencyBand::UnderBudget);
    }

    #[test]
    fn test_efficiency_bands() {
        assert_eq!(EfficiencyBand::from_efficiency(Some(94.9)), EfficiencyBand::UnderBudget);
        assert_eq!(EfficiencyBand::from_efficiency(Some(95.0)), EfficiencyBand::OnTrack);
        assert_eq!(EfficiencyBand::from_efficiency(Some(105.0)), EfficiencyBand::OnTrack);
        assert_eq!(EfficiencyBand::from_efficiency(Some(105.1)), EfficiencyBand::OverBudget);
    }

    #[test]
    fn test_hero_stats() {
        let records = vec![
            record(Some("Arts"), 100, 200),
            record(Some("Arts"), 100, 100),
            record(Some("Busing"), 0, 10),
            record(None, 100, 50),
        ];
        let hero = HeroStats::compute(&records);
        assert_eq!(hero.total_spent, Money::from_dollars(360));
        assert_eq!(hero.department_count, 2);
        assert_eq!(hero.alert_count, 1);
    }

    #[test]
    fn test_huge_cash_cells_saturate_totals() {
        use crate::storage::{load_from_str, LoadOptions};

        let text = "Agency,Year,Department,Budget Name,Modified,Cash Expense\n\
                    DOE,2024,A,B,1,6e16\n\
                    DOE,2024,A,B,1,6e16";
        let report = load_from_str(text, &LoadOptions::default()).unwrap();
        let records = report.dataset.records();
        let totals = ViewTotals::compute(records);
        assert_eq!(totals.record_count, 2);
        assert_eq!(totals.total_cash_expense, Money::from_cents(i64::MAX));
        assert_eq!(totals.over_budget_count, 2);

        let summary = SummaryReport::generate(records, records);
        assert_eq!(summary.hero.total_spent, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_format_terminal() {
        let records = vec![record(Some("Arts"), 80, 100), record(None, 100, 50)];
        let report = SummaryReport::generate(&records, &records);
        let text = report.format_terminal();
        assert!(text.contains("Total spent:"));
        assert!(text.contains("$150"));
        assert!(text.contains("83.3%"));
    }

    #[test]
    fn test_export_csv() {
        let records = vec![record(Some("Arts"), 80, 100)];
        let report = SummaryReport::generate(&records, &records);
        let mut out = Vec::new();
        report.export_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Metric,Value\n"));
        assert!(text.contains("view_efficiency_percent,125.0"));
    }
}
