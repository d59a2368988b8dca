//! Worst offenders: the budget lines with the largest overruns

use serde::Serialize;
use std::io::Write;

use crate::display::report::{format_currency, format_percent, text_or_placeholder};
use crate::error::{EdubudgetError, EdubudgetResult};
use crate::models::{Money, Record, RecordId};
use crate::storage::Dataset;

/// Number of lines shown in the carousel
pub const OFFENDER_LIMIT: usize = 5;

/// A budget line that spent more than it was approved for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offender {
    pub id: RecordId,
    pub record: Record,
    /// Cash expense minus approved amount (always positive)
    pub overrun: Money,
    /// Overrun as a percentage of the approved amount
    pub overrun_percent: f64,
}

/// Up to `limit` lines with a positive overrun on a positive budget
///
/// Ordered by overrun amount, largest first. Equal overruns keep dataset
/// order.
pub fn worst_offenders(dataset: &Dataset, limit: usize) -> Vec<Offender> {
    let mut offenders: Vec<Offender> = dataset
        .iter()
        .filter(|(_, r)| r.modified.is_positive() && r.difference().is_positive())
        .map(|(id, r)| Offender {
            id,
            record: r.clone(),
            overrun: r.difference(),
            overrun_percent: r.overrun_percent().unwrap_or(0.0),
        })
        .collect();

    offenders.sort_by(|a, b| b.overrun.cmp(&a.overrun));
    offenders.truncate(limit);
    offenders
}

/// Carousel report over the worst offenders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffendersReport {
    pub offenders: Vec<Offender>,
}

impl OffendersReport {
    /// Generate the top five offenders of a dataset
    pub fn generate(dataset: &Dataset) -> Self {
        Self {
            offenders: worst_offenders(dataset, OFFENDER_LIMIT),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::from("Worst Offenders\n\n");

        if self.offenders.is_empty() {
            output.push_str("No results\n");
            return output;
        }

        for (rank, offender) in self.offenders.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} / {}\n   {} ({} over budget in {})\n",
                rank + 1,
                offender.record.department_or_unknown(),
                text_or_placeholder(offender.record.budget_name.as_deref()),
                format_currency(offender.overrun),
                format_percent(Some(offender.overrun_percent)),
                offender.record.year
            ));
        }

        output
    }

    /// Export the offenders to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> EdubudgetResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Rank", "Year", "Department", "Budget Name", "Overrun", "Overrun %"])
            .map_err(|e| EdubudgetError::Export(e.to_string()))?;

        for (rank, offender) in self.offenders.iter().enumerate() {
            csv.write_record([
                (rank + 1).to_string(),
                offender.record.year.to_string(),
                offender.record.department.clone().unwrap_or_default(),
                offender.record.budget_name.clone().unwrap_or_default(),
                offender.overrun.to_plain_string(),
                format!("{:.1}", offender.overrun_percent),
            ])
            .map_err(|e| EdubudgetError::Export(e.to_string()))?;
        }

        csv.flush()?;
        Ok(())
    }
}
