//! Record table rendering
//!
//! Turns a page of records into a bordered table for the command line.
//! Missing department or budget names show as "N/A".

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::models::{Column, Record, RecordId, SortSpec};
use crate::services::Page;

use super::report::{format_currency, text_or_placeholder, truncate};

/// Widest text cell before truncation
const MAX_TEXT_WIDTH: usize = 32;

/// Column headers, with the active sort marked by an arrow
pub fn table_headers(sort: Option<SortSpec>) -> Vec<String> {
    Column::ALL
        .iter()
        .map(|column| match sort {
            Some(spec) if spec.column == *column => {
                format!("{} {}", column.header(), spec.order.arrow())
            }
            _ => column.header().to_string(),
        })
        .collect()
}

/// Display cells for one record, in `Column::ALL` order
pub fn record_cells(record: &Record) -> Vec<String> {
    Column::ALL
        .iter()
        .map(|column| match column {
            Column::Year => record.year.to_string(),
            Column::Agency => truncate(&record.agency, MAX_TEXT_WIDTH),
            Column::Department => {
                truncate(text_or_placeholder(record.department.as_deref()), MAX_TEXT_WIDTH)
            }
            Column::BudgetName => {
                truncate(text_or_placeholder(record.budget_name.as_deref()), MAX_TEXT_WIDTH)
            }
            Column::Modified => format_currency(record.modified),
            Column::CashExpense => format_currency(record.cash_expense),
            Column::Difference => format_currency(record.difference()),
            Column::Status => record.status().label().to_string(),
        })
        .collect()
}

/// Render rows as a table, or "No results" when there are none
pub fn format_records_table<'a>(
    rows: impl IntoIterator<Item = (RecordId, &'a Record)>,
    sort: Option<SortSpec>,
) -> String {
    let mut builder = Builder::default();
    builder.push_record(table_headers(sort));

    let mut count = 0;
    for (_, record) in rows {
        builder.push_record(record_cells(record));
        count += 1;
    }

    if count == 0 {
        return "No results\n".to_string();
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(4..7), Alignment::right());
    format!("{}\n", table)
}

/// Render a table page followed by its pager line
pub fn format_page<'a>(
    page: &Page,
    rows: impl IntoIterator<Item = (RecordId, &'a Record)>,
    sort: Option<SortSpec>,
) -> String {
    let mut output = format_records_table(rows, sort);
    output.push_str(&format!("{}  ({})\n", page.summary(), page.label()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn rows() -> Vec<(RecordId, Record)> {
        vec![
            (
                RecordId::new(0),
                Record::new(2024, "DOE")
                    .with_department("Arts")
                    .with_amounts(Money::from_dollars(1_500), Money::from_dollars(2_500)),
            ),
            (RecordId::new(1), Record::new(2023, "DOE")),
        ]
    }

    #[test]
    fn test_cells_use_placeholder() {
        let records = rows();
        let cells = record_cells(&records[1].1);
        assert_eq!(cells[0], "2023");
        assert_eq!(cells[2], "N/A");
        assert_eq!(cells[3], "N/A");
        assert_eq!(cells[7], "On Track");
    }

    #[test]
    fn test_headers_mark_sort() {
        let headers = table_headers(Some(SortSpec::descending(Column::Modified)));
        assert_eq!(headers[0], "Year");
        assert!(headers[4].starts_with("Modified "));
        assert_ne!(headers[4], "Modified");
    }

    #[test]
    fn test_table_contents() {
        let records = rows();
        let text = format_records_table(records.iter().map(|(id, r)| (*id, r)), None);
        assert!(text.contains("Arts"));
        assert!(text.contains("$2.50K"));
        assert!(text.contains("Critical Overrun"));
    }

    #[test]
    fn test_empty_table() {
        let text = format_records_table(Vec::<(RecordId, &Record)>::new(), None);
        assert_eq!(text, "No results\n");
    }
}
