//! Records table
//!
//! Shows the current page of the view. Numeric columns are right-aligned,
//! over-budget rows are tinted and the sorted column header carries an arrow.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::{record_cells, table_headers};
use crate::models::{BudgetStatus, Column};
use crate::tui::app::App;

use super::panel;

const WIDTHS: [Constraint; 8] = [
    Constraint::Length(6),  // Year
    Constraint::Min(12),    // Agency
    Constraint::Min(12),    // Department
    Constraint::Min(14),    // Budget name
    Constraint::Length(10), // Modified
    Constraint::Length(10), // Cash expense
    Constraint::Length(10), // Difference
    Constraint::Length(14), // Status
];

fn status_color(status: BudgetStatus) -> Color {
    match status {
        BudgetStatus::CriticalOverrun => Color::Magenta,
        BudgetStatus::OverBudget => Color::Red,
        BudgetStatus::UnderBudget => Color::Green,
        BudgetStatus::OnTrack => Color::Yellow,
    }
}

fn cell(text: String, column: Column) -> Cell<'static> {
    if column.is_numeric() {
        Cell::from(Text::from(text).right_aligned())
    } else {
        Cell::from(text)
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let page = app.dashboard.page();
    let title = format!(
        "Budget lines · {} · {} · [ ] to page, 1-8 to sort",
        page.summary(),
        page.label()
    );
    let block = panel(&title);

    let rows = app.dashboard.page_rows();
    if rows.is_empty() {
        let text = Paragraph::new("No results")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(
        table_headers(app.dashboard.active_sort())
            .into_iter()
            .zip(Column::ALL)
            .enumerate()
            .map(|(i, (text, column))| cell(format!("{}:{}", i + 1, text), column)),
    )
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .height(1);

    let body: Vec<Row> = rows
        .iter()
        .map(|(_, record)| {
            let status = record.status();
            let cells = record_cells(record)
                .into_iter()
                .zip(Column::ALL)
                .map(|(text, column)| {
                    let cell = cell(text, column);
                    if column == Column::Status {
                        cell.style(Style::default().fg(status_color(status)))
                    } else {
                        cell
                    }
                });
            Row::new(cells)
        })
        .collect();

    let table = Table::new(body, WIDTHS).header(header).block(block);
    frame.render_widget(table, area);
}
