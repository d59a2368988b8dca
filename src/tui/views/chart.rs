//! Department spending chart
//!
//! Bar mode draws a horizontal bar chart of the top departments. Pie mode,
//! which a terminal cannot draw faithfully, lists each department's share of
//! the charted total as a proportional bar.

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

use crate::display::{format_bar, format_currency, truncate};
use crate::reports::ChartKind;
use crate::tui::app::App;

use super::panel;

const LABEL_WIDTH: usize = 18;

/// Colors cycled over the chart entries
const PALETTE: [Color; 5] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chart = &app.chart;
    let block = panel(&format!("Spending by Department ({}, c to switch)", chart.kind.label()));

    if chart.is_empty() {
        let text = Paragraph::new("No results")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    match chart.kind {
        ChartKind::Bar => {
            let bars: Vec<Bar> = chart
                .entries
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    Bar::default()
                        .label(Line::from(truncate(&entry.department, LABEL_WIDTH)))
                        .value(entry.total.dollars().max(0) as u64)
                        .text_value(format_currency(entry.total))
                        .style(Style::default().fg(PALETTE[i % PALETTE.len()]))
                })
                .collect();

            let widget = BarChart::default()
                .block(block)
                .direction(Direction::Horizontal)
                .bar_width(1)
                .bar_gap(0)
                .data(BarGroup::default().bars(&bars));
            frame.render_widget(widget, area);
        }
        ChartKind::Pie => {
            let bar_width = (area.width as usize).saturating_sub(LABEL_WIDTH + 14).max(4);
            let lines: Vec<Line> = chart
                .entries
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let color = PALETTE[i % PALETTE.len()];
                    let label = truncate(&entry.department, LABEL_WIDTH);
                    Line::from(vec![
                        Span::raw(format!("{:<width$} ", label, width = LABEL_WIDTH)),
                        Span::styled(
                            format_bar(entry.share, 100.0, bar_width),
                            Style::default().fg(color),
                        ),
                        Span::raw(format!(" {:>5.1}%", entry.share)),
                    ])
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
    }
}
