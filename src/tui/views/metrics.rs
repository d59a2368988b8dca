//! Headline figures
//!
//! Left: totals over the full dataset. Right: totals for the current view,
//! with the efficiency band colored.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::{format_count, format_currency, format_percent};
use crate::reports::EfficiencyBand;
use crate::tui::app::App;

use super::panel;

fn band_color(band: EfficiencyBand) -> Color {
    match band {
        EfficiencyBand::UnderBudget => Color::Green,
        EfficiencyBand::OnTrack => Color::Yellow,
        EfficiencyBand::OverBudget => Color::Red,
    }
}

fn figure<'a>(label: &'a str, value: String, color: Color) -> Vec<Span<'a>> {
    vec![
        Span::styled(label, Style::default().fg(Color::White)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
    ]
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let hero = &app.summary.hero;
    let mut hero_spans = figure("Total spent: ", format_currency(hero.total_spent), Color::Cyan);
    hero_spans.extend(figure("Departments: ", format_count(hero.department_count), Color::Cyan));
    hero_spans.extend(figure("Alerts: ", format_count(hero.alert_count), Color::Red));
    frame.render_widget(
        Paragraph::new(Line::from(hero_spans)).block(panel("All records")),
        halves[0],
    );

    let metrics = &app.summary.metrics;
    let band = app.summary.efficiency_band;
    let mut view_spans = figure("Spend: ", format_currency(metrics.total_cash_expense), Color::Cyan);
    view_spans.extend(figure("Budget: ", format_currency(metrics.total_modified), Color::Cyan));
    view_spans.extend(figure("Over: ", format_count(metrics.over_budget_count), Color::Red));
    let efficiency_line = Line::from(vec![
        Span::styled("Efficiency: ", Style::default().fg(Color::White)),
        Span::styled(
            format_percent(Some(app.summary.efficiency.unwrap_or(0.0))),
            Style::default().fg(band_color(band)).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", band.label()), Style::default().fg(band_color(band))),
    ]);

    let title = format!("Current view ({} records)", format_count(metrics.record_count));
    frame.render_widget(
        Paragraph::new(vec![Line::from(view_spans), efficiency_line]).block(panel(&title)),
        halves[1],
    );
}
