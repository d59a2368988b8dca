//! Insight cards over the full dataset

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::display::{format_currency, format_growth, format_percent, text_or_placeholder};
use crate::tui::app::App;

use super::panel;

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let insights = &app.insights;
    let mut lines = Vec::new();

    lines.push(heading("Largest overrun"));
    match &insights.top_overrun {
        Some(top) => {
            lines.push(Line::from(format!(
                "{} / {}",
                text_or_placeholder(top.record.department.as_deref()),
                text_or_placeholder(top.record.budget_name.as_deref())
            )));
            lines.push(Line::from(vec![
                Span::styled(format_currency(top.overrun), Style::default().fg(Color::Red)),
                Span::raw(format!(" over in {}", top.record.year)),
            ]));
        }
        None => lines.push(Line::from("No overruns")),
    }

    lines.push(heading("Year over year"));
    if insights.growth.is_empty() {
        lines.push(Line::from("Not enough fiscal years"));
    }
    for growth in &insights.growth {
        let color = match growth.growth {
            Some(g) if g < 0.0 => Color::Green,
            Some(_) => Color::Red,
            None => Color::DarkGray,
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} vs {}: ", growth.year, growth.previous_year)),
            Span::styled(format_growth(growth.growth), Style::default().fg(color)),
        ]));
    }
    if let Some((year, total)) = insights.latest_year {
        lines.push(Line::from(format!("{} spend: {}", year, format_currency(total))));
    }

    lines.push(heading("Most efficient department"));
    match &insights.most_efficient {
        Some(best) => lines.push(Line::from(format!(
            "{} ({} avg over {} lines)",
            best.department,
            format_percent(Some(best.average_ratio)),
            best.line_count
        ))),
        None => lines.push(Line::from("No qualifying department")),
    }

    let paragraph = Paragraph::new(lines)
        .block(panel("Insights"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
