//! Status bar view
//!
//! Shows the active filters, any status message and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let criteria = app.dashboard.criteria();
    let mut spans = vec![
        Span::styled(" Year: ", Style::default().fg(Color::White)),
        Span::styled(criteria.year.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(" │ "),
        Span::styled("Dept: ", Style::default().fg(Color::White)),
        Span::styled(criteria.department.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(" │ "),
        Span::styled("Program: ", Style::default().fg(Color::White)),
        Span::styled(criteria.program.to_string(), Style::default().fg(Color::Cyan)),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(Color::Yellow)));
    }

    let hints = match app.input_mode {
        InputMode::Normal => "/:search y/d/p:filter r:reset c:chart e:export q:quit ",
        InputMode::Search => "Enter:keep Esc:cancel ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}
