//! TUI Views module
//!
//! One render function per dashboard panel. Views only read from the app.

pub mod chart;
pub mod insights;
pub mod metrics;
pub mod offenders;
pub mod status_bar;
pub mod table;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    metrics::render(frame, app, layout.metrics);
    frame.render_widget(&app.search_input, layout.search);
    chart::render(frame, app, layout.chart);
    insights::render(frame, app, layout.insights);
    table::render(frame, app, layout.table);
    offenders::render(frame, app, layout.carousel);
    status_bar::render(frame, app, layout.status_bar);
}

/// Bordered panel with a cyan title
pub(crate) fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}
