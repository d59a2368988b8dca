//! Worst offenders carousel
//!
//! Draws the cards in the carousel window side by side, with arrows showing
//! whether more cards lie to either side.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::{format_currency, text_or_placeholder, truncate};
use crate::reports::Offender;
use crate::tui::app::App;
use crate::tui::layout::columns;

use super::panel;

fn card(offender: &Offender, rank: usize, width: usize) -> Paragraph<'static> {
    let record = &offender.record;
    let lines = vec![
        Line::from(Span::styled(
            truncate(text_or_placeholder(record.department.as_deref()), width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(truncate(text_or_placeholder(record.budget_name.as_deref()), width)),
        Line::from(vec![
            Span::styled(format_currency(offender.overrun), Style::default().fg(Color::Red)),
            Span::raw(format!(
                " {:.1}% over in {}",
                offender.overrun_percent, record.year
            )),
        ]),
    ];

    let block = Block::default()
        .title(format!(" #{} ", rank))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    Paragraph::new(lines).block(block)
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let carousel = &app.carousel;
    let left = if carousel.can_prev() { "◀ h" } else { "   " };
    let right = if carousel.can_next() { "l ▶" } else { "   " };
    let block = panel(&format!("Worst offenders {} {}", left, right));
    let content = block.inner(area);
    frame.render_widget(block, area);

    if carousel.is_empty() {
        let text = Paragraph::new("No results").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, content);
        return;
    }

    let slots = columns(content, carousel.visible());
    for (slot, index) in slots.into_iter().zip(carousel.window()) {
        if let Some(offender) = app.offenders.offenders.get(index) {
            let width = slot.width.saturating_sub(2) as usize;
            frame.render_widget(card(offender, index + 1, width), slot);
        }
    }
}
