//! Layout definitions for the TUI
//!
//! Top to bottom: headline metrics, search bar, chart beside insights,
//! records table, offenders carousel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard screen
pub struct AppLayout {
    pub metrics: Rect,
    pub search: Rect,
    pub chart: Rect,
    pub insights: Rect,
    pub table: Rect,
    pub carousel: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),      // Metrics
                Constraint::Length(1),      // Search bar
                Constraint::Percentage(30), // Chart + insights
                Constraint::Min(6),         // Table
                Constraint::Length(6),      // Carousel
                Constraint::Length(1),      // Status bar
            ])
            .split(area);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[2]);

        Self {
            metrics: vertical[0],
            search: vertical[1],
            chart: middle[0],
            insights: middle[1],
            table: vertical[3],
            carousel: vertical[4],
            status_bar: vertical[5],
        }
    }
}

/// Split an area into `count` equal columns
pub fn columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 120, 50);
        let layout = AppLayout::new(area);
        assert_eq!(layout.metrics.height, 4);
        assert_eq!(layout.status_bar.y, 49);
        assert_eq!(layout.chart.y, layout.insights.y);
        assert!(layout.chart.width > layout.insights.width);
    }

    #[test]
    fn test_columns_split_evenly() {
        let cols = columns(Rect::new(0, 0, 90, 5), 3);
        assert_eq!(cols.len(), 3);
        assert!(cols.iter().all(|c| c.width == 30));
        assert!(columns(Rect::new(0, 0, 90, 5), 0).is_empty());
    }
}
