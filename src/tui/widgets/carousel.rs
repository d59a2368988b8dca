//! Horizontal card carousel
//!
//! Shows a window of cards over a short list. How many cards fit depends on
//! the terminal width, and the window never scrolls past the last card.

use std::ops::Range;

/// Widths (in columns) up to which one or two cards are shown
pub const SINGLE_CARD_MAX_WIDTH: u16 = 96;
pub const DOUBLE_CARD_MAX_WIDTH: u16 = 128;

/// Number of cards that fit in a terminal of the given width
pub fn cards_for_width(width: u16) -> usize {
    if width <= SINGLE_CARD_MAX_WIDTH {
        1
    } else if width <= DOUBLE_CARD_MAX_WIDTH {
        2
    } else {
        3
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    total: usize,
    visible: usize,
}

impl Carousel {
    pub fn new(total: usize, width: u16) -> Self {
        Self {
            index: 0,
            total,
            visible: cards_for_width(width),
        }
    }

    /// Highest valid first-card index
    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Recompute the card count after a resize and re-clamp the index
    pub fn resize(&mut self, width: u16) {
        self.visible = cards_for_width(width);
        self.clamp();
    }

    /// Swap in a new card count, keeping the position where possible
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.index = self.index.min(self.max_index());
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index < self.max_index()
    }

    /// Advance one card; returns false at the end
    pub fn next(&mut self) -> bool {
        if self.can_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one card; returns false at the start
    pub fn prev(&mut self) -> bool {
        if self.can_prev() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Indices of the cards currently on screen
    pub fn window(&self) -> Range<usize> {
        let end = (self.index + self.visible).min(self.total);
        self.index..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_for_width() {
        assert_eq!(cards_for_width(80), 1);
        assert_eq!(cards_for_width(96), 1);
        assert_eq!(cards_for_width(97), 2);
        assert_eq!(cards_for_width(128), 2);
        assert_eq!(cards_for_width(200), 3);
    }

    #[test]
    fn test_next_stops_at_max_index() {
        let mut carousel = Carousel::new(5, 200);
        assert_eq!(carousel.max_index(), 2);
        assert!(carousel.next());
        assert!(carousel.next());
        assert!(!carousel.next());
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.window(), 2..5);
    }

    #[test]
    fn test_prev_stops_at_zero() {
        let mut carousel = Carousel::new(5, 80);
        assert!(!carousel.prev());
        carousel.next();
        assert!(carousel.prev());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_resize_clamps_index() {
        let mut carousel = Carousel::new(5, 80);
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 4);

        carousel.resize(200);
        assert_eq!(carousel.visible(), 3);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_fewer_cards_than_slots() {
        let mut carousel = Carousel::new(2, 200);
        assert_eq!(carousel.max_index(), 0);
        assert!(!carousel.next());
        assert_eq!(carousel.window(), 0..2);

        carousel.set_total(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.window(), 0..0);
    }
}
