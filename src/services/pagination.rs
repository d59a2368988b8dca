//! Table pagination
//!
//! Pages are 1-based. An empty view still has one (empty) page so that
//! "Page 1 of 1" is always a valid position.

use serde::Serialize;

use crate::error::{EdubudgetError, EdubudgetResult};
use crate::models::{RecordId, View};

/// Default number of rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Current position within a paged view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Start at page 1; a zero page size is treated as 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
        }
    }

    /// Rows per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current 1-based page
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages for a view of `total` rows (at least 1)
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Go back to the first page
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Advance one page; no-op on the last page. Returns whether it moved.
    pub fn next(&mut self, total: usize) -> bool {
        if self.current < self.total_pages(total) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; no-op on the first page. Returns whether it moved.
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a specific page
    pub fn go_to(&mut self, page: usize, total: usize) -> EdubudgetResult<()> {
        let total_pages = self.total_pages(total);
        if page == 0 || page > total_pages {
            return Err(EdubudgetError::Validation(format!(
                "page {} is out of range (1-{})",
                page, total_pages
            )));
        }
        self.current = page;
        Ok(())
    }

    /// Index range of the current page within a view of `total` rows
    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// Cut the current page out of a view
    pub fn page(&self, view: &View) -> Page {
        let total = view.len();
        let range = self.range(total);
        Page {
            ids: view.ids()[range.clone()].to_vec(),
            number: self.current,
            total_pages: self.total_pages(total),
            first_row: if range.is_empty() { 0 } else { range.start + 1 },
            last_row: range.end,
            total_rows: total,
        }
    }
}

/// One page of a view, with the numbers the pager displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Record ids on this page, in view order
    pub ids: Vec<RecordId>,
    /// 1-based page number
    pub number: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// 1-based index of the first row shown (0 when empty)
    pub first_row: usize,
    /// 1-based index of the last row shown (0 when empty)
    pub last_row: usize,
    /// Rows in the whole view
    pub total_rows: usize,
}

impl Page {
    /// Whether there is anything to show
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether a previous page exists
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    /// Whether a next page exists
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Record count summary, e.g. "Showing 51-100 of 120"
    pub fn summary(&self) -> String {
        if self.is_empty() {
            "Showing 0 records".to_string()
        } else {
            format!(
                "Showing {}-{} of {}",
                self.first_row, self.last_row, self.total_rows
            )
        }
    }

    /// Pager label, e.g. "Page 2 of 3"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.number, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(n: usize) -> View {
        View::from_ids((0..n).map(RecordId::new).collect(), None)
    }

    #[test]
    fn test_page_sizes() {
        let v = view(120);
        let mut pager = Pagination::new(50);
        let mut sizes = vec![pager.page(&v).ids.len()];
        while pager.next(v.len()) {
            sizes.push(pager.page(&v).ids.len());
        }
        assert_eq!(sizes, vec![50, 50, 20]);
    }

    #[test]
    fn test_next_on_last_page_is_noop() {
        let v = view(120);
        let mut pager = Pagination::new(50);
        pager.go_to(3, v.len()).unwrap();
        assert!(!pager.next(v.len()));
        assert_eq!(pager.current(), 3);
    }

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let mut pager = Pagination::new(50);
        assert!(!pager.prev());
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn test_summary_and_label() {
        let v = view(120);
        let mut pager = Pagination::new(50);
        pager.next(v.len());
        let page = pager.page(&v);
        assert_eq!(page.summary(), "Showing 51-100 of 120");
        assert_eq!(page.label(), "Page 2 of 3");
        assert!(page.has_prev());
        assert!(page.has_next());
    }

    #[test]
    fn test_empty_view_has_one_empty_page() {
        let v = view(0);
        let pager = Pagination::new(50);
        let page = pager.page(&v);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.summary(), "Showing 0 records");
        assert!(!page.has_next());
    }

    #[test]
    fn test_go_to_out_of_range() {
        let mut pager = Pagination::new(50);
        assert!(pager.go_to(0, 120).is_err());
        assert!(pager.go_to(4, 120).is_err());
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn test_exact_multiple() {
        let pager = Pagination::new(50);
        assert_eq!(pager.total_pages(100), 2);
        assert_eq!(pager.total_pages(101), 3);
    }
}
