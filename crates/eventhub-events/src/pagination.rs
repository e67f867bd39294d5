//! Fixed-size page arithmetic.

use std::ops::{Range, RangeInclusive};

/// Position of the current page within a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    page_size: usize,
    current_page: usize,
}

impl Pagination {
    /// Creates a pagination. A zero page size or page number is raised to 1.
    pub fn new(total_items: usize, page_size: usize, current_page: usize) -> Self {
        Self {
            total_items,
            page_size: page_size.max(1),
            current_page: current_page.max(1),
        }
    }

    /// 1-based page number, at least 1.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages, `ceil(total_items / page_size)`. Zero when empty.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Returns true if page controls should be shown (more than one page).
    pub fn shows_controls(&self) -> bool {
        self.total_pages() > 1
    }

    /// Page numbers offered by the controls.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    /// Returns true if the current page lies past the last page.
    pub fn is_past_end(&self) -> bool {
        self.current_page > self.total_pages()
    }

    /// Index range of the current page, clamped to the item count.
    ///
    /// Empty when the current page lies past the last page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        let end = self.current_page.saturating_mul(self.page_size);
        start.min(self.total_items)..end.min(self.total_items)
    }

    /// Slices the current page out of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(Pagination::new(0, 6, 1).total_pages(), 0);
        assert_eq!(Pagination::new(6, 6, 1).total_pages(), 1);
        assert_eq!(Pagination::new(7, 6, 1).total_pages(), 2);
        assert_eq!(Pagination::new(10, 6, 1).total_pages(), 2);
        assert_eq!(Pagination::new(13, 6, 1).total_pages(), 3);
    }

    #[test]
    fn test_controls_hidden_for_single_page() {
        assert!(!Pagination::new(0, 6, 1).shows_controls());
        assert!(!Pagination::new(6, 6, 1).shows_controls());
        assert!(Pagination::new(7, 6, 1).shows_controls());
    }

    #[test]
    fn test_page_numbers() {
        let pages: Vec<_> = Pagination::new(10, 6, 1).page_numbers().collect();
        assert_eq!(pages, vec![1, 2]);
        assert_eq!(Pagination::new(0, 6, 1).page_numbers().count(), 0);
    }

    #[test]
    fn test_range_clamped() {
        assert_eq!(Pagination::new(10, 6, 1).range(), 0..6);
        assert_eq!(Pagination::new(10, 6, 2).range(), 6..10);
        assert_eq!(Pagination::new(10, 6, 3).range(), 10..10);
    }

    #[test]
    fn test_page_length_formula() {
        let items: Vec<usize> = (0..17).collect();
        for total in 0..=items.len() {
            for page in 1..=5 {
                let p = Pagination::new(total, 6, page);
                let expected = total.saturating_sub((page - 1) * 6).min(6);
                assert_eq!(p.slice(&items[..total]).len(), expected);
                assert!(p.slice(&items[..total]).len() <= 6);
            }
        }
    }

    #[test]
    fn test_past_end_is_empty() {
        let items = [1, 2, 3];
        let p = Pagination::new(3, 6, 4);
        assert!(p.is_past_end());
        assert!(p.slice(&items).is_empty());
    }

    #[test]
    fn test_zero_inputs_raised() {
        let p = Pagination::new(5, 0, 0);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 5);
        assert_eq!(p.range(), 0..1);
    }
}
