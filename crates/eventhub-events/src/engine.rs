//! Filter-then-paginate over an event list.

use eventhub_models::Event;

use crate::filter::EventFilter;
use crate::pagination::Pagination;

/// Number of event cards per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Output of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    /// Every matching event, in original order.
    pub filtered: Vec<Event>,
    /// The events on the requested page.
    pub page: Vec<Event>,
    /// Page position of `page` within `filtered`.
    pub pagination: Pagination,
}

/// Stateless filter engine with a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventFilterEngine {
    page_size: usize,
}

impl Default for EventFilterEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl EventFilterEngine {
    /// Creates an engine. A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Filters `events` and slices out `current_page` (1-based).
    ///
    /// A page past the end yields an empty page; it is not corrected.
    pub fn run(&self, events: &[Event], filter: &EventFilter, current_page: usize) -> FilterResult {
        let filtered = filter.apply(events);
        let pagination = Pagination::new(filtered.len(), self.page_size, current_page);
        let page = pagination.slice(&filtered).to_vec();

        FilterResult {
            filtered,
            page,
            pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eventhub_models::catalog;

    fn events() -> Vec<Event> {
        catalog::primary_events(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_default_page_size() {
        assert_eq!(EventFilterEngine::default().page_size(), 6);
    }

    #[test]
    fn test_unfiltered_pages() {
        let engine = EventFilterEngine::default();
        let all = events();

        let first = engine.run(&all, &EventFilter::new(), 1);
        assert_eq!(first.filtered.len(), 10);
        assert_eq!(first.page.len(), 6);
        assert_eq!(first.page[0].id.value(), 1);
        assert_eq!(first.pagination.total_pages(), 2);
        assert!(first.pagination.shows_controls());

        let second = engine.run(&all, &EventFilter::new(), 2);
        assert_eq!(second.page.len(), 4);
        assert_eq!(second.page[0].id.value(), 7);
    }

    #[test]
    fn test_page_past_end_not_corrected() {
        let engine = EventFilterEngine::default();
        let result = engine.run(&events(), &EventFilter::new(), 5);

        assert!(result.page.is_empty());
        assert_eq!(result.pagination.current_page(), 5);
    }

    #[test]
    fn test_filtered_single_page() {
        let engine = EventFilterEngine::default();
        let filter = EventFilter::new().with_search_term("tech");
        let result = engine.run(&events(), &filter, 1);

        assert_eq!(result.page, result.filtered);
        assert!(!result.pagination.shows_controls());
    }

    #[test]
    fn test_custom_page_size() {
        let engine = EventFilterEngine::new(3);
        let result = engine.run(&events(), &EventFilter::new(), 4);

        assert_eq!(result.pagination.total_pages(), 4);
        assert_eq!(result.page.len(), 1);
        assert_eq!(result.page[0].id.value(), 10);
    }
}
