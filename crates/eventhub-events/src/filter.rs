//! Event filtering for queries.

use eventhub_models::Event;

/// Filter criteria for browsing events.
///
/// Empty strings mean "no constraint", matching how the selectors report
/// their "All ..." choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Case-insensitive substring of the title.
    pub search_term: String,
    /// Exact `YYYY-MM-DD` date.
    pub date: String,
    /// Exact category.
    pub category: String,
    /// Exact location.
    pub location: String,
}

impl EventFilter {
    /// Creates a new empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title search term.
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Sets the date filter.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Sets the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the location filter.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Returns true if no field constrains the result.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.date.is_empty()
            && self.category.is_empty()
            && self.location.is_empty()
    }

    /// Returns true if the event matches this filter.
    pub fn matches(&self, event: &Event) -> bool {
        if !event.title_contains(&self.search_term) {
            return false;
        }

        if !self.date.is_empty() && event.date != self.date {
            return false;
        }

        if !self.category.is_empty() && event.category != self.category {
            return false;
        }

        if !self.location.is_empty() && event.location != self.location {
            return false;
        }

        true
    }

    /// Returns the matching events in their original order.
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
