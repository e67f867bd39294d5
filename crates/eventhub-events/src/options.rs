//! Choices offered by the category and location selectors.

use eventhub_models::{Event, CATEGORY_OPTIONS, LOCATION_OPTIONS};

/// Selector choices. An empty filter value stands for "All".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Category choices, in display order.
    pub categories: Vec<String>,
    /// Location choices, in display order.
    pub locations: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            categories: CATEGORY_OPTIONS.iter().map(|s| s.to_string()).collect(),
            locations: LOCATION_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FilterOptions {
    /// Derives choices from the values actually present in `events`,
    /// keeping first-seen order.
    pub fn from_events(events: &[Event]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut locations: Vec<String> = Vec::new();

        for event in events {
            if !categories.contains(&event.category) {
                categories.push(event.category.clone());
            }
            if !locations.contains(&event.location) {
                locations.push(event.location.clone());
            }
        }

        Self {
            categories,
            locations,
        }
    }
}
