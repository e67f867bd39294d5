//! Built-in sample catalog.
//!
//! Some sample events are dated relative to "today", so the current date is
//! passed in rather than read from the clock here.

use chrono::{Days, NaiveDate};

use crate::event::Event;

/// Placeholder card image shared by every sample event.
pub const DEFAULT_IMAGE_URL: &str = "/api/placeholder/400/200";

/// Categories offered by the category selector.
pub const CATEGORY_OPTIONS: &[&str] = &[
    "Music",
    "Technology",
    "Food",
    "Art",
    "Sports",
    "Business",
    "Lifestyle",
];

/// Locations offered by the location selector.
pub const LOCATION_OPTIONS: &[&str] = &[
    "New York",
    "San Francisco",
    "Chicago",
    "Los Angeles",
    "Boston",
    "Online",
];

fn next_week(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(7)).unwrap_or(today)
}

/// The public event list (10 entries).
pub fn primary_events(today: NaiveDate) -> Vec<Event> {
    let week = next_week(today);
    vec![
        Event::builder(1u32, "Summer Music Festival")
            .on(today)
            .location("New York")
            .category("Music")
            .build(),
        Event::builder(2u32, "Tech Conference 2024")
            .on(week)
            .location("San Francisco")
            .category("Technology")
            .build(),
        Event::builder(3u32, "Food & Wine Expo")
            .date("2024-10-01")
            .location("Chicago")
            .category("Food")
            .build(),
        Event::builder(4u32, "Art Gallery Opening")
            .date("2024-07-20")
            .location("Los Angeles")
            .category("Art")
            .build(),
        Event::builder(5u32, "Marathon 2024")
            .date("2024-11-10")
            .location("Boston")
            .category("Sports")
            .build(),
        Event::builder(6u32, "Book Fair")
            .date("2024-09-15")
            .location("Seattle")
            .category("Literature")
            .build(),
        Event::builder(7u32, "Comedy Night")
            .date("2024-08-30")
            .location("Chicago")
            .category("Entertainment")
            .build(),
        Event::builder(8u32, "Startup Pitch Competition")
            .date("2024-10-20")
            .location("Austin")
            .category("Business")
            .build(),
        Event::builder(9u32, "AI and Machine Learning Conference")
            .on(today)
            .location("San Francisco")
            .category("Technology")
            .build(),
        Event::builder(10u32, "Sustainable Living Expo")
            .on(week)
            .location("Portland")
            .category("Lifestyle")
            .build(),
    ]
}

/// The events a logged-in user is registered for (2 entries).
pub fn secondary_events(today: NaiveDate) -> Vec<Event> {
    vec![
        Event::builder(101u32, "Web Development Workshop")
            .on(today)
            .location("Online")
            .category("Technology")
            .build(),
        Event::builder(102u32, "Digital Marketing Seminar")
            .on(next_week(today))
            .location("New York")
            .category("Business")
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_primary_has_ten_unique_ids() {
        let events = primary_events(today());
        assert_eq!(events.len(), 10);

        let ids: HashSet<_> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_relative_dates() {
        let events = primary_events(today());
        assert_eq!(events[0].date, "2024-06-01");
        assert_eq!(events[1].date, "2024-06-08");
        assert_eq!(events[8].date, "2024-06-01");
        assert_eq!(events[9].date, "2024-06-08");
    }

    #[test]
    fn test_secondary_events() {
        let events = secondary_events(today());
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id.value(), 101);
        assert_eq!(events[0].title, "Web Development Workshop");
        assert_eq!(events[0].date, "2024-06-01");
        assert_eq!(events[1].id.value(), 102);
        assert_eq!(events[1].date, "2024-06-08");
    }

    #[test]
    fn test_all_sample_dates_parse() {
        for event in primary_events(today())
            .iter()
            .chain(secondary_events(today()).iter())
        {
            assert!(event.parsed_date().is_some(), "bad date on {}", event.id);
        }
    }
}
