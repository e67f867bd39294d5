//! Event type for EventHub.
//!
//! Events are immutable catalog entries: once listed they are only read,
//! filtered and matched against scanned codes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::EventId;

/// `chrono` format string for event dates (ISO 8601 calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A schedulable event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier, also the payload of the event's QR code.
    pub id: EventId,

    /// Display title.
    pub title: String,

    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,

    /// Venue or "Online".
    pub location: String,

    /// Category label, e.g. "Technology".
    pub category: String,

    /// Card image location.
    pub image_url: String,
}

impl Event {
    /// Creates an event with the default placeholder image.
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            location: location.into(),
            category: category.into(),
            image_url: crate::catalog::DEFAULT_IMAGE_URL.to_string(),
        }
    }

    /// Returns true if the title contains `term`, ignoring case.
    ///
    /// An empty term matches every title.
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Parses the date, returning `None` if it is not `YYYY-MM-DD`.
    ///
    /// The stored text must be the canonical zero-padded form, so exact
    /// date filters can match it.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .ok()
            .filter(|date| format_date(*date) == self.date)
    }
}

/// Formats a date the way event dates are stored.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
