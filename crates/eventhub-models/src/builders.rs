//! Builder pattern for events.

use chrono::NaiveDate;

use crate::catalog::DEFAULT_IMAGE_URL;
use crate::event::{format_date, Event};
use crate::ids::EventId;

/// Builder for creating Event instances with a fluent API.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    id: EventId,
    title: String,
    date: String,
    location: String,
    category: String,
    image_url: Option<String>,
}

impl EventBuilder {
    /// Creates a new EventBuilder with the identifying fields.
    pub fn new(id: impl Into<EventId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: String::new(),
            location: String::new(),
            category: String::new(),
            image_url: None,
        }
    }

    /// Sets the date from a `YYYY-MM-DD` string.
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Sets the date from a calendar date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = format_date(date);
        self
    }

    /// Sets the location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the image URL (defaults to the placeholder image).
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Builds the Event.
    pub fn build(self) -> Event {
        Event {
            id: self.id,
            title: self.title,
            date: self.date,
            location: self.location,
            category: self.category,
            image_url: self
                .image_url
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        }
    }
}

impl Event {
    /// Creates a builder for a new event.
    pub fn builder(id: impl Into<EventId>, title: impl Into<String>) -> EventBuilder {
        EventBuilder::new(id, title)
    }
}
