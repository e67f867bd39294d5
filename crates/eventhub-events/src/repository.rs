//! Read-only event sources.
//!
//! The filter engine and the attendance matcher only ever see events through
//! `EventRepository`, so the built-in sample lists can be swapped for a file
//! or a real backend without touching either.

use std::collections::HashSet;
use std::path::Path;

use eventhub_models::Event;
use tracing::debug;

use crate::error::{EventError, Result};

/// Trait for read-only event sources.
pub trait EventRepository: Send + Sync {
    /// Returns every event, in display order.
    fn list(&self) -> Vec<Event>;
}

/// Repository over an owned, fixed list of events.
#[derive(Debug, Clone, Default)]
pub struct StaticEventRepository {
    events: Vec<Event>,
}

impl StaticEventRepository {
    /// Creates a repository over `events`.
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Parses a JSON array of events and validates it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        validate(&events)?;
        Ok(Self::new(events))
    }

    /// Loads a JSON array of events from `path` and validates it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let repo = Self::from_json_str(&json)?;
        debug!(path = %path.display(), count = repo.len(), "Loaded events file");
        Ok(repo)
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if there are no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventRepository for StaticEventRepository {
    fn list(&self) -> Vec<Event> {
        self.events.clone()
    }
}

/// Checks that ids are unique and dates are `YYYY-MM-DD`.
fn validate(events: &[Event]) -> Result<()> {
    let mut seen = HashSet::new();
    for event in events {
        if !seen.insert(event.id) {
            return Err(EventError::DuplicateId(event.id));
        }
        if event.parsed_date().is_none() {
            return Err(EventError::InvalidDate {
                id: event.id,
                date: event.date.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VALID: &str = r#"[
        {"id": 1, "title": "Jazz Night", "date": "2024-05-01", "location": "Boston", "category": "Music", "imageUrl": "/img/1.png"},
        {"id": 2, "title": "Chess Open", "date": "2024-05-02", "location": "Online", "category": "Sports", "imageUrl": "/img/2.png"}
    ]"#;

    #[test]
    fn test_list_preserves_order() {
        let repo = StaticEventRepository::from_json_str(VALID).unwrap();
        let events = repo.list();

        assert_eq!(repo.len(), 2);
        assert_eq!(events[0].title, "Jazz Night");
        assert_eq!(events[1].title, "Chess Open");
        assert_eq!(events[1].image_url, "/img/2.png");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"id": 5, "title": "A", "date": "2024-05-01", "location": "X", "category": "Y", "imageUrl": ""},
            {"id": 5, "title": "B", "date": "2024-05-02", "location": "X", "category": "Y", "imageUrl": ""}
        ]"#;

        let err = StaticEventRepository::from_json_str(json).unwrap_err();
        assert!(matches!(err, EventError::DuplicateId(id) if id.value() == 5));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let json = r#"[
            {"id": 1, "title": "A", "date": "May 1st", "location": "X", "category": "Y", "imageUrl": ""}
        ]"#;

        let err = StaticEventRepository::from_json_str(json).unwrap_err();
        assert!(matches!(err, EventError::InvalidDate { ref date, .. } if date == "May 1st"));
    }

    #[test]
    fn test_non_iso_dates_rejected() {
        for date in ["2024-6-1", "2024-06-1", " 2024-06-01", "+2024-06-01"] {
            let json = serde_json::json!([
                {"id": 1, "title": "A", "date": date, "location": "X", "category": "Y", "imageUrl": ""}
            ])
            .to_string();

            let err = StaticEventRepository::from_json_str(&json).unwrap_err();
            assert!(
                matches!(err, EventError::InvalidDate { date: ref d, .. } if d == date),
                "accepted {date:?}"
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = StaticEventRepository::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, EventError::Parse(_)));
    }

    #[test]
    fn test_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        fs::write(&path, VALID).unwrap();

        let repo = StaticEventRepository::from_path(&path).unwrap();
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_from_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let err = StaticEventRepository::from_path(temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, EventError::Io(_)));
    }

    #[test]
    fn test_empty_repository() {
        let repo = StaticEventRepository::default();
        assert!(repo.is_empty());
        assert!(repo.list().is_empty());
    }
}
