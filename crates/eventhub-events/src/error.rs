//! Error types for loading event data.

use eventhub_models::EventId;
use thiserror::Error;

/// Errors that can occur while loading events into a repository.
#[derive(Error, Debug)]
pub enum EventError {
    /// The events file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The events file is not a valid JSON event list.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two events share an identifier.
    #[error("duplicate event id: {0}")]
    DuplicateId(EventId),

    /// An event date is not `YYYY-MM-DD`.
    #[error("invalid date '{date}' on event {id}")]
    InvalidDate { id: EventId, date: String },
}

/// Result type alias for event operations.
pub type Result<T> = std::result::Result<T, EventError>;
