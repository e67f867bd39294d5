//! Certificate data produced by a successful QR match.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// The facts a certificate of attendance asserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateData {
    /// Title of the attended event.
    pub event_title: String,
    /// Name of the attendee, as logged in.
    pub attendee_name: String,
    /// Date of the attended event.
    pub date: String,
}

impl CertificateData {
    /// Creates certificate data for `attendee_name` attending `event`.
    pub fn for_event(event: &Event, attendee_name: impl Into<String>) -> Self {
        Self {
            event_title: event.title.clone(),
            attendee_name: attendee_name.into(),
            date: event.date.clone(),
        }
    }
}
