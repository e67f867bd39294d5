//! Matching scanned QR codes against events.

use eventhub_models::{CertificateData, Event};
use tracing::{info, warn};

use crate::error::{AuthError, Result};

/// Looks up scanned codes by event identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttendanceMatcher;

impl AttendanceMatcher {
    /// Finds the first event whose id, in decimal, equals `code`.
    ///
    /// `my_events` is searched before `all_events`.
    pub fn find<'a>(code: &str, my_events: &'a [Event], all_events: &'a [Event]) -> Option<&'a Event> {
        my_events
            .iter()
            .chain(all_events.iter())
            .find(|event| event.id.matches_code(code))
    }

    /// Returns certificate data for `attendee_name` if `code` names an event.
    pub fn match_code(
        code: &str,
        my_events: &[Event],
        all_events: &[Event],
        attendee_name: &str,
    ) -> Option<CertificateData> {
        Self::find(code, my_events, all_events).map(|event| {
            info!(code = %code, event_id = %event.id, attendee = %attendee_name, "Code matched");
            CertificateData::for_event(event, attendee_name)
        })
    }

    /// Like `match_code`, but reports a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCode` if no event has that identifier.
    pub fn verify_code(
        code: &str,
        my_events: &[Event],
        all_events: &[Event],
        attendee_name: &str,
    ) -> Result<CertificateData> {
        Self::match_code(code, my_events, all_events, attendee_name).ok_or_else(|| {
            warn!(code = %code, "Code matches no event");
            AuthError::InvalidCode
        })
    }
}
