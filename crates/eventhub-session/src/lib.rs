//! Login gate and attendance matching for EventHub.
//!
//! - `SessionGate` checks credentials through an injected
//!   `CredentialVerifier` and fills the session's "my events" from a
//!   repository.
//! - `AttendanceMatcher` turns a scanned code into certificate data.
//! - `Certificate` renders the certificate of attendance.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use eventhub_events::StaticEventRepository;
//! use eventhub_models::catalog;
//! use eventhub_session::{AttendanceMatcher, SessionGate, StaticCredentials};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let mine = Arc::new(StaticEventRepository::new(catalog::secondary_events(today)));
//! let gate = SessionGate::new(Arc::new(StaticCredentials::default()), mine);
//!
//! let session = gate.login("user", "password").unwrap();
//! let all = catalog::primary_events(today);
//! let data = AttendanceMatcher::match_code("101", &session.my_events, &all, &session.username);
//! assert_eq!(data.unwrap().event_title, "Web Development Workshop");
//! ```

pub mod certificate;
pub mod credentials;
pub mod error;
pub mod gate;
pub mod matcher;

pub use certificate::{Certificate, DEFAULT_ATTENDANCE_HOURS, DEFAULT_ISSUER};
pub use credentials::{CredentialVerifier, StaticCredentials};
pub use error::{AuthError, Result};
pub use gate::{Session, SessionGate};
pub use matcher::AttendanceMatcher;
