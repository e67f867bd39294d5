//! Application state and transition logic for EventHub.
//!
//! Front ends hold an immutable [`AppState`] and replace it with the result
//! of [`Hub::reduce`] for every user [`Action`]. Everything a screen shows is
//! derived from the state by [`Hub::view`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use eventhub_core::{Action, AppState, Hub, HubConfig};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let hub = Hub::with_sample_data(today, HubConfig::default());
//!
//! let state = hub.reduce(AppState::default(), Action::SetSearchTerm("tech".into()));
//! let view = hub.view(&state);
//! assert_eq!(view.filtered_count, 2);
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod hub;
pub mod state;

pub use action::Action;
pub use config::HubConfig;
pub use error::{ConfigError, Result};
pub use hub::{Hub, HubView};
pub use state::{AppState, FilterState, QrFlow};
