//! Event filtering and pagination for EventHub.
//!
//! This crate provides:
//! - `EventFilter`: the search/date/category/location predicates
//! - `Pagination`: fixed-size page arithmetic over a filtered list
//! - `EventFilterEngine`: both applied to a list in one pass
//! - `EventRepository`: the read-only source the events come from
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use eventhub_events::{EventFilter, EventFilterEngine, EventRepository, StaticEventRepository};
//! use eventhub_models::catalog;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let repo = StaticEventRepository::new(catalog::primary_events(today));
//!
//! let engine = EventFilterEngine::new(6);
//! let filter = EventFilter::new().with_search_term("tech");
//! let result = engine.run(&repo.list(), &filter, 1);
//!
//! assert_eq!(result.filtered.len(), 2);
//! assert!(!result.pagination.shows_controls());
//! ```

pub mod engine;
pub mod error;
pub mod filter;
pub mod options;
pub mod pagination;
pub mod repository;

pub use engine::{EventFilterEngine, FilterResult, DEFAULT_PAGE_SIZE};
pub use error::{EventError, Result};
pub use filter::EventFilter;
pub use options::FilterOptions;
pub use pagination::Pagination;
pub use repository::{EventRepository, StaticEventRepository};
