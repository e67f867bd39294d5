//! Core data models for EventHub.
//!
//! This crate provides the fundamental data types shared by the filter
//! engine, the session gate and the front ends: events, their identifiers,
//! certificate data and the built-in sample catalog.

pub mod builders;
pub mod catalog;
pub mod certificate;
pub mod event;
pub mod ids;

// Re-export main types
pub use builders::EventBuilder;
pub use catalog::{CATEGORY_OPTIONS, DEFAULT_IMAGE_URL, LOCATION_OPTIONS};
pub use certificate::CertificateData;
pub use event::{format_date, Event, DATE_FORMAT};
pub use ids::EventId;
