//! Immutable application state.
//!
//! Every transition consumes a state and returns the next one; nothing here
//! is mutated in place by front ends.

use eventhub_events::EventFilter;
use eventhub_models::CertificateData;
use eventhub_session::{AuthError, Session};

/// Search/filter inputs plus the selected page.
///
/// Changing any filter field resets the page to 1. Setting a field to the
/// value it already holds is not a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    filter: EventFilter,
    current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            filter: EventFilter::default(),
            current_page: 1,
        }
    }
}

impl FilterState {
    /// The filter predicates.
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    /// The 1-based selected page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Title search term.
    pub fn search_term(&self) -> &str {
        &self.filter.search_term
    }

    /// Exact date filter.
    pub fn date_filter(&self) -> &str {
        &self.filter.date
    }

    /// Exact category filter.
    pub fn category_filter(&self) -> &str {
        &self.filter.category
    }

    /// Exact location filter.
    pub fn location_filter(&self) -> &str {
        &self.filter.location
    }

    /// Returns the state with a new search term.
    pub fn with_search_term(self, term: impl Into<String>) -> Self {
        self.edit(|f| &mut f.search_term, term.into())
    }

    /// Returns the state with a new date filter.
    pub fn with_date_filter(self, date: impl Into<String>) -> Self {
        self.edit(|f| &mut f.date, date.into())
    }

    /// Returns the state with a new category filter.
    pub fn with_category_filter(self, category: impl Into<String>) -> Self {
        self.edit(|f| &mut f.category, category.into())
    }

    /// Returns the state with a new location filter.
    pub fn with_location_filter(self, location: impl Into<String>) -> Self {
        self.edit(|f| &mut f.location, location.into())
    }

    /// Returns the state with every filter cleared.
    pub fn cleared(self) -> Self {
        self.with_search_term("")
            .with_date_filter("")
            .with_category_filter("")
            .with_location_filter("")
    }

    /// Returns the state on `page`. Page 0 is treated as 1.
    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page.max(1);
        self
    }

    fn edit<F>(mut self, field: F, value: String) -> Self
    where
        F: FnOnce(&mut EventFilter) -> &mut String,
    {
        let slot = field(&mut self.filter);
        if *slot != value {
            *slot = value;
            self.current_page = 1;
        }
        self
    }
}

/// Where the QR scan flow is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QrFlow {
    /// Scanner closed.
    #[default]
    Idle,
    /// Scanner open, waiting for a code.
    Scanning,
    /// A code matched; the certificate is on screen.
    CertificateShown(CertificateData),
    /// A code matched nothing; waiting for the notice to be acknowledged.
    NotMatched,
}

impl QrFlow {
    /// Returns true if the scanner dialog is open.
    pub fn is_scanning(&self) -> bool {
        matches!(self, QrFlow::Scanning)
    }

    /// Certificate data, if the certificate is shown.
    pub fn certificate(&self) -> Option<&CertificateData> {
        match self {
            QrFlow::CertificateShown(data) => Some(data),
            _ => None,
        }
    }
}

/// Complete application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Filter inputs and page.
    pub filter: FilterState,
    /// Login state.
    pub session: Session,
    /// QR scan flow.
    pub qr: QrFlow,
    /// Pending user notice.
    pub notice: Option<AuthError>,
}
