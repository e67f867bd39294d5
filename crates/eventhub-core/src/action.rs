//! User actions dispatched to the reducer.

/// Everything a front end can ask the hub to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Edit the title search box.
    SetSearchTerm(String),
    /// Pick a date (`YYYY-MM-DD`), or clear it with an empty string.
    SetDateFilter(String),
    /// Pick a category, or "All" with an empty string.
    SetCategoryFilter(String),
    /// Pick a location, or "All" with an empty string.
    SetLocationFilter(String),
    /// Clear all four filters.
    ClearFilters,
    /// Select a page (1-based).
    GoToPage(usize),
    /// Submit the login form.
    Login { username: String, password: String },
    /// Log out.
    Logout,
    /// Open the QR scanner. Ignored unless logged in.
    OpenScanner,
    /// Dismiss the scanner without submitting a code.
    CancelScan,
    /// Submit a scanned code.
    SubmitCode(String),
    /// Close the certificate view.
    CloseCertificate,
    /// Dismiss the pending notice.
    AcknowledgeNotice,
}
