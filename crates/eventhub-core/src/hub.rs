//! The reducer and its derived view.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use eventhub_events::{
    EventFilterEngine, EventRepository, FilterOptions, Pagination, StaticEventRepository,
};
use eventhub_models::{catalog, Event};
use eventhub_session::{
    AttendanceMatcher, AuthError, Certificate, CredentialVerifier, SessionGate, StaticCredentials,
};
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::config::HubConfig;
use crate::state::{AppState, FilterState, QrFlow};

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubView {
    /// Active filter inputs.
    pub filter: FilterState,
    /// Number of events matching the filters.
    pub filtered_count: usize,
    /// Events on the selected page.
    pub events: Vec<Event>,
    /// Page position and control visibility.
    pub pagination: Pagination,
    /// Events the logged-in user is registered for.
    pub my_events: Vec<Event>,
    /// Whether the user is logged in.
    pub logged_in: bool,
    /// Whether the scanner dialog is open.
    pub scanner_open: bool,
    /// Certificate on screen, if any.
    pub certificate: Option<Certificate>,
    /// Pending notice, if any.
    pub notice: Option<AuthError>,
}

/// Owns the injected capabilities and all transition logic.
#[derive(Clone)]
pub struct Hub {
    catalog: Arc<dyn EventRepository>,
    gate: SessionGate,
    engine: EventFilterEngine,
    options: FilterOptions,
    config: HubConfig,
}

impl Hub {
    /// Creates a hub.
    ///
    /// `catalog` is the public event list; `my_events` supplies a logged-in
    /// user's events. Selector choices are taken from the catalog.
    pub fn new(
        catalog: Arc<dyn EventRepository>,
        my_events: Arc<dyn EventRepository>,
        verifier: Arc<dyn CredentialVerifier>,
        config: HubConfig,
    ) -> Self {
        let options = FilterOptions::from_events(&catalog.list());
        Self {
            catalog,
            options,
            gate: SessionGate::new(verifier, my_events),
            engine: EventFilterEngine::new(config.page_size),
            config,
        }
    }

    /// Creates a hub over the built-in sample lists and the demo account.
    pub fn with_sample_data(today: NaiveDate, config: HubConfig) -> Self {
        Self::new(
            Arc::new(StaticEventRepository::new(catalog::primary_events(today))),
            Arc::new(StaticEventRepository::new(catalog::secondary_events(today))),
            Arc::new(StaticCredentials::default()),
            config,
        )
        .with_filter_options(FilterOptions::default())
    }

    /// Replaces the selector choices.
    pub fn with_filter_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Category and location choices for the selectors.
    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    /// Applies one action, returning the next state.
    pub fn reduce(&self, state: AppState, action: Action) -> AppState {
        let mut next = state;

        match action {
            Action::SetSearchTerm(term) => {
                debug!(term = %term, "Search term changed");
                next.filter = next.filter.with_search_term(term);
            }
            Action::SetDateFilter(date) => {
                debug!(date = %date, "Date filter changed");
                next.filter = next.filter.with_date_filter(date);
            }
            Action::SetCategoryFilter(category) => {
                debug!(category = %category, "Category filter changed");
                next.filter = next.filter.with_category_filter(category);
            }
            Action::SetLocationFilter(location) => {
                debug!(location = %location, "Location filter changed");
                next.filter = next.filter.with_location_filter(location);
            }
            Action::ClearFilters => {
                next.filter = next.filter.cleared();
            }
            Action::GoToPage(page) => {
                debug!(page, "Page selected");
                next.filter = next.filter.with_page(page);
            }
            Action::Login { username, password } => {
                if next.session.is_logged_in() {
                    debug!("Login ignored, already logged in");
                    return next;
                }
                match self.gate.login(&username, &password) {
                    Ok(session) => {
                        next.session = session;
                        next.notice = None;
                    }
                    Err(err) => next.notice = Some(err),
                }
            }
            Action::Logout => {
                next.session = self.gate.logout(&next.session);
                next.qr = QrFlow::Idle;
                next.notice = None;
            }
            Action::OpenScanner => {
                if !next.session.is_logged_in() {
                    warn!("Scanner requested while logged out");
                } else if next.qr == QrFlow::Idle {
                    next.qr = QrFlow::Scanning;
                }
            }
            Action::CancelScan => {
                if next.qr.is_scanning() {
                    next.qr = QrFlow::Idle;
                }
            }
            Action::SubmitCode(code) => {
                if !next.qr.is_scanning() {
                    debug!(code = %code, "Code ignored, scanner not open");
                    return next;
                }
                let all_events = self.catalog.list();
                match AttendanceMatcher::verify_code(
                    &code,
                    &next.session.my_events,
                    &all_events,
                    &next.session.username,
                ) {
                    Ok(data) => {
                        info!(event = %data.event_title, "Certificate issued");
                        next.qr = QrFlow::CertificateShown(data);
                    }
                    Err(err) => {
                        next.qr = QrFlow::NotMatched;
                        next.notice = Some(err);
                    }
                }
            }
            Action::CloseCertificate => {
                if next.qr.certificate().is_some() {
                    next.qr = QrFlow::Idle;
                }
            }
            Action::AcknowledgeNotice => {
                next.notice = None;
                if next.qr == QrFlow::NotMatched {
                    next.qr = QrFlow::Idle;
                }
            }
        }

        next
    }

    /// Derives the renderable view of `state`.
    pub fn view(&self, state: &AppState) -> HubView {
        let events = self.catalog.list();
        let result = self.engine.run(
            &events,
            state.filter.filter(),
            state.filter.current_page(),
        );

        let certificate = state.qr.certificate().map(|data| {
            Certificate::new(data.clone())
                .with_duration_hours(self.config.attendance_hours)
                .with_issuer(self.config.issuer.clone())
        });

        HubView {
            filter: state.filter.clone(),
            filtered_count: result.filtered.len(),
            events: result.page,
            pagination: result.pagination,
            my_events: state.session.my_events.clone(),
            logged_in: state.session.is_logged_in(),
            scanner_open: state.qr.is_scanning(),
            certificate,
            notice: state.notice,
        }
    }
}

impl fmt::Debug for Hub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hub")
            .field("engine", &self.engine)
            .field("options", &self.options)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn hub() -> Hub {
        Hub::with_sample_data(today(), HubConfig::default())
    }

    fn login(hub: &Hub, state: AppState) -> AppState {
        hub.reduce(
            state,
            Action::Login {
                username: "user".into(),
                password: "password".into(),
            },
        )
    }

    #[test]
    fn test_initial_view() {
        let hub = hub();
        let view = hub.view(&AppState::default());

        assert_eq!(view.filtered_count, 10);
        assert_eq!(view.events.len(), 6);
        assert!(view.pagination.shows_controls());
        assert!(!view.logged_in);
        assert!(view.my_events.is_empty());
        assert!(view.certificate.is_none());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let hub = hub();
        let state = hub.reduce(AppState::default(), Action::GoToPage(2));
        assert_eq!(state.filter.current_page(), 2);

        let state = hub.reduce(state, Action::SetLocationFilter("Chicago".into()));
        assert_eq!(state.filter.current_page(), 1);
        assert_eq!(hub.view(&state).filtered_count, 2);
    }

    #[test]
    fn test_second_page() {
        let hub = hub();
        let state = hub.reduce(AppState::default(), Action::GoToPage(2));
        let view = hub.view(&state);

        assert_eq!(view.events.len(), 4);
        assert_eq!(view.pagination.current_page(), 2);
    }

    #[test]
    fn test_login_failure_sets_notice() {
        let hub = hub();
        let state = hub.reduce(
            AppState::default(),
            Action::Login {
                username: "user".into(),
                password: "nope".into(),
            },
        );

        assert!(!state.session.logged_in);
        assert_eq!(state.notice, Some(AuthError::InvalidCredentials));

        let state = hub.reduce(state, Action::AcknowledgeNotice);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_login_populates_my_events() {
        let hub = hub();
        let state = login(&hub, AppState::default());
        let view = hub.view(&state);

        assert!(view.logged_in);
        assert_eq!(view.my_events, catalog::secondary_events(today()));
    }

    #[test]
    fn test_scanner_requires_login() {
        let hub = hub();
        let state = hub.reduce(AppState::default(), Action::OpenScanner);
        assert_eq!(state.qr, QrFlow::Idle);
    }

    #[test]
    fn test_submit_without_scanner_ignored() {
        let hub = hub();
        let state = login(&hub, AppState::default());
        let state = hub.reduce(state, Action::SubmitCode("101".into()));

        assert_eq!(state.qr, QrFlow::Idle);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_certificate_uses_config() {
        let hub = Hub::with_sample_data(
            today(),
            HubConfig::default()
                .with_attendance_hours(6)
                .with_issuer("ArtChain"),
        );
        let state = login(&hub, AppState::default());
        let state = hub.reduce(state, Action::OpenScanner);
        let state = hub.reduce(state, Action::SubmitCode("102".into()));

        let cert = hub.view(&state).certificate.unwrap();
        assert_eq!(cert.data.event_title, "Digital Marketing Seminar");
        assert_eq!(cert.duration_hours, 6);
        assert_eq!(cert.issuer, "ArtChain");
    }

    #[test]
    fn test_cancel_scan() {
        let hub = hub();
        let state = login(&hub, AppState::default());
        let state = hub.reduce(state, Action::OpenScanner);
        assert!(hub.view(&state).scanner_open);

        let state = hub.reduce(state, Action::CancelScan);
        assert_eq!(state.qr, QrFlow::Idle);
    }

    #[test]
    fn test_logout_resets_scan_flow() {
        let hub = hub();
        let state = login(&hub, AppState::default());
        let state = hub.reduce(state, Action::OpenScanner);
        let state = hub.reduce(state, Action::Logout);

        assert_eq!(state.qr, QrFlow::Idle);
        assert!(!state.session.logged_in);
    }

    #[test]
    fn test_sample_filter_options() {
        assert_eq!(hub().filter_options(), &FilterOptions::default());
    }

    #[test]
    fn test_filter_options_follow_catalog() {
        let catalog = vec![
            Event::new(1u32, "Jazz Night", "2024-05-01", "Boston", "Music"),
            Event::new(2u32, "Chess Open", "2024-05-02", "Online", "Sports"),
            Event::new(3u32, "Blues Night", "2024-05-03", "Boston", "Music"),
        ];
        let hub = Hub::new(
            Arc::new(StaticEventRepository::new(catalog)),
            Arc::new(StaticEventRepository::default()),
            Arc::new(StaticCredentials::default()),
            HubConfig::default(),
        );

        let options = hub.filter_options();
        assert_eq!(options.categories, vec!["Music", "Sports"]);
        assert_eq!(options.locations, vec!["Boston", "Online"]);
    }

    #[test]
    fn test_view_carries_filters() {
        let hub = hub();
        let state = hub.reduce(AppState::default(), Action::SetCategoryFilter("Music".into()));
        let view = hub.view(&state);

        assert_eq!(view.filter.category_filter(), "Music");
        assert_eq!(view.filter.search_term(), "");
    }

    #[test]
    fn test_custom_page_size() {
        let hub = Hub::with_sample_data(today(), HubConfig::default().with_page_size(4));
        let view = hub.view(&AppState::default());

        assert_eq!(view.events.len(), 4);
        assert_eq!(view.pagination.total_pages(), 3);
    }
}
