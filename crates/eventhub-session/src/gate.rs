//! Login state for the single simulated user.

use std::fmt;
use std::sync::Arc;

use eventhub_events::EventRepository;
use eventhub_models::Event;
use tracing::{info, warn};

use crate::credentials::CredentialVerifier;
use crate::error::{AuthError, Result};

/// Transient login state.
///
/// `Session::default()` is the logged-out state.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Whether the user is logged in.
    pub logged_in: bool,
    /// Name the user logged in with; the attendee name on certificates.
    pub username: String,
    /// Password the user logged in with. Not consulted after login.
    pub password: String,
    /// Events the user is registered for.
    pub my_events: Vec<Event>,
}

impl Session {
    /// Returns true if the user is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.logged_in)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("my_events", &self.my_events.len())
            .finish()
    }
}

/// Checks credentials and builds sessions.
#[derive(Clone)]
pub struct SessionGate {
    verifier: Arc<dyn CredentialVerifier>,
    my_events: Arc<dyn EventRepository>,
}

impl SessionGate {
    /// Creates a gate.
    ///
    /// `my_events` supplies the events of a logged-in user.
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        my_events: Arc<dyn EventRepository>,
    ) -> Self {
        Self {
            verifier,
            my_events,
        }
    }

    /// Logs in, returning a fresh session on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the verifier rejects the pair.
    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        if !self.verifier.verify(username, password) {
            warn!(username = %username, "Rejected login");
            return Err(AuthError::InvalidCredentials);
        }

        let my_events = self.my_events.list();
        info!(username = %username, my_events = my_events.len(), "Logged in");

        Ok(Session {
            logged_in: true,
            username: username.to_string(),
            password: password.to_string(),
            my_events,
        })
    }

    /// Logs out. Always yields the empty session; calling it twice is harmless.
    pub fn logout(&self, session: &Session) -> Session {
        if session.logged_in {
            info!(username = %session.username, "Logged out");
        }
        Session::default()
    }
}

impl fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGate").finish_non_exhaustive()
    }
}
