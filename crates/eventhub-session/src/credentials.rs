//! Credential verification.

/// Trait for checking a username/password pair.
///
/// The gate's control flow only depends on this yes/no answer.
pub trait CredentialVerifier: Send + Sync {
    /// Returns true if the pair is accepted.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one fixed pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    /// Creates a verifier for the given pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    /// The demo account: `user` / `password`.
    fn default() -> Self {
        Self::new("user", "password")
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}
