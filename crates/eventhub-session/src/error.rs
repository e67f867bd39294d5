//! User-facing notices raised by the session gate and the matcher.

use thiserror::Error;

/// Errors surfaced to the user as a notice. Both are recoverable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Username/password pair rejected.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Scanned code matches no event.
    #[error("Invalid QR Code")]
    InvalidCode,
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, AuthError>;
