//! Configuration for EventHub.
//!
//! Settings are resolved in three layers, later layers winning:
//!
//! 1. Built-in defaults
//! 2. A JSON config file (`--config`, or `~/.eventhub/config.json` if present)
//! 3. Environment variables
//!
//! # Environment Variables
//!
//! - `EVENTHUB_STATE_DIR`: Override the base state directory
//! - `EVENTHUB_PAGE_SIZE`: Event cards per page
//! - `EVENTHUB_ATTENDANCE_HOURS`: Duration printed on certificates
//! - `EVENTHUB_ISSUER`: Issuer printed on certificates

use std::path::{Path, PathBuf};

use eventhub_events::DEFAULT_PAGE_SIZE;
use eventhub_session::{DEFAULT_ATTENDANCE_HOURS, DEFAULT_ISSUER};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Environment variable for custom state directory.
pub const STATE_DIR_ENV: &str = "EVENTHUB_STATE_DIR";

/// Environment variable for the page size.
pub const PAGE_SIZE_ENV: &str = "EVENTHUB_PAGE_SIZE";

/// Environment variable for the certificate attendance duration.
pub const ATTENDANCE_HOURS_ENV: &str = "EVENTHUB_ATTENDANCE_HOURS";

/// Environment variable for the certificate issuer.
pub const ISSUER_ENV: &str = "EVENTHUB_ISSUER";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".eventhub";

/// Get the EventHub state directory.
///
/// The state directory is determined by:
/// 1. `EVENTHUB_STATE_DIR` environment variable if set
/// 2. `~/.eventhub` if home directory is available
/// 3. `.eventhub` in current directory as fallback
pub fn state_dir() -> PathBuf {
    std::env::var(STATE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(DEFAULT_STATE_DIR))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
        })
}

/// Get the default config file path.
pub fn config_file() -> PathBuf {
    state_dir().join("config.json")
}

/// Tunables of the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Event cards per page.
    pub page_size: usize,
    /// Attendance duration printed on certificates.
    pub attendance_hours: u32,
    /// Issuer printed on certificates.
    pub issuer: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            attendance_hours: DEFAULT_ATTENDANCE_HOURS,
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }
}

impl HubConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the attendance duration.
    pub fn with_attendance_hours(mut self, hours: u32) -> Self {
        self.attendance_hours = hours;
        self
    }

    /// Sets the certificate issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Resolves the full configuration.
    ///
    /// An explicit `path` must exist; the default config file is only read
    /// if it is present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_path(path)?,
            None => {
                let default_path = config_file();
                if default_path.is_file() {
                    Self::from_path(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok())
    }

    /// Reads a JSON config file. Missing keys keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "Loaded config file");
        config.validate()
    }

    /// Applies environment overrides, reading variables through `lookup`.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PAGE_SIZE_ENV) {
            self.page_size = parse_env(PAGE_SIZE_ENV, &value)?;
        }
        if let Some(value) = lookup(ATTENDANCE_HOURS_ENV) {
            self.attendance_hours = parse_env(ATTENDANCE_HOURS_ENV, &value)?;
        }
        if let Some(value) = lookup(ISSUER_ENV) {
            self.issuer = value;
        }
        self.validate()
    }

    /// Rejects settings the hub cannot run with.
    pub fn validate(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "page_size",
                value: "0".to_string(),
            });
        }
        Ok(self)
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
