//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// EventHub - browse events and collect certificates of attendance
#[derive(Parser, Debug)]
#[command(name = "eventhub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a JSON config file
    #[arg(short, long, env = "EVENTHUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file replacing the built-in event list
    #[arg(short, long, env = "EVENTHUB_EVENTS")]
    pub events: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List events matching the filters
    List {
        /// Case-insensitive title search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Exact date (YYYY-MM-DD)
        #[arg(short, long, default_value = "")]
        date: String,

        /// Exact category
        #[arg(long, default_value = "")]
        category: String,

        /// Exact location
        #[arg(short, long, default_value = "")]
        location: String,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Log in, scan a code and print the certificate
    Certificate {
        /// Username
        #[arg(short, long, required = true)]
        username: String,

        /// Password
        #[arg(short, long, required = true)]
        password: String,

        /// Scanned QR code (an event id)
        #[arg(required = true)]
        code: String,
    },

    /// Start interactive REPL mode
    Repl,
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Cli {
    /// Returns the events file path with `~` expanded.
    pub fn events_path(&self) -> Option<PathBuf> {
        self.events
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).to_string()))
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
