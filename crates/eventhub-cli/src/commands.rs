//! Command handlers for CLI subcommands.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use eventhub_core::{Action, AppState, Hub, HubConfig};
use eventhub_events::StaticEventRepository;
use eventhub_models::catalog;
use eventhub_session::StaticCredentials;
use tracing::info;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::render;

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Builds the hub from CLI options, config file and environment.
pub fn build_hub(cli: &Cli) -> Result<Hub> {
    let config = HubConfig::load(cli.config.as_deref())?;
    let today = utc_today();
    match cli.events_path() {
        Some(path) => {
            let repo = StaticEventRepository::from_path(&path)?;
            info!(path = %path.display(), count = repo.len(), "Using events file");
            Ok(Hub::new(
                Arc::new(repo),
                Arc::new(StaticEventRepository::new(catalog::secondary_events(today))),
                Arc::new(StaticCredentials::default()),
                config,
            ))
        }
        None => Ok(Hub::with_sample_data(today, config)),
    }
}

/// The current UTC calendar date, used for the sample events.
fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Execute a CLI command.
pub fn execute(command: Commands, hub: &Hub) -> Result<()> {
    match command {
        Commands::List {
            search,
            date,
            category,
            location,
            page,
            format,
        } => {
            let actions = vec![
                Action::SetSearchTerm(search),
                Action::SetDateFilter(date),
                Action::SetCategoryFilter(category),
                Action::SetLocationFilter(location),
                Action::GoToPage(page),
            ];
            println!("{}", cmd_list(hub, actions, format)?);
            Ok(())
        }
        Commands::Certificate {
            username,
            password,
            code,
        } => {
            println!("{}", cmd_certificate(hub, username, password, code)?);
            Ok(())
        }
        Commands::Repl => {
            // REPL is handled separately in main
            Ok(())
        }
    }
}

fn apply(hub: &Hub, actions: Vec<Action>) -> AppState {
    apply_to(hub, AppState::default(), actions)
}

fn cmd_list(hub: &Hub, actions: Vec<Action>, format: OutputFormat) -> Result<String> {
    let state = apply(hub, actions);
    let view = hub.view(&state);

    match format {
        OutputFormat::Table => {
            let mut out = render::event_table(&view.events);
            if let Some(bar) = render::pagination_bar(&view.pagination) {
                out.push_str("\n\n");
                out.push_str(&bar);
            }
            out.push_str(&format!("\n\n{} event(s) matching", view.filtered_count));
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&view.events)?),
    }
}

fn cmd_certificate(hub: &Hub, username: String, password: String, code: String) -> Result<String> {
    let state = apply(hub, vec![Action::Login { username, password }]);
    if let Some(err) = state.notice {
        return Err(err.into());
    }

    let state = apply_to(hub, state, vec![Action::OpenScanner, Action::SubmitCode(code)]);
    if let Some(err) = state.notice {
        return Err(err.into());
    }

    hub.view(&state)
        .certificate
        .map(|cert| cert.to_string())
        .ok_or_else(|| "no certificate issued".into())
}

fn apply_to(hub: &Hub, state: AppState, actions: Vec<Action>) -> AppState {
    actions
        .into_iter()
        .fold(state, |state, action| hub.reduce(state, action))
}
