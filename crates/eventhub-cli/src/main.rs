//! EventHub CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use eventhub_cli::cli::{Cli, Commands};
use eventhub_cli::commands;
use eventhub_cli::repl::Repl;

fn main() {
    // Load .env.local if it exists (for EVENTHUB_* overrides)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    let result = commands::build_hub(&cli).and_then(|hub| match cli.command {
        Some(Commands::Repl) | None => run_repl(hub),
        Some(cmd) => commands::execute(cmd, &hub),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_repl(hub: eventhub_core::Hub) -> commands::Result<()> {
    let mut repl = Repl::new(hub, &eventhub_core::config::state_dir())?;
    repl.run()?;
    Ok(())
}
