//! frontdesk CLI entry point.
//!
//! Binary name: `fdesk`
//!
//! Parses CLI arguments, initializes the key-value store and configuration,
//! then dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,frontdesk=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "fdesk", &mut std::io::stdout());
        return Ok(());
    }

    // Initialize application state (config, KV store)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Chat { endpoint } => {
            cli::chat::run_chat_loop(&state, endpoint).await?;
        }

        Commands::Reset => {
            cli::session::reset_session(&state, cli.json).await?;
        }

        Commands::History { limit } => {
            cli::history::show_history(&state, limit, cli.json).await?;
        }

        Commands::Status => {
            cli::status::status(&state, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
