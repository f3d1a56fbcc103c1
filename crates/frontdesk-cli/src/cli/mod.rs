//! CLI command definitions and dispatch for the `fdesk` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod history;
pub mod session;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with your front desk assistant.
#[derive(Parser)]
#[command(name = "fdesk", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Webhook endpoint to send messages to.
        #[arg(long, env = "FRONTDESK_WEBHOOK_URL")]
        endpoint: Option<String>,
    },

    /// Start a new session: fresh identifier, persisted history cleared.
    Reset,

    /// Show the persisted conversation history.
    History {
        /// Show only the most recent N messages.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show session and configuration status.
    Status,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
