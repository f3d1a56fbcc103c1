//! Main chat loop orchestration.
//!
//! Coordinates the complete conversation lifecycle: session restore,
//! welcome banner, input loop with the awaiting-reply spinner, slash
//! commands, and markdown rendering of assistant replies.

use std::time::Instant;

use console::style;
use crossterm::style::Color;
use tracing::info;

use frontdesk_core::chat::service::{ChatService, SubmitOutcome};
use frontdesk_infra::sqlite::kv::SqliteKvStore;
use frontdesk_infra::webhook::WebhookClient;
use frontdesk_types::chat::Sender;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive chat loop.
pub async fn run_chat_loop(
    state: &AppState,
    endpoint_override: Option<String>,
) -> anyhow::Result<()> {
    let endpoint = state.resolve_endpoint(endpoint_override)?;
    let transport = WebhookClient::new(endpoint.clone(), &state.config);

    let mut chat: ChatService<WebhookClient, SqliteKvStore> = ChatService::start(
        transport,
        state.kv_store(),
        state.config.welcome_text.clone(),
    )
    .await;

    info!(session_id = %chat.session_id(), "Chat session started");
    print_welcome_banner(&endpoint, &chat.session_id().to_string());

    let renderer = ChatRenderer::new(Some(Color::Cyan));
    print_welcome_message(&renderer, &chat);

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                // Slash commands
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::New => {
                            let new_id = chat.reset().await;
                            println!(
                                "\n  {} Started a new session ({})\n",
                                style("*").cyan().bold(),
                                style(&new_id.to_string()[..8]).dim()
                            );
                            print_welcome_message(&renderer, &chat);
                        }
                        ChatCommand::History => {
                            print_history(&chat);
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                        }
                    }
                    continue;
                }

                // Send to the webhook, spinning while the reply is pending
                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("thinking...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                let start_time = Instant::now();
                let outcome = chat.submit(&text).await;
                spinner.finish_and_clear();

                match outcome {
                    SubmitOutcome::Empty | SubmitOutcome::Busy => continue,
                    SubmitOutcome::Replied(reply) => {
                        let response_ms = start_time.elapsed().as_millis() as u64;
                        println!("\n  {}", style("Assistant >").cyan().bold());
                        println!("{}", renderer.render_final(&reply.content).trim_end());
                        renderer.print_reply_footer(response_ms);
                        println!();
                    }
                }
            }
        }
    }

    Ok(())
}

/// Render the seeded welcome message (always the conversation's first entry).
fn print_welcome_message(
    renderer: &ChatRenderer,
    chat: &ChatService<WebhookClient, SqliteKvStore>,
) {
    if let Some(welcome) = chat.conversation().messages().first() {
        println!("  {}", renderer.render_final(&welcome.content).trim());
        println!();
    }
}

/// Print the in-memory conversation with one-line previews.
fn print_history(chat: &ChatService<WebhookClient, SqliteKvStore>) {
    println!();
    for msg in chat.conversation().messages() {
        let role_label = match msg.sender {
            Sender::User => format!("{}", style("You").green()),
            Sender::Assistant => format!("{}", style("Assistant").cyan()),
        };
        let preview = if msg.content.chars().count() > 100 {
            let head: String = msg.content.chars().take(97).collect();
            format!("{head}...")
        } else {
            msg.content.clone()
        };
        println!("  {} {}", style(role_label).bold(), preview);
    }
    println!();
}
