//! Persisted conversation history command.
//!
//! Reads the history log from the key-value store and prints it as a rich
//! table or JSON.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use frontdesk_core::chat::session::HISTORY_KEY;
use frontdesk_core::storage::kv_store::KvStore;
use frontdesk_types::chat::{ChatMessage, Sender};

use crate::state::AppState;

/// Show the persisted conversation history.
///
/// # Examples
///
/// ```bash
/// fdesk history
/// fdesk history --limit 10 --json
/// ```
pub async fn show_history(state: &AppState, limit: Option<usize>, json: bool) -> Result<()> {
    let store = state.kv_store();
    let messages: Vec<ChatMessage> = match store.get(HISTORY_KEY).await? {
        Some(value) => serde_json::from_value(value)?,
        None => Vec::new(),
    };

    let messages: &[ChatMessage] = match limit {
        Some(n) if n < messages.len() => &messages[messages.len() - n..],
        _ => &messages,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }

    if messages.is_empty() {
        println!();
        println!(
            "  {} No history yet. Start chatting with: {}",
            style("i").blue().bold(),
            style("fdesk chat").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Time").fg(Color::White),
        Cell::new("Sender").fg(Color::White),
        Cell::new("Message").fg(Color::White),
    ]);

    for msg in messages {
        let time = msg.created_at.format("%Y-%m-%d %H:%M").to_string();

        let sender_cell = match msg.sender {
            Sender::User => Cell::new("you").fg(Color::Green),
            Sender::Assistant => Cell::new("assistant").fg(Color::Cyan),
        };

        let preview = if msg.content.chars().count() > 80 {
            let head: String = msg.content.chars().take(77).collect();
            format!("{head}...")
        } else {
            msg.content.clone()
        };

        table.add_row(vec![
            Cell::new(time).fg(Color::DarkGrey),
            sender_cell,
            Cell::new(preview).fg(Color::White),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} message{}",
        style(messages.len()).bold(),
        if messages.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}
