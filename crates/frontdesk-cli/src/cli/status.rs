//! Client status command.

use anyhow::Result;
use console::style;

use frontdesk_core::chat::session::{HISTORY_KEY, SESSION_KEY};
use frontdesk_core::storage::kv_store::KvStore;

use crate::state::AppState;

/// Display the client status: session, endpoint, history size, storage.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let store = state.kv_store();

    let session_id = store
        .get(SESSION_KEY)
        .await?
        .and_then(|v| v.as_str().map(str::to_string));

    let history_len = store
        .get(HISTORY_KEY)
        .await?
        .and_then(|v| v.as_array().map(|a| a.len()))
        .unwrap_or(0);

    let endpoint = if state.config.webhook_url.is_empty() {
        None
    } else {
        Some(state.config.webhook_url.clone())
    };

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "session_id": session_id,
            "history_messages": history_len,
            "webhook_url": endpoint,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} frontdesk v{}",
        style("*").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("-- Session --").dim());
    match &session_id {
        Some(id) => println!("  Current:  {}", style(&id[..8.min(id.len())]).bold()),
        None => println!("  Current:  {}", style("none (starts on first chat)").dim()),
    }
    println!("  Messages: {history_len}");
    println!();

    println!("  {}", style("-- Webhook --").dim());
    match &endpoint {
        Some(url) => println!("  Endpoint: {}", style(url).dim()),
        None => println!(
            "  Endpoint: {}",
            style("not configured (set webhook_url in config.toml)").yellow()
        ),
    }
    println!();

    println!("  {}", style("-- System --").dim());
    println!("  Data dir: {}", style(state.data_dir.display()).dim());
    println!("  Database: {}", style("SQLite (WAL mode)").dim());
    println!();

    Ok(())
}
