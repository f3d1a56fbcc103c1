//! Session reset command.

use anyhow::Result;
use console::style;

use frontdesk_core::chat::session::SessionService;

use crate::state::AppState;

/// Start a new session from the shell: new identifier, history cleared.
///
/// The next `fdesk chat` picks up the new identifier and greets with a
/// fresh welcome message.
pub async fn reset_session(state: &AppState, json: bool) -> Result<()> {
    let service = SessionService::new(state.kv_store());
    let new_id = service.reset().await;

    if json {
        let result = serde_json::json!({
            "session_id": new_id.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        println!(
            "  {} Started a new session ({}). History cleared.",
            style("ok").green(),
            style(&new_id.to_string()[..8]).dim()
        );
        println!();
    }

    Ok(())
}
