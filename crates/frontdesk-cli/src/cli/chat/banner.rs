//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when a chat session starts, showing the endpoint
//! and session information.

use console::style;

/// Print the welcome banner at the start of a chat session.
///
/// Displays the assistant title, the webhook endpoint, and the short
/// session ID, with a hint about slash commands.
pub fn print_welcome_banner(endpoint: &str, session_id: &str) {
    println!();
    println!("  * {}", style("Front Desk Assistant").cyan().bold());
    println!(
        "  {}",
        style("Your questions, answered by our automation workflow").dim()
    );
    println!();
    println!("  {}  {}", style("Endpoint:").bold(), style(endpoint).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
