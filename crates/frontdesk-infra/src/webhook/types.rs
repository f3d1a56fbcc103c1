//! Wire types for the automation webhook.
//!
//! The webhook accepts a camelCase JSON body and answers with an
//! unversioned JSON object. The reply is probed from a configurable list
//! of fields because the upstream contract carries no schema.

use serde::Serialize;

/// Action value sent with every chat request.
pub const SEND_MESSAGE_ACTION: &str = "sendMessage";

/// Request body for one user turn.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest<'a> {
    pub session_id: &'a str,
    pub action: &'a str,
    pub chat_input: &'a str,
}

/// Probe the response body for the assistant reply.
///
/// Returns the first configured field that holds a string. `None` means the
/// caller should substitute its generic reply text.
pub fn extract_reply(body: &serde_json::Value, fields: &[String]) -> Option<String> {
    fields
        .iter()
        .find_map(|field| body.get(field).and_then(|v| v.as_str()))
        .map(str::to_string)
}
