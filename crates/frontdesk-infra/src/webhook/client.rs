//! WebhookClient -- concrete [`ChatTransport`] implementation for the
//! automation webhook.
//!
//! Sends one `POST` per user turn with a JSON body of
//! `{sessionId, action, chatInput}` and probes the JSON response for the
//! assistant reply. Every failure -- connection error, timeout, non-success
//! status, unreadable body -- is absorbed here and replaced by the
//! configured fallback text, so the caller always receives displayable
//! text.

use std::time::Duration;

use frontdesk_core::transport::ChatTransport;
use frontdesk_types::config::GlobalConfig;
use frontdesk_types::error::TransportError;
use uuid::Uuid;

use super::types::{SEND_MESSAGE_ACTION, WebhookRequest, extract_reply};

/// Automation webhook chat transport.
pub struct WebhookClient {
    client: reqwest::Client,
    endpoint: String,
    response_fields: Vec<String>,
    fallback_text: String,
    generic_reply_text: String,
}

impl WebhookClient {
    /// Create a new webhook client for the given endpoint.
    ///
    /// The timeout, response field chain, and canned texts come from the
    /// global configuration.
    pub fn new(endpoint: String, config: &GlobalConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            endpoint,
            response_fields: config.response_fields.clone(),
            fallback_text: config.fallback_text.clone(),
            generic_reply_text: config.generic_reply_text.clone(),
        }
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_message(&self, session_id: &Uuid, text: &str) -> Result<String, TransportError> {
        let session_id = session_id.to_string();
        let body = WebhookRequest {
            session_id: &session_id,
            action: SEND_MESSAGE_ACTION,
            chat_input: text,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(extract_reply(&value, &self.response_fields)
            .unwrap_or_else(|| self.generic_reply_text.clone()))
    }
}

impl ChatTransport for WebhookClient {
    async fn send(&self, session_id: &Uuid, text: &str) -> String {
        match self.post_message(session_id, text).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "webhook call failed, using fallback reply");
                self.fallback_text.clone()
            }
        }
    }
}
