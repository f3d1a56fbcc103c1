//! Global configuration types for frontdesk.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! webhook endpoint, the response field mapping, and the canned texts shown
//! to the user.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the frontdesk client.
///
/// Loaded from `~/.frontdesk/config.toml`. All fields have sensible defaults
/// except `webhook_url`, which must be provided via the config file, the
/// `FRONTDESK_WEBHOOK_URL` environment variable, or the `--endpoint` flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Automation webhook endpoint receiving each user turn.
    #[serde(default)]
    pub webhook_url: String,

    /// Request timeout in seconds for the webhook call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Response body fields probed, in order, for the assistant reply.
    ///
    /// The upstream contract has no schema; when it changes field names,
    /// this mapping can be adjusted without a rebuild.
    #[serde(default = "default_response_fields")]
    pub response_fields: Vec<String>,

    /// First message seeded into every fresh conversation.
    #[serde(default = "default_welcome_text")]
    pub welcome_text: String,

    /// Assistant text shown when the webhook call cannot be completed.
    #[serde(default = "default_fallback_text")]
    pub fallback_text: String,

    /// Assistant text shown when the response carries none of the
    /// configured fields.
    #[serde(default = "default_generic_reply_text")]
    pub generic_reply_text: String,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_response_fields() -> Vec<String> {
    vec!["output".to_string(), "message".to_string()]
}

fn default_welcome_text() -> String {
    "Hello! Welcome to our front desk. I'm here to help you with information \
     about our services, answer your questions, or assist with scheduling an \
     appointment. What can I help you with today?"
        .to_string()
}

fn default_fallback_text() -> String {
    "I apologize, but I'm having trouble connecting right now. Please try \
     again in a moment."
        .to_string()
}

fn default_generic_reply_text() -> String {
    "I'm here to help! How can I assist you today?".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
            response_fields: default_response_fields(),
            welcome_text: default_welcome_text(),
            fallback_text: default_fallback_text(),
            generic_reply_text: default_generic_reply_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert!(config.webhook_url.is_empty());
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.response_fields, vec!["output", "message"]);
        assert!(config.welcome_text.contains("front desk"));
        assert!(config.fallback_text.contains("trouble connecting"));
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let toml_str = "";
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert!(config.webhook_url.is_empty());
        assert_eq!(config.response_fields, vec!["output", "message"]);
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
webhook_url = "https://example.app.n8n.cloud/webhook/abc/chat"
request_timeout_secs = 10
response_fields = ["reply"]
welcome_text = "Welcome to the clinic."
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.webhook_url,
            "https://example.app.n8n.cloud/webhook/abc/chat"
        );
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.response_fields, vec!["reply"]);
        assert_eq!(config.welcome_text, "Welcome to the clinic.");
        // Untouched fields keep their defaults.
        assert!(config.fallback_text.contains("trouble connecting"));
    }

    #[test]
    fn test_global_config_serde_roundtrip() {
        let config = GlobalConfig {
            webhook_url: "https://hooks.example.com/chat".to_string(),
            ..GlobalConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GlobalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.webhook_url, "https://hooks.example.com/chat");
        assert_eq!(parsed.response_fields, config.response_fields);
    }
}
