//! Webhook HTTP transport.
//!
//! Implements [`frontdesk_core::transport::ChatTransport`] against a
//! third-party automation webhook (e.g., an n8n chat workflow).

pub mod client;
pub mod types;

pub use client::WebhookClient;
