use thiserror::Error;

/// Errors from the webhook transport.
///
/// All variants are handled uniformly: caught at the transport adapter
/// boundary and converted into the fallback assistant message. The variants
/// exist for logging, not for divergent recovery paths.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("unreadable response body: {0}")]
    Body(String),
}

/// Errors from the key-value store (used by trait definitions in frontdesk-core).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable")]
    Unavailable,

    #[error("query error: {0}")]
    Query(String),
}
