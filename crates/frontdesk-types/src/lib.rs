//! Shared domain types for frontdesk.
//!
//! This crate contains the core domain types used across the frontdesk
//! client: chat messages, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
