//! Storage ports for frontdesk.

pub mod kv_store;
