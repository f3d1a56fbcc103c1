//! SQLite persistence for frontdesk.

pub mod kv;
pub mod pool;
