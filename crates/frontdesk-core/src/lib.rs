//! Business logic and trait definitions for frontdesk.
//!
//! This crate defines the "ports" (the `KvStore` and `ChatTransport` traits)
//! that the infrastructure layer implements. It depends only on
//! `frontdesk-types` -- never on `frontdesk-infra` or any database/HTTP crate.

pub mod chat;
pub mod storage;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;
