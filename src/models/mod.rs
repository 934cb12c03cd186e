//! Data models for Freshservice responses.
//!
//! Payloads are relayed unchanged as `serde_json::Value`; the only typed
//! structure is the reply envelope and its pagination links.

mod reply;

pub use reply::*;
