//! Request and response body types.
//!
//! Serde does the JSON work; response bodies are camelCase on the wire.

pub mod health;
pub mod short;
