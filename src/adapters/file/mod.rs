//! File-based hub storage
//!
//! Implements `HubSource` with a JSON array of messages and an
//! append-only JSON Lines ledger.

mod source;

pub use source::{ACKS_FILE, JsonFileSource, MESSAGES_FILE};
