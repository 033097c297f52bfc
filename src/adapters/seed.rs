//! Bundled demo session
//!
//! A small recorded venture-ideation session (11 messages, 6 acks) that
//! `init` writes so a fresh hub has something to show.

use crate::core::models::{Acknowledgment, Message};

const MESSAGES_JSON: &str = include_str!("../../assets/seed/messages.json");
const ACKS_JSONL: &str = include_str!("../../assets/seed/acks.jsonl");

/// Demo messages in their recorded (unsorted) order
pub fn demo_messages() -> serde_json::Result<Vec<Message>> {
    serde_json::from_str(MESSAGES_JSON)
}

/// Demo acknowledgments in ledger order
pub fn demo_acks() -> serde_json::Result<Vec<Acknowledgment>> {
    ACKS_JSONL
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str)
        .collect()
}
