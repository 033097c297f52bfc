//! Pending-acknowledgment view
//!
//! A projection over the store and the ledger, never separate state.

use super::{AckLedger, MessageStore};
use crate::core::models::{AckState, Message};

/// Acknowledgment state of `message` given the current ledger
#[must_use]
pub fn ack_state<'a>(message: &Message, ledger: &'a AckLedger) -> AckState<'a> {
    match ledger.find_by_message_id(&message.msg_id) {
        Some(ack) => AckState::Acknowledged(ack),
        None if message.requires_ack => AckState::Unacknowledged,
        None => AckState::NotRequired,
    }
}

/// Messages that require an ack and have no ledger entry, in store order
#[must_use]
pub fn pending_acks<'a>(messages: &'a MessageStore, ledger: &AckLedger) -> Vec<&'a Message> {
    messages
        .messages()
        .iter()
        .filter(|m| ack_state(m, ledger).is_pending())
        .collect()
}
