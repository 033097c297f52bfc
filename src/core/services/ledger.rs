//! Acknowledgment ledger
//!
//! Append-only. Lookups return the first entry recorded for a message, so
//! a later correction for the same message is kept but never returned.

use crate::core::error::ValidationError;
use crate::core::models::Acknowledgment;

/// Append-only log of acknowledgments in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AckLedger {
    entries: Vec<Acknowledgment>,
}

impl AckLedger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from previously recorded entries
    ///
    /// Entries are validated one by one; nothing is kept if any fails.
    pub fn from_entries(entries: Vec<Acknowledgment>) -> Result<Self, ValidationError> {
        for ack in &entries {
            ack.validate()?;
        }
        Ok(Self { entries })
    }

    /// Append one acknowledgment at the end
    ///
    /// Fails without touching the ledger when `msg_id` or `agent_id` is
    /// blank. Existence of the message and earlier acks are not checked.
    pub fn append(&mut self, ack: Acknowledgment) -> Result<&Acknowledgment, ValidationError> {
        if let Err(e) = ack.validate() {
            log::warn!("Rejected acknowledgment for '{}': {e}", ack.msg_id);
            return Err(e);
        }
        log::debug!("Appended {} ack for '{}' by '{}'", ack.status, ack.msg_id, ack.agent_id);
        self.entries.push(ack);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// First entry (oldest) recorded for `msg_id`
    #[must_use]
    pub fn find_by_message_id(&self, msg_id: &str) -> Option<&Acknowledgment> {
        self.entries.iter().find(|a| a.msg_id == msg_id)
    }

    /// Entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[Acknowledgment] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
