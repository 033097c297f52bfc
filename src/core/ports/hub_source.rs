//! Hub source port
//!
//! Defines the interface for loading the feed and ledger from a backing
//! store and for persisting new acknowledgments.

use crate::core::error::StorageError;
use crate::core::models::{Acknowledgment, Message};

/// Persistent backing store for hub data
///
/// Implementations decide where messages and acknowledgments live (JSON
/// files, memory, a remote service). Failures are reported as
/// [`StorageError`] and are never retried by the core.
#[cfg_attr(test, mockall::automock)]
pub trait HubSource: Send + Sync {
    /// Load every stored message, in any order
    fn load_messages(&self) -> Result<Vec<Message>, StorageError>;

    /// Load every stored acknowledgment, in insertion order
    fn load_acks(&self) -> Result<Vec<Acknowledgment>, StorageError>;

    /// Durably append one acknowledgment after all existing ones
    fn append_ack(&self, ack: &Acknowledgment) -> Result<(), StorageError>;
}
