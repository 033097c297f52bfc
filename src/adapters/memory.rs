//! In-memory hub source
//!
//! Keeps records in process memory. Useful for tests and for embedding the
//! hub where no files are wanted.

use std::sync::{Mutex, PoisonError};

use crate::core::error::StorageError;
use crate::core::models::{Acknowledgment, Message};
use crate::core::ports::HubSource;

/// Hub source backed by vectors behind a mutex
#[derive(Debug, Default)]
pub struct MemorySource {
    messages: Mutex<Vec<Message>>,
    acks: Mutex<Vec<Acknowledgment>>,
}

impl MemorySource {
    /// Create a source holding `messages` and `acks`
    #[must_use]
    pub fn new(messages: Vec<Message>, acks: Vec<Acknowledgment>) -> Self {
        Self {
            messages: Mutex::new(messages),
            acks: Mutex::new(acks),
        }
    }

    /// Snapshot of the stored acknowledgments
    #[must_use]
    pub fn acks(&self) -> Vec<Acknowledgment> {
        self.acks.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl HubSource for MemorySource {
    fn load_messages(&self) -> Result<Vec<Message>, StorageError> {
        Ok(self.messages.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn load_acks(&self) -> Result<Vec<Acknowledgment>, StorageError> {
        Ok(self.acks())
    }

    fn append_ack(&self, ack: &Acknowledgment) -> Result<(), StorageError> {
        self.acks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ack.clone());
        Ok(())
    }
}
