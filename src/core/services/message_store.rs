//! Message store
//!
//! Holds the message log, newest first. A load replaces everything; there
//! is no merge and no duplicate-id detection.

use super::MessageFilter;
use crate::core::models::Message;

/// In-memory message log sorted by `created_at`, most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole log with `messages`, sorted newest first
    ///
    /// The sort is stable: messages with equal timestamps keep their input
    /// order.
    pub fn load(&mut self, mut messages: Vec<Message>) {
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        log::debug!("Loaded {} message(s) into store", messages.len());
        self.messages = messages;
    }

    /// All messages in store order
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Lazily yield the messages matching `criteria`, in store order
    pub fn filter<'a>(&'a self, criteria: &'a MessageFilter) -> impl Iterator<Item = &'a Message> {
        self.messages.iter().filter(move |m| criteria.matches(m))
    }

    /// First message with `msg_id`, if any
    #[must_use]
    pub fn get(&self, msg_id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.msg_id == msg_id)
    }

    /// Distinct topics in first-seen store order
    #[must_use]
    pub fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = Vec::new();
        for m in &self.messages {
            if !topics.contains(&m.topic.as_str()) {
                topics.push(&m.topic);
            }
        }
        topics
    }

    /// Number of stored messages
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
