//! Message filter criteria
//!
//! Every criterion that is set must match; an unset criterion places no
//! restriction on its axis.

use crate::core::models::{Message, Priority};

/// AND-combined filter over the message feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFilter {
    /// Participant that must be sender or recipient
    pub agent: Option<String>,
    /// Exact topic
    pub topic: Option<String>,
    /// Exact priority
    pub priority: Option<Priority>,
}

impl MessageFilter {
    /// A filter that matches everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to messages sent or received by `agent`
    #[must_use]
    pub fn agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }

    /// Restrict to one topic
    #[must_use]
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Restrict to one priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether no criterion is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.agent.is_none() && self.topic.is_none() && self.priority.is_none()
    }

    /// Whether `message` satisfies every set criterion
    #[must_use]
    pub fn matches(&self, message: &Message) -> bool {
        if let Some(agent) = &self.agent
            && !message.involves(agent)
        {
            return false;
        }
        if let Some(topic) = &self.topic
            && message.topic != *topic
        {
            return false;
        }
        if let Some(priority) = self.priority
            && message.priority != priority
        {
            return false;
        }
        true
    }
}
