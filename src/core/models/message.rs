//! Message model
//!
//! A message is one directed communication between two participants.
//! Messages are never rewritten once created; the store only hands out
//! shared references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Priority;

/// Length after which a body is shortened in previews
pub const PREVIEW_CHARS: usize = 120;

/// A directed message between participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Globally unique identifier
    pub msg_id: String,

    /// When the message was created (UTC); also the sort key
    pub created_at: DateTime<Utc>,

    /// Sending participant
    pub from_agent: String,

    /// Receiving participant
    pub to_agent: String,

    /// Free-form label used for filtering
    pub topic: String,

    /// Display priority
    pub priority: Priority,

    /// Whether the recipient is expected to acknowledge
    pub requires_ack: bool,

    /// Message text
    pub body: String,

    /// Opaque reference to an attached artifact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_path: Option<String>,
}

impl Message {
    /// Create a message with no payload
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        msg_id: impl Into<String>,
        created_at: DateTime<Utc>,
        from_agent: impl Into<String>,
        to_agent: impl Into<String>,
        topic: impl Into<String>,
        priority: Priority,
        requires_ack: bool,
        body: impl Into<String>,
    ) -> Self {
        Self {
            msg_id: msg_id.into(),
            created_at,
            from_agent: from_agent.into(),
            to_agent: to_agent.into(),
            topic: topic.into(),
            priority,
            requires_ack,
            body: body.into(),
            payload_path: None,
        }
    }

    /// Attach a payload reference
    #[must_use]
    pub fn with_payload(mut self, path: impl Into<String>) -> Self {
        self.payload_path = Some(path.into());
        self
    }

    /// Whether `participant` sent or received this message
    #[must_use]
    pub fn involves(&self, participant: &str) -> bool {
        self.from_agent == participant || self.to_agent == participant
    }

    /// Body shortened to [`PREVIEW_CHARS`] characters with a trailing ellipsis
    #[must_use]
    pub fn preview(&self) -> String {
        if self.body.chars().count() > PREVIEW_CHARS {
            let head: String = self.body.chars().take(PREVIEW_CHARS).collect();
            format!("{head}…")
        } else {
            self.body.clone()
        }
    }
}
