//! Derived presence and acknowledgment states
//!
//! Nothing in here is stored. Both types are recomputed from the message
//! store and the ledger on every read.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Acknowledgment;

/// Activity classification of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Seen within the activity window
    Active,
    /// Not seen within the activity window, or never seen
    Idle,
    /// Reserved; never derived automatically
    Offline,
}

impl Presence {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idle => "idle",
            Self::Offline => "offline",
        }
    }
}

impl std::fmt::Display for Presence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence summary for one registered participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceRecord {
    /// Participant identifier
    pub id: String,
    /// Derived classification
    pub presence: Presence,
    /// Latest activity (message sent/received or ack made), if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
    /// Messages sent or received
    pub message_count: usize,
}

/// Acknowledgment state of a single message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckState<'a> {
    /// No ack is expected and none was recorded
    NotRequired,
    /// An ack is expected and the ledger has none
    Unacknowledged,
    /// The first ledger entry for this message
    Acknowledged(&'a Acknowledgment),
}

impl<'a> AckState<'a> {
    /// Whether the message still waits for an acknowledgment
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Unacknowledged)
    }

    /// The recorded acknowledgment, if any
    #[must_use]
    pub const fn ack(&self) -> Option<&'a Acknowledgment> {
        match *self {
            Self::Acknowledged(ack) => Some(ack),
            Self::NotRequired | Self::Unacknowledged => None,
        }
    }
}
