//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ApiErrorData;
use crate::core::error::ValidationError;
use crate::core::models::{Acknowledgment, Presence, Priority};
use crate::core::services::MessageFilter;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Feed filter as received from a query string or request body
///
/// Blank values mean "no restriction", like an unset field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageQuery {
    /// Participant that must be sender or recipient
    #[serde(default)]
    pub agent: Option<String>,
    /// Exact topic
    #[serde(default)]
    pub topic: Option<String>,
    /// Exact priority (LOW, MEDIUM, HIGH, CRITICAL)
    #[serde(default)]
    pub priority: Option<String>,
}

/// `None` for missing or whitespace-only values, otherwise the value as given
fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

impl MessageQuery {
    /// Convert into a typed filter
    pub fn to_filter(&self) -> Result<MessageFilter, ValidationError> {
        let priority = non_blank(self.priority.as_ref())
            .map(str::parse::<Priority>)
            .transpose()?;
        Ok(MessageFilter {
            agent: non_blank(self.agent.as_ref()).map(String::from),
            topic: non_blank(self.topic.as_ref()).map(String::from),
            priority,
        })
    }
}

/// Request body for acknowledging a message
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AckRequest {
    /// Acknowledging participant
    #[serde(default)]
    pub agent_id: Option<String>,
    /// Optional note
    #[serde(default)]
    pub note: Option<String>,
    /// Status (RECEIVED, ACK, REJECTED, PENDING); defaults to ACK
    #[serde(default)]
    pub status: Option<String>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Result of (re)loading hub data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LoadData {
    /// Messages now in the feed
    pub messages: usize,
    /// Acknowledgments now in the ledger
    pub acks: usize,
}

/// One message as shown in a feed
#[derive(Debug, Serialize)]
pub struct MessageItem {
    /// Message ID
    pub msg_id: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Sender ID
    pub from_agent: String,
    /// Sender display label
    pub from_label: String,
    /// Recipient ID
    pub to_agent: String,
    /// Recipient display label
    pub to_label: String,
    /// Topic
    pub topic: String,
    /// Priority
    pub priority: Priority,
    /// Whether an ack is expected
    pub requires_ack: bool,
    /// Full body
    pub body: String,
    /// Body shortened for list display
    pub preview: String,
    /// Attached artifact reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_path: Option<String>,
    /// First recorded acknowledgment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack: Option<Acknowledgment>,
    /// Whether the message still waits for an ack
    pub pending: bool,
}

/// Filtered feed response
#[derive(Debug, Serialize)]
pub struct MessagesData {
    /// Matching messages, newest first
    pub messages: Vec<MessageItem>,
}

/// Pending-ack response
#[derive(Debug, Serialize)]
pub struct PendingData {
    /// Number of pending messages
    pub count: usize,
    /// Pending messages, newest first
    pub messages: Vec<MessageItem>,
}

/// One participant's presence
#[derive(Debug, Serialize)]
pub struct AgentItem {
    /// Participant ID
    pub id: String,
    /// Display label
    pub label: String,
    /// Whether the participant is a person
    pub human: bool,
    /// Derived presence
    pub presence: Presence,
    /// Latest activity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
    /// Messages sent or received
    pub message_count: usize,
}

/// Presence list response
#[derive(Debug, Serialize)]
pub struct AgentsData {
    /// Instant presence was computed for
    pub as_of: DateTime<Utc>,
    /// Registered participants in registry order
    pub agents: Vec<AgentItem>,
}

/// Topic list response
#[derive(Debug, Serialize)]
pub struct TopicsData {
    /// Distinct topics, newest first
    pub topics: Vec<String>,
}

/// Acknowledgment response
#[derive(Debug, Serialize)]
pub struct AckData {
    /// The recorded acknowledgment
    pub ack: Acknowledgment,
    /// Whether the acknowledged message is in the loaded feed
    pub message_known: bool,
}
