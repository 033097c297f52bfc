//! Acknowledgment model
//!
//! An acknowledgment records that a participant received, accepted or
//! rejected a message. Acknowledgments are only ever appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AckStatus;
use crate::core::error::ValidationError;

/// One acknowledgment event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AckRecord")]
pub struct Acknowledgment {
    /// When the acknowledgment was made
    pub ts: DateTime<Utc>,

    /// Message being acknowledged (not checked against the store)
    pub msg_id: String,

    /// Acknowledging participant
    pub agent_id: String,

    /// Recorded outcome
    pub status: AckStatus,

    /// Free-form note, possibly empty
    pub note: String,
}

impl Acknowledgment {
    /// Create an acknowledgment stamped with the current time
    #[must_use]
    pub fn new(
        msg_id: impl Into<String>,
        agent_id: impl Into<String>,
        status: AckStatus,
        note: impl Into<String>,
    ) -> Self {
        Self::at(Utc::now(), msg_id, agent_id, status, note)
    }

    /// Create an acknowledgment with an explicit timestamp
    #[must_use]
    pub fn at(
        ts: DateTime<Utc>,
        msg_id: impl Into<String>,
        agent_id: impl Into<String>,
        status: AckStatus,
        note: impl Into<String>,
    ) -> Self {
        Self {
            ts,
            msg_id: msg_id.into(),
            agent_id: agent_id.into(),
            status,
            note: note.into(),
        }
    }

    /// Check that the identifying fields are present
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.msg_id.trim().is_empty() {
            return Err(ValidationError::MissingField("msg_id"));
        }
        if self.agent_id.trim().is_empty() {
            return Err(ValidationError::MissingField("agent_id"));
        }
        Ok(())
    }
}

/// Loose shape of a stored acknowledgment, validated on conversion
#[derive(Deserialize)]
struct AckRecord {
    ts: Option<DateTime<Utc>>,
    msg_id: Option<String>,
    agent_id: Option<String>,
    status: Option<String>,
    #[serde(default)]
    note: String,
}

impl TryFrom<AckRecord> for Acknowledgment {
    type Error = ValidationError;

    fn try_from(record: AckRecord) -> Result<Self, Self::Error> {
        let ts = record.ts.ok_or(ValidationError::MissingField("ts"))?;
        let status = record
            .status
            .ok_or(ValidationError::MissingField("status"))?
            .parse()?;
        let ack = Self {
            ts,
            msg_id: record.msg_id.unwrap_or_default(),
            agent_id: record.agent_id.unwrap_or_default(),
            status,
            note: record.note,
        };
        ack.validate()?;
        Ok(ack)
    }
}
