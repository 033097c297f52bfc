//! Acknowledgment status values

use serde::{Deserialize, Serialize};

use crate::core::error::ValidationError;

/// Outcome recorded by an acknowledgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AckStatus {
    /// Delivery confirmed, work not necessarily accepted
    Received,
    /// Accepted
    #[default]
    Ack,
    /// Explicitly refused
    Rejected,
    /// Recorded but still undecided
    Pending,
}

impl AckStatus {
    /// Wire representation (`RECEIVED`, `ACK`, `REJECTED`, `PENDING`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "RECEIVED",
            Self::Ack => "ACK",
            Self::Rejected => "REJECTED",
            Self::Pending => "PENDING",
        }
    }

    /// Whether this status counts as a positive confirmation
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Ack | Self::Received)
    }
}

impl std::fmt::Display for AckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AckStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "" => Err(ValidationError::MissingField("status")),
            "RECEIVED" => Ok(Self::Received),
            "ACK" => Ok(Self::Ack),
            "REJECTED" => Ok(Self::Rejected),
            "PENDING" => Ok(Self::Pending),
            _ => Err(ValidationError::invalid("status", s)),
        }
    }
}
