//! Participant registry
//!
//! The registry is the fixed set of participants that presence is computed
//! for. Messages may name participants outside it; those are simply left
//! out of the presence view.

use serde::{Deserialize, Serialize};

/// Prefix marking human participants
pub const HUMAN_PREFIX: &str = "human-";

/// A known participant and its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Identifier used in messages and acks
    pub id: String,
    /// Human-readable name
    pub label: String,
}

impl Participant {
    /// Create a participant
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Whether this participant is a person rather than an agent
    #[must_use]
    pub fn is_human(&self) -> bool {
        is_human(&self.id)
    }
}

/// Whether an identifier names a human participant
#[must_use]
pub fn is_human(id: &str) -> bool {
    id.starts_with(HUMAN_PREFIX)
}

/// Ordered set of participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
}

impl ParticipantRegistry {
    /// Build a registry, keeping the first entry for a repeated id
    #[must_use]
    pub fn new(participants: Vec<Participant>) -> Self {
        let mut unique: Vec<Participant> = Vec::with_capacity(participants.len());
        for p in participants {
            if unique.iter().any(|u| u.id == p.id) {
                log::warn!("Duplicate participant '{}' ignored", p.id);
                continue;
            }
            unique.push(p);
        }
        Self {
            participants: unique,
        }
    }

    /// Participants in registration order
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Participant ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(|p| p.id.as_str())
    }

    /// Whether `id` is registered
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.participants.iter().any(|p| p.id == id)
    }

    /// Display label for `id`, falling back to the id itself
    #[must_use]
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.participants
            .iter()
            .find(|p| p.id == id)
            .map_or(id, |p| p.label.as_str())
    }

    /// Number of participants
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl Default for ParticipantRegistry {
    fn default() -> Self {
        Self::new(
            [
                ("cx-terminal", "CX Terminal (Codex)"),
                ("cx-app", "CX App"),
                ("claude-terminal", "Claude Terminal"),
                ("claude-app", "Claude App"),
                ("claude-admin", "WD (Opus Admin)"),
                ("ld-design", "LD (Opus Design)"),
                ("human-operator", "Human Operator"),
                ("human-owner", "Human Owner"),
            ]
            .into_iter()
            .map(|(id, label)| Participant::new(id, label))
            .collect(),
        )
    }
}
