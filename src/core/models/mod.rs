//! Domain models for the agent hub
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Message`] - "X told Y this, and may expect an answer"
//! - [`Acknowledgment`] - "Y confirmed (or refused) message M"
//! - [`PresenceRecord`] - derived activity summary of a participant
//! - [`ParticipantRegistry`] - the participants presence is computed for

mod ack_status;
mod acknowledgment;
mod message;
mod participant;
mod presence;
mod priority;

pub use ack_status::AckStatus;
pub use acknowledgment::Acknowledgment;
pub use message::{Message, PREVIEW_CHARS};
pub use participant::{HUMAN_PREFIX, Participant, ParticipantRegistry, is_human};
pub use presence::{AckState, Presence, PresenceRecord};
pub use priority::Priority;
