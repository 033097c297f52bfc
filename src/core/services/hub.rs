//! The hub: one message store, one ledger, one registry
//!
//! `Hub` is an ordinary owned value. Callers construct it, pass it by
//! reference and decide how to share it; mutation needs `&mut Hub`.

use chrono::{DateTime, TimeDelta, Utc};

use super::{
    AckLedger, MessageFilter, MessageStore, ack_state, compute_presence, default_activity_window,
    pending_acks,
};
use crate::core::error::{HubError, ValidationError};
use crate::core::models::{
    AckState, AckStatus, Acknowledgment, Message, ParticipantRegistry, PresenceRecord,
};
use crate::core::ports::HubSource;

/// Message feed, acknowledgment ledger and participant registry
#[derive(Debug, Clone)]
pub struct Hub {
    store: MessageStore,
    ledger: AckLedger,
    registry: ParticipantRegistry,
    window: TimeDelta,
}

impl Hub {
    /// Create an empty hub
    #[must_use]
    pub fn new(registry: ParticipantRegistry, window: TimeDelta) -> Self {
        Self {
            store: MessageStore::new(),
            ledger: AckLedger::new(),
            registry,
            window,
        }
    }

    // =========================================================================
    // LOADING
    // =========================================================================

    /// Replace the feed and the ledger
    ///
    /// Nothing changes if any acknowledgment is invalid.
    pub fn load_hub_data(
        &mut self,
        messages: Vec<Message>,
        acks: Vec<Acknowledgment>,
    ) -> Result<(), ValidationError> {
        let ledger = AckLedger::from_entries(acks)?;
        self.store.load(messages);
        self.ledger = ledger;
        log::info!(
            "Hub loaded: {} message(s), {} ack(s)",
            self.store.len(),
            self.ledger.len()
        );
        Ok(())
    }

    /// Replace the feed and the ledger from a backing store
    pub fn load_from(&mut self, source: &dyn HubSource) -> Result<(), HubError> {
        let messages = source.load_messages()?;
        let acks = source.load_acks()?;
        self.load_hub_data(messages, acks)?;
        Ok(())
    }

    // =========================================================================
    // ACKNOWLEDGING
    // =========================================================================

    /// Record an `ACK` by `by_agent` for `msg_id`, stamped now
    pub fn ack_message(
        &mut self,
        msg_id: &str,
        by_agent: &str,
        note: &str,
    ) -> Result<&Acknowledgment, ValidationError> {
        self.append_ack(Acknowledgment::new(msg_id, by_agent, AckStatus::Ack, note))
    }

    /// Append an acknowledgment to the in-memory ledger only
    pub fn append_ack(&mut self, ack: Acknowledgment) -> Result<&Acknowledgment, ValidationError> {
        if self.store.get(&ack.msg_id).is_none() {
            log::debug!("Acknowledging unknown message '{}'", ack.msg_id);
        }
        self.ledger.append(ack)
    }

    /// Validate, persist to `source`, then append in memory
    ///
    /// The in-memory ledger is only touched once the backing store accepted
    /// the record, so a failure leaves both unchanged.
    pub fn record_ack(
        &mut self,
        ack: Acknowledgment,
        source: &dyn HubSource,
    ) -> Result<&Acknowledgment, HubError> {
        ack.validate()?;
        source.append_ack(&ack)?;
        Ok(self.append_ack(ack)?)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Messages awaiting acknowledgment, newest first
    #[must_use]
    pub fn pending_acks(&self) -> Vec<&Message> {
        pending_acks(&self.store, &self.ledger)
    }

    /// Messages matching `filter`, newest first
    pub fn filtered_messages<'a>(
        &'a self,
        filter: &'a MessageFilter,
    ) -> impl Iterator<Item = &'a Message> {
        self.store.filter(filter)
    }

    /// Presence of every registered participant as of `now`
    #[must_use]
    pub fn agent_presence_list(&self, now: DateTime<Utc>) -> Vec<PresenceRecord> {
        compute_presence(&self.store, &self.ledger, &self.registry, now, self.window)
    }

    /// First acknowledgment recorded for `msg_id`
    #[must_use]
    pub fn ack_for_message(&self, msg_id: &str) -> Option<&Acknowledgment> {
        self.ledger.find_by_message_id(msg_id)
    }

    /// Acknowledgment state of `message`
    #[must_use]
    pub fn ack_state(&self, message: &Message) -> AckState<'_> {
        ack_state(message, &self.ledger)
    }

    /// Message by id
    #[must_use]
    pub fn message(&self, msg_id: &str) -> Option<&Message> {
        self.store.get(msg_id)
    }

    /// Distinct topics, newest first
    #[must_use]
    pub fn topics(&self) -> Vec<&str> {
        self.store.topics()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The message store
    #[must_use]
    pub const fn store(&self) -> &MessageStore {
        &self.store
    }

    /// The acknowledgment ledger
    #[must_use]
    pub const fn ledger(&self) -> &AckLedger {
        &self.ledger
    }

    /// The participant registry
    #[must_use]
    pub const fn registry(&self) -> &ParticipantRegistry {
        &self.registry
    }

    /// Window within which activity counts as present
    #[must_use]
    pub const fn activity_window(&self) -> TimeDelta {
        self.window
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new(ParticipantRegistry::default(), default_activity_window())
    }
}
