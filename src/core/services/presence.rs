//! Presence aggregation
//!
//! Presence is a pure function of the message log, the ledger, the
//! registry and an explicit `now`. Nothing here samples the clock.

use chrono::{DateTime, TimeDelta, Utc};

use super::{AckLedger, MessageStore};
use crate::core::models::{ParticipantRegistry, Presence, PresenceRecord};

/// Activity window used when none is configured
pub const DEFAULT_ACTIVITY_WINDOW_HOURS: i64 = 24;

/// The default 24-hour activity window
#[must_use]
pub fn default_activity_window() -> TimeDelta {
    TimeDelta::hours(DEFAULT_ACTIVITY_WINDOW_HOURS)
}

/// Compute a presence record for every registered participant
///
/// For each participant, in registry order:
///
/// 1. count messages it sent or received and take the latest `created_at`
/// 2. take the latest `ts` among acks it made
/// 3. last activity is the later of the two; timestamps at or before the
///    Unix epoch count as no activity
/// 4. `Active` when last activity exists and `now - last < window`,
///    otherwise `Idle`
///
/// Participants that only appear in messages are not reported.
#[must_use]
pub fn compute_presence(
    messages: &MessageStore,
    ledger: &AckLedger,
    registry: &ParticipantRegistry,
    now: DateTime<Utc>,
    window: TimeDelta,
) -> Vec<PresenceRecord> {
    registry
        .ids()
        .map(|id| {
            let mut message_count = 0;
            let mut latest_msg: Option<DateTime<Utc>> = None;
            for m in messages.messages().iter().filter(|m| m.involves(id)) {
                message_count += 1;
                latest_msg = latest_msg.max(Some(m.created_at));
            }

            let latest_ack = ledger
                .entries()
                .iter()
                .filter(|a| a.agent_id == id)
                .map(|a| a.ts)
                .max();

            let last_seen = latest_msg.max(latest_ack).filter(|t| t.timestamp_millis() > 0);
            let presence = match last_seen {
                Some(last) if now - last < window => Presence::Active,
                _ => Presence::Idle,
            };

            PresenceRecord {
                id: id.to_string(),
                presence,
                last_seen,
                message_count,
            }
        })
        .collect()
}
