//! Tests for the hub core
//!
//! Covers the message store, the acknowledgment ledger, the pending view and
//! presence as seen through the `Hub` facade.

use chrono::TimeDelta;

use agent_hub::core::ValidationError;
use agent_hub::core::models::{
    AckState, AckStatus, Participant, ParticipantRegistry, Presence, Priority,
};
use agent_hub::core::services::{Hub, MessageFilter};

use crate::common::{
    AckBuilder, MessageBuilder, demo_hub, hours_after_t0, hub_with, ids, minutes_after_t0, t0,
};

// =============================================================================
// PENDING VIEW
// =============================================================================

#[test]
fn pending_excludes_messages_not_requiring_ack() {
    let hub = hub_with(
        vec![MessageBuilder::new("m1").build(), MessageBuilder::new("m2").no_ack().build()],
        vec![],
    );
    assert_eq!(ids(&hub.pending_acks()), vec!["m1"]);
}

#[test]
fn acknowledging_clears_pending() {
    let mut hub = hub_with(
        vec![MessageBuilder::new("m1").build(), MessageBuilder::new("m2").no_ack().build()],
        vec![],
    );
    hub.ack_message("m1", "ld-design", "").unwrap();
    assert!(hub.pending_acks().is_empty());
}

#[test]
fn rejected_ack_still_clears_pending() {
    let hub = hub_with(
        vec![MessageBuilder::new("m1").build()],
        vec![AckBuilder::new("m1").status(AckStatus::Rejected).build()],
    );
    assert!(hub.pending_acks().is_empty());
    let message = hub.message("m1").unwrap();
    assert!(matches!(hub.ack_state(message), AckState::Acknowledged(a) if a.status == AckStatus::Rejected));
}

#[test]
fn pending_is_newest_first() {
    let hub = hub_with(
        vec![
            MessageBuilder::new("old").at(hours_after_t0(-2)).build(),
            MessageBuilder::new("new").at(hours_after_t0(1)).build(),
            MessageBuilder::new("mid").build(),
        ],
        vec![],
    );
    assert_eq!(ids(&hub.pending_acks()), vec!["new", "mid", "old"]);
}

#[test]
fn ack_state_distinguishes_not_required() {
    let hub = hub_with(vec![MessageBuilder::new("info").no_ack().build()], vec![]);
    let message = hub.message("info").unwrap();
    assert!(matches!(hub.ack_state(message), AckState::NotRequired));
    assert!(!hub.ack_state(message).is_pending());
}

#[test]
fn demo_session_has_four_pending() {
    let (hub, _) = demo_hub();
    assert_eq!(
        ids(&hub.pending_acks()),
        vec![
            "20260221T180000Z-ld03ef",
            "20260221T174500Z-ld02cd",
            "20260221T173000Z-ld01ab",
            "20260221T120628Z-8ac15f",
        ]
    );
}

// =============================================================================
// LEDGER
// =============================================================================

#[test]
fn empty_message_id_is_rejected_without_change() {
    let mut hub = hub_with(vec![MessageBuilder::new("m1").build()], vec![]);
    let err = hub.ack_message("", "ld-design", "").unwrap_err();
    assert_eq!(err, ValidationError::MissingField("msg_id"));
    assert_eq!(hub.ledger().len(), 0);
}

#[test]
fn empty_agent_id_is_rejected_without_change() {
    let mut hub = hub_with(vec![MessageBuilder::new("m1").build()], vec![]);
    let err = hub.ack_message("m1", "  ", "").unwrap_err();
    assert_eq!(err, ValidationError::MissingField("agent_id"));
    assert!(hub.ledger().is_empty());
}

#[test]
fn first_ack_wins() {
    let hub = hub_with(
        vec![MessageBuilder::new("m1").build()],
        vec![
            AckBuilder::new("m1").note("A").build(),
            AckBuilder::new("m1").note("B").at(hours_after_t0(1)).build(),
        ],
    );
    assert_eq!(hub.ack_for_message("m1").unwrap().note, "A");
}

#[test]
fn ack_for_unknown_message_is_accepted() {
    let mut hub = hub_with(vec![], vec![]);
    hub.ack_message("ghost", "ld-design", "late").unwrap();
    assert_eq!(hub.ack_for_message("ghost").unwrap().note, "late");
}

#[test]
fn invalid_load_keeps_previous_state() {
    let mut hub = hub_with(vec![MessageBuilder::new("m1").build()], vec![]);
    let result = hub.load_hub_data(
        vec![MessageBuilder::new("m2").build()],
        vec![AckBuilder::new("m2").by("").build()],
    );
    assert!(result.is_err());
    assert!(hub.message("m1").is_some());
    assert!(hub.message("m2").is_none());
}

#[test]
fn reload_replaces_feed_and_ledger() {
    let mut hub = hub_with(
        vec![MessageBuilder::new("m1").build()],
        vec![AckBuilder::new("m1").build()],
    );
    hub.load_hub_data(vec![MessageBuilder::new("m2").build()], vec![]).unwrap();
    assert!(hub.message("m1").is_none());
    assert!(hub.ledger().is_empty());
    assert_eq!(ids(&hub.pending_acks()), vec!["m2"]);
}

// =============================================================================
// FILTERING
// =============================================================================

#[test]
fn filter_combines_criteria() {
    let hub = hub_with(
        vec![
            MessageBuilder::new("a").topic("ops").priority(Priority::High).build(),
            MessageBuilder::new("b").topic("ops").build(),
            MessageBuilder::new("c").topic("design").priority(Priority::High).build(),
            MessageBuilder::new("d")
                .from("claude-admin")
                .to("human-owner")
                .topic("ops")
                .priority(Priority::High)
                .build(),
        ],
        vec![],
    );
    let filter = MessageFilter::new().agent("ld-design").topic("ops").priority(Priority::High);
    let matched: Vec<_> = hub.filtered_messages(&filter).map(|m| m.msg_id.as_str()).collect();
    assert_eq!(matched, vec!["a"]);
}

#[test]
fn agent_filter_matches_sender_or_recipient() {
    let hub = hub_with(
        vec![
            MessageBuilder::new("sent").from("claude-app").at(minutes_after_t0(2)).build(),
            MessageBuilder::new("received").to("claude-app").at(minutes_after_t0(1)).build(),
            MessageBuilder::new("other").build(),
        ],
        vec![],
    );
    let filter = MessageFilter::new().agent("claude-app");
    let matched: Vec<_> = hub.filtered_messages(&filter).map(|m| m.msg_id.as_str()).collect();
    assert_eq!(matched, vec!["sent", "received"]);
}

#[test]
fn topics_are_distinct_newest_first() {
    let hub = hub_with(
        vec![
            MessageBuilder::new("1").topic("alpha").at(hours_after_t0(1)).build(),
            MessageBuilder::new("2").topic("beta").at(hours_after_t0(2)).build(),
            MessageBuilder::new("3").topic("alpha").at(hours_after_t0(3)).build(),
        ],
        vec![],
    );
    assert_eq!(hub.topics(), vec!["alpha", "beta"]);
}

// =============================================================================
// PRESENCE
// =============================================================================

fn single_participant_hub(messages_at: &[i64]) -> Hub {
    let registry = ParticipantRegistry::new(vec![Participant::new("p", "P")]);
    let mut hub = Hub::new(registry, TimeDelta::hours(24));
    let messages = messages_at
        .iter()
        .enumerate()
        .map(|(i, h)| {
            MessageBuilder::new(&format!("m{i}"))
                .from("p")
                .to("zz")
                .at(hours_after_t0(*h))
                .build()
        })
        .collect();
    hub.load_hub_data(messages, vec![]).unwrap();
    hub
}

#[test]
fn presence_follows_activity_window() {
    let hub = single_participant_hub(&[0]);
    let at_23h = hub.agent_presence_list(hours_after_t0(23));
    assert_eq!(at_23h[0].presence, Presence::Active);
    let at_25h = hub.agent_presence_list(hours_after_t0(25));
    assert_eq!(at_25h[0].presence, Presence::Idle);
}

#[test]
fn presence_window_boundary_is_idle() {
    let hub = single_participant_hub(&[0]);
    assert_eq!(hub.agent_presence_list(hours_after_t0(24))[0].presence, Presence::Idle);
}

#[test]
fn unregistered_participants_are_not_reported() {
    let hub = single_participant_hub(&[0, 1]);
    let records = hub.agent_presence_list(t0());
    assert_eq!(records.len(), 1);
    assert!(records.iter().all(|r| r.id != "zz"));
    assert_eq!(records[0].message_count, 2);
}

#[test]
fn acks_count_as_activity() {
    let hub = hub_with(
        vec![MessageBuilder::new("m1").at(hours_after_t0(-48)).build()],
        vec![AckBuilder::new("m1").by("human-owner").at(hours_after_t0(-1)).build()],
    );
    let records = hub.agent_presence_list(t0());
    let owner = records.iter().find(|r| r.id == "human-owner").unwrap();
    assert_eq!(owner.presence, Presence::Active);
    assert_eq!(owner.message_count, 0);
    assert_eq!(owner.last_seen, Some(hours_after_t0(-1)));
}

#[test]
fn silent_participants_are_idle_with_no_last_seen() {
    let hub = hub_with(vec![], vec![]);
    let records = hub.agent_presence_list(t0());
    assert_eq!(records.len(), 8);
    assert!(records.iter().all(|r| r.presence == Presence::Idle && r.last_seen.is_none()));
}

#[test]
fn demo_presence_in_the_evening() {
    let (hub, _) = demo_hub();
    let now = "2026-02-21T20:00:00Z".parse().unwrap();
    let records = hub.agent_presence_list(now);
    let active: Vec<_> = records
        .iter()
        .filter(|r| r.presence == Presence::Active)
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(
        active,
        vec!["cx-terminal", "claude-admin", "ld-design", "human-operator", "human-owner"]
    );
    let cx = records.iter().find(|r| r.id == "cx-terminal").unwrap();
    assert_eq!(cx.message_count, 10);
}
