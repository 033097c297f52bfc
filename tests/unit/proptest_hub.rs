//! Property-based tests for the hub core
//!
//! Uses proptest to verify properties that should hold for all feeds.

use chrono::TimeDelta;
use proptest::prelude::*;

use agent_hub::core::models::{Acknowledgment, Message, Presence, Priority};
use agent_hub::core::services::MessageFilter;

use crate::common::{AckBuilder, MessageBuilder, hub_with, minutes_after_t0};

const AGENTS: [&str; 4] = ["cx-terminal", "ld-design", "claude-admin", "human-owner"];
const TOPICS: [&str; 3] = ["ops", "design", "review"];

/// One generated message plus whether it gets acknowledged
fn message_strategy() -> impl Strategy<Value = (Message, bool)> {
    (
        0..AGENTS.len(),
        0..AGENTS.len(),
        0..TOPICS.len(),
        0..Priority::ALL.len(),
        any::<bool>(),
        -2000i64..2000,
        any::<bool>(),
    )
        .prop_map(|(from, to, topic, priority, requires_ack, minute, acked)| {
            let mut builder = MessageBuilder::new("placeholder")
                .from(AGENTS[from])
                .to(AGENTS[to])
                .topic(TOPICS[topic])
                .priority(Priority::ALL[priority])
                .at(minutes_after_t0(minute));
            if !requires_ack {
                builder = builder.no_ack();
            }
            (builder.build(), acked)
        })
}

fn feed_strategy() -> impl Strategy<Value = (Vec<Message>, Vec<Acknowledgment>)> {
    prop::collection::vec(message_strategy(), 0..20).prop_map(|generated| {
        let mut messages = Vec::new();
        let mut acks = Vec::new();
        for (i, (mut message, acked)) in generated.into_iter().enumerate() {
            message.msg_id = format!("m{i}");
            if acked {
                acks.push(
                    AckBuilder::new(&message.msg_id)
                        .by(&message.to_agent)
                        .at(message.created_at + TimeDelta::minutes(5))
                        .build(),
                );
            }
            messages.push(message);
        }
        (messages, acks)
    })
}

proptest! {
    /// Pending holds exactly the messages that need an ack and have none
    #[test]
    fn pending_is_exactly_unacked_required((messages, acks) in feed_strategy()) {
        let hub = hub_with(messages.clone(), acks.clone());
        let pending: Vec<&str> = hub.pending_acks().iter().map(|m| m.msg_id.as_str()).collect();
        for message in &messages {
            let acked = acks.iter().any(|a| a.msg_id == message.msg_id);
            let expected = message.requires_ack && !acked;
            prop_assert_eq!(pending.contains(&message.msg_id.as_str()), expected);
        }
    }

    /// Queries do not change what later queries see
    #[test]
    fn reads_are_idempotent((messages, acks) in feed_strategy()) {
        let hub = hub_with(messages, acks);
        let now = minutes_after_t0(0);
        let first: Vec<String> = hub.pending_acks().iter().map(|m| m.msg_id.clone()).collect();
        let presence = hub.agent_presence_list(now);
        let second: Vec<String> = hub.pending_acks().iter().map(|m| m.msg_id.clone()).collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(presence, hub.agent_presence_list(now));
    }

    /// The feed is always ordered newest first
    #[test]
    fn feed_is_newest_first((messages, acks) in feed_strategy()) {
        let hub = hub_with(messages, acks);
        let stored = hub.store().messages();
        prop_assert!(stored.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    /// Appending never rewrites earlier entries
    #[test]
    fn ledger_is_append_only(
        (messages, acks) in feed_strategy(),
        extra in prop::collection::vec("[a-z]{1,8}", 1..5)
    ) {
        let mut hub = hub_with(messages, acks);
        let before = hub.ledger().entries().to_vec();
        for msg_id in &extra {
            hub.ack_message(msg_id, "ld-design", "").unwrap();
        }
        let after = hub.ledger().entries();
        prop_assert_eq!(after.len(), before.len() + extra.len());
        prop_assert_eq!(&after[..before.len()], &before[..]);
    }

    /// A combined filter is the intersection of its single-field filters
    #[test]
    fn filter_is_conjunction(
        (messages, acks) in feed_strategy(),
        agent in 0..AGENTS.len(),
        topic in 0..TOPICS.len(),
        priority in 0..Priority::ALL.len()
    ) {
        let hub = hub_with(messages, acks);
        let by_agent = MessageFilter::new().agent(AGENTS[agent]);
        let by_topic = MessageFilter::new().topic(TOPICS[topic]);
        let by_priority = MessageFilter::new().priority(Priority::ALL[priority]);
        let combined = MessageFilter::new()
            .agent(AGENTS[agent])
            .topic(TOPICS[topic])
            .priority(Priority::ALL[priority]);

        for message in hub.store().messages() {
            let all = by_agent.matches(message)
                && by_topic.matches(message)
                && by_priority.matches(message);
            prop_assert_eq!(combined.matches(message), all);
        }
        prop_assert_eq!(hub.filtered_messages(&MessageFilter::new()).count(), hub.store().len());
    }

    /// Moving the clock forward never turns an idle participant active
    #[test]
    fn presence_decays_over_time(
        (messages, acks) in feed_strategy(),
        start in -3000i64..3000,
        step in 0i64..3000
    ) {
        let hub = hub_with(messages, acks);
        let earlier = hub.agent_presence_list(minutes_after_t0(start));
        let later = hub.agent_presence_list(minutes_after_t0(start + step));
        for (e, l) in earlier.iter().zip(&later) {
            if e.presence == Presence::Idle {
                prop_assert_eq!(l.presence, Presence::Idle);
            }
            prop_assert_eq!(e.last_seen, l.last_seen);
        }
    }

    /// Recording more activity never moves anyone's last-seen backward
    #[test]
    fn new_activity_never_rewinds_last_seen(
        (messages, acks) in feed_strategy(),
        agent in 0..AGENTS.len(),
        minute in -3000i64..3000
    ) {
        let now = minutes_after_t0(0);
        let before = hub_with(messages.clone(), acks.clone()).agent_presence_list(now);

        let mut more_acks = acks;
        more_acks.push(AckBuilder::new("m0").by(AGENTS[agent]).at(minutes_after_t0(minute)).build());
        let after = hub_with(messages, more_acks).agent_presence_list(now);

        for (b, a) in before.iter().zip(&after) {
            prop_assert!(a.last_seen >= b.last_seen);
        }
    }

    /// Previews stay short and are a prefix of the body
    #[test]
    fn preview_is_bounded_prefix(body in "\\PC{0,300}") {
        let message = MessageBuilder::new("m").body(&body).build();
        let preview = message.preview();
        prop_assert!(preview.chars().count() <= 121);
        let head = preview.trim_end_matches('…');
        prop_assert!(body.starts_with(head));
    }
}
