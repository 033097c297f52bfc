//! Tests for the HTTP-agnostic API handlers
//!
//! Handlers take a hub and typed input and return `Result<T, ApiError>`.
//! Persistence goes through a mock or in-memory `HubSource`.

use chrono::Utc;

use agent_hub::adapters::MemorySource;
use agent_hub::api::{
    self, AckRequest, ApiError, ApiResponse, ErrorCode, MessageQuery,
};
use agent_hub::core::StorageError;
use agent_hub::core::models::{AckStatus, Acknowledgment, Message, Presence};
use agent_hub::core::ports::HubSource;
use agent_hub::core::services::Hub;

use crate::common::{MessageBuilder, demo_hub, hub_with, t0};

/// Source whose ledger file cannot be written
struct ReadOnlySource;

impl HubSource for ReadOnlySource {
    fn load_messages(&self) -> Result<Vec<Message>, StorageError> {
        Ok(Vec::new())
    }

    fn load_acks(&self) -> Result<Vec<Acknowledgment>, StorageError> {
        Ok(Vec::new())
    }

    fn append_ack(&self, _ack: &Acknowledgment) -> Result<(), StorageError> {
        Err(StorageError::Io {
            path: "acks.jsonl".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

fn ack_request(agent: &str) -> AckRequest {
    AckRequest {
        agent_id: Some(agent.to_string()),
        note: Some("seen".to_string()),
        status: None,
    }
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

#[test]
fn error_codes_map_to_http_status() {
    assert_eq!(ApiError::not_found("x").status_code(), 404);
    assert_eq!(ApiError::bad_request("x").status_code(), 400);
    assert_eq!(ApiError::internal("x").status_code(), 500);
    assert_eq!(ApiError::not_found("gone").to_string(), "NOT_FOUND: gone");
    assert_eq!(ErrorCode::BadRequest.as_str(), "BAD_REQUEST");
}

#[test]
fn error_envelope_serialization() {
    let json = serde_json::to_value(ApiResponse::<()>::error("NOT_FOUND", "gone")).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert!(json.get("data").is_none());
}

// =============================================================================
// MESSAGES
// =============================================================================

#[test]
fn blank_query_returns_everything() {
    let (hub, _) = demo_hub();
    let query = MessageQuery {
        agent: Some(String::new()),
        topic: Some("  ".to_string()),
        priority: None,
    };
    let data = api::get_filtered_messages(&hub, &query).unwrap();
    assert_eq!(data.messages.len(), 11);
}

#[test]
fn topic_query_matches_exactly_without_trimming() {
    let hub = hub_with(
        vec![
            MessageBuilder::new("m1").topic(" padded ").build(),
            MessageBuilder::new("m2").topic("padded").build(),
        ],
        vec![],
    );
    let query = |topic: &str| MessageQuery {
        topic: Some(topic.to_string()),
        ..MessageQuery::default()
    };

    let data = api::get_filtered_messages(&hub, &query(" padded ")).unwrap();
    assert_eq!(data.messages.len(), 1);
    assert_eq!(data.messages[0].msg_id, "m1");

    let data = api::get_filtered_messages(&hub, &query("padded")).unwrap();
    assert_eq!(data.messages.len(), 1);
    assert_eq!(data.messages[0].msg_id, "m2");
}

#[test]
fn priority_query_is_case_insensitive() {
    let (hub, _) = demo_hub();
    let query = MessageQuery {
        priority: Some("high".to_string()),
        ..MessageQuery::default()
    };
    assert_eq!(api::get_filtered_messages(&hub, &query).unwrap().messages.len(), 11);
}

#[test]
fn unknown_priority_is_bad_request() {
    let (hub, _) = demo_hub();
    let query = MessageQuery {
        priority: Some("URGENT".to_string()),
        ..MessageQuery::default()
    };
    let err = api::get_filtered_messages(&hub, &query).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
}

#[test]
fn message_item_carries_labels_and_ack() {
    let (hub, _) = demo_hub();
    let item = api::get_message(&hub, "20260221T130936Z-25ab92").unwrap();
    assert_eq!(item.from_label, "CX Terminal (Codex)");
    assert_eq!(item.to_label, "LD (Opus Design)");
    assert_eq!(item.ack.as_ref().unwrap().status, AckStatus::Ack);
    assert!(!item.pending);
}

#[test]
fn unknown_participant_label_falls_back_to_id() {
    let hub = hub_with(vec![MessageBuilder::new("m1").to("zz").build()], vec![]);
    let item = api::get_message(&hub, "m1").unwrap();
    assert_eq!(item.to_label, "zz");
    assert!(item.pending);
}

#[test]
fn missing_message_is_not_found() {
    let (hub, _) = demo_hub();
    let err = api::get_message(&hub, "nope").unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[test]
fn long_bodies_are_previewed() {
    let body = "x".repeat(300);
    let hub = hub_with(vec![MessageBuilder::new("m1").body(&body).build()], vec![]);
    let item = api::get_message(&hub, "m1").unwrap();
    assert_eq!(item.body.chars().count(), 300);
    assert!(item.preview.chars().count() < 300);
    assert!(item.preview.ends_with('…'));
}

// =============================================================================
// ACKNOWLEDGMENTS
// =============================================================================

#[test]
fn pending_count_matches_list() {
    let (hub, _) = demo_hub();
    let data = api::get_pending_acks(&hub).unwrap();
    assert_eq!(data.count, 4);
    assert_eq!(data.count, data.messages.len());
    assert!(data.messages.iter().all(|m| m.pending && m.ack.is_none()));
}

#[test]
fn ack_message_persists_and_clears_pending() {
    let (mut hub, source) = demo_hub();
    let data =
        api::ack_message(&mut hub, &source, "20260221T180000Z-ld03ef", &ack_request("cx-terminal"))
            .unwrap();
    assert_eq!(data.ack.status, AckStatus::Ack);
    assert!(data.message_known);
    assert_eq!(source.acks().len(), 7);
    assert_eq!(api::get_pending_acks(&hub).unwrap().count, 3);
}

#[test]
fn ack_message_parses_status() {
    let (mut hub, source) = demo_hub();
    let request = AckRequest {
        status: Some("rejected".to_string()),
        ..ack_request("cx-terminal")
    };
    let data = api::ack_message(&mut hub, &source, "20260221T174500Z-ld02cd", &request).unwrap();
    assert_eq!(data.ack.status, AckStatus::Rejected);
}

#[test]
fn ack_message_rejects_bad_status_and_missing_agent() {
    let (mut hub, source) = demo_hub();
    let bad_status = AckRequest {
        status: Some("MAYBE".to_string()),
        ..ack_request("cx-terminal")
    };
    let err = api::ack_message(&mut hub, &source, "m", &bad_status).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);

    let err = api::ack_message(&mut hub, &source, "m", &AckRequest::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
    assert_eq!(source.acks().len(), 6);
    assert_eq!(hub.ledger().len(), 6);
}

#[test]
fn ack_for_unknown_message_is_flagged() {
    let (mut hub, source) = demo_hub();
    let data = api::ack_message(&mut hub, &source, "ghost", &ack_request("ld-design")).unwrap();
    assert!(!data.message_known);
}

#[test]
fn storage_failure_leaves_ledger_untouched() {
    let mut hub = hub_with(vec![MessageBuilder::new("m1").build()], vec![]);
    let err = api::ack_message(&mut hub, &ReadOnlySource, "m1", &ack_request("ld-design"))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::Internal);
    assert!(hub.ledger().is_empty());
    assert_eq!(api::get_pending_acks(&hub).unwrap().count, 1);
}

#[test]
fn reload_picks_up_external_writes() {
    let source = MemorySource::new(vec![MessageBuilder::new("m1").build()], vec![]);
    let mut hub = Hub::default();
    let loaded = api::load_hub_data(&mut hub, &source).unwrap();
    assert_eq!(loaded.messages, 1);
    assert_eq!(loaded.acks, 0);

    let ack = Acknowledgment::at(t0(), "m1", "ld-design", AckStatus::Received, "");
    source.append_ack(&ack).unwrap();
    assert_eq!(api::get_pending_acks(&hub).unwrap().count, 1);

    let loaded = api::load_hub_data(&mut hub, &source).unwrap();
    assert_eq!(loaded.acks, 1);
    assert_eq!(api::get_pending_acks(&hub).unwrap().count, 0);
}

// =============================================================================
// PRESENCE AND TOPICS
// =============================================================================

#[test]
fn agents_report_labels_and_humans() {
    let (hub, _) = demo_hub();
    let data = api::get_agent_presence_list(&hub, Utc::now()).unwrap();
    assert_eq!(data.agents.len(), 8);
    let owner = data.agents.iter().find(|a| a.id == "human-owner").unwrap();
    assert!(owner.human);
    assert_eq!(owner.label, "Human Owner");
    let cx = data.agents.iter().find(|a| a.id == "cx-terminal").unwrap();
    assert!(!cx.human);
}

#[test]
fn agents_json_shape() {
    let (hub, _) = demo_hub();
    let now = "2026-02-21T20:00:00Z".parse().unwrap();
    let data = api::get_agent_presence_list(&hub, now).unwrap();
    assert_eq!(data.agents[0].presence, Presence::Active);
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["agents"][0]["presence"], "active");
    assert_eq!(json["agents"][1]["presence"], "idle");
    assert!(json["agents"][1].get("last_seen").is_none());
}

#[test]
fn topics_list_demo_topics() {
    let (hub, _) = demo_hub();
    let data = api::list_topics(&hub).unwrap();
    assert_eq!(data.topics.first().map(String::as_str), Some("contract-confirmed"));
    assert_eq!(data.topics.iter().filter(|t| *t == "implementation-contract").count(), 1);
}
