//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take the hub and typed input and return `Result<T, ApiError>`.
//! Sharing the hub between callers is the caller's business.

use chrono::{DateTime, Utc};

use super::error::ApiError;
use super::types::{
    AckData, AckRequest, AgentItem, AgentsData, LoadData, MessageItem, MessageQuery, MessagesData,
    PendingData, TopicsData,
};
use crate::core::models::{AckStatus, Acknowledgment, Message, is_human};
use crate::core::ports::HubSource;
use crate::core::services::Hub;

// =============================================================================
// LOADING
// =============================================================================

/// Reload the feed and the ledger from `source`, replacing what was loaded
pub fn load_hub_data(hub: &mut Hub, source: &dyn HubSource) -> Result<LoadData, ApiError> {
    hub.load_from(source)?;
    Ok(LoadData {
        messages: hub.store().len(),
        acks: hub.ledger().len(),
    })
}

// =============================================================================
// MESSAGES
// =============================================================================

fn message_item(hub: &Hub, message: &Message) -> MessageItem {
    let state = hub.ack_state(message);
    let registry = hub.registry();
    MessageItem {
        msg_id: message.msg_id.clone(),
        created_at: message.created_at,
        from_label: registry.label(&message.from_agent).to_string(),
        from_agent: message.from_agent.clone(),
        to_label: registry.label(&message.to_agent).to_string(),
        to_agent: message.to_agent.clone(),
        topic: message.topic.clone(),
        priority: message.priority,
        requires_ack: message.requires_ack,
        body: message.body.clone(),
        preview: message.preview(),
        payload_path: message.payload_path.clone(),
        ack: state.ack().cloned(),
        pending: state.is_pending(),
    }
}

/// Messages matching the query, newest first
pub fn get_filtered_messages(hub: &Hub, query: &MessageQuery) -> Result<MessagesData, ApiError> {
    let filter = query.to_filter()?;
    let messages = hub.filtered_messages(&filter).map(|m| message_item(hub, m)).collect();
    Ok(MessagesData { messages })
}

/// One message with its acknowledgment state
pub fn get_message(hub: &Hub, msg_id: &str) -> Result<MessageItem, ApiError> {
    hub.message(msg_id)
        .map(|m| message_item(hub, m))
        .ok_or_else(|| ApiError::not_found(format!("Message '{msg_id}' not found")))
}

/// Distinct topics of the feed
pub fn list_topics(hub: &Hub) -> Result<TopicsData, ApiError> {
    Ok(TopicsData {
        topics: hub.topics().into_iter().map(String::from).collect(),
    })
}

// =============================================================================
// ACKNOWLEDGMENTS
// =============================================================================

/// Messages waiting for acknowledgment
pub fn get_pending_acks(hub: &Hub) -> Result<PendingData, ApiError> {
    let messages: Vec<MessageItem> =
        hub.pending_acks().into_iter().map(|m| message_item(hub, m)).collect();
    Ok(PendingData {
        count: messages.len(),
        messages,
    })
}

/// Acknowledge a message and persist the record
///
/// The acknowledging participant is required; status defaults to `ACK`
/// and the note to empty. Unknown message ids are accepted.
pub fn ack_message(
    hub: &mut Hub,
    source: &dyn HubSource,
    msg_id: &str,
    req: &AckRequest,
) -> Result<AckData, ApiError> {
    let status = match req.status.as_deref() {
        Some(s) => s.parse()?,
        None => AckStatus::Ack,
    };
    let ack = Acknowledgment::new(
        msg_id,
        req.agent_id.clone().unwrap_or_default(),
        status,
        req.note.clone().unwrap_or_default(),
    );
    let message_known = hub.message(msg_id).is_some();
    let ack = hub.record_ack(ack, source)?.clone();
    Ok(AckData { ack, message_known })
}

// =============================================================================
// PRESENCE
// =============================================================================

/// Presence of every registered participant as of `now`
pub fn get_agent_presence_list(hub: &Hub, now: DateTime<Utc>) -> Result<AgentsData, ApiError> {
    let registry = hub.registry();
    let agents = hub
        .agent_presence_list(now)
        .into_iter()
        .map(|record| AgentItem {
            label: registry.label(&record.id).to_string(),
            human: is_human(&record.id),
            id: record.id,
            presence: record.presence,
            last_seen: record.last_seen,
            message_count: record.message_count,
        })
        .collect();
    Ok(AgentsData { as_of: now, agents })
}
