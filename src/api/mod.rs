//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure business logic
//! handlers that can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or directly by clients (CLI, dashboards, etc.).
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take the hub and typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    ack_message, get_agent_presence_list, get_filtered_messages, get_message, get_pending_acks,
    list_topics, load_hub_data,
};
pub use types::{
    AckData, AckRequest, AgentItem, AgentsData, ApiResponse, LoadData, MessageItem, MessageQuery,
    MessagesData, PendingData, TopicsData,
};
