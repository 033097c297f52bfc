//! Output formatting for human and JSON modes
//!
//! Every API response type can be rendered either as human-readable text
//! or machine-parseable JSON. Text building is separate from printing so it
//! can be tested.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::api::{AckData, AgentItem, AgentsData, MessageItem, MessagesData, PendingData, TopicsData};
use crate::core::models::{Presence, Priority};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

// =============================================================================
// FORMATTING HELPERS
// =============================================================================

/// Relative description of `last_seen` as seen from `now`
///
/// `never`, `just now`, `Nm ago`, `Nh ago` or `Nd ago`. Timestamps in the
/// future read as `just now`.
#[must_use]
pub fn time_ago(now: DateTime<Utc>, last_seen: Option<DateTime<Utc>>) -> String {
    let Some(last_seen) = last_seen else {
        return "never".to_string();
    };
    let mins = (now - last_seen).num_minutes();
    if mins < 1 {
        return "just now".to_string();
    }
    if mins < 60 {
        return format!("{mins}m ago");
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

fn priority_badge(priority: Priority) -> ColoredString {
    let text = format!("[{priority}]");
    match priority {
        Priority::Critical => text.red().bold(),
        Priority::High => text.yellow(),
        Priority::Medium => text.cyan(),
        Priority::Low => text.dimmed(),
    }
}

/// Acknowledgment line for a message, or `None` when no ack is involved
#[must_use]
pub fn ack_badge(item: &MessageItem) -> Option<String> {
    if let Some(ack) = &item.ack {
        let text = format!("{} by {}", ack.status, ack.agent_id);
        let badge = if ack.status.is_positive() {
            text.green()
        } else {
            text.red()
        };
        return Some(if ack.note.is_empty() {
            badge.to_string()
        } else {
            format!("{badge}: {}", ack.note)
        });
    }
    item.pending.then(|| "PENDING".yellow().to_string())
}

fn message_block(item: &MessageItem, full_body: bool) -> String {
    let mut lines = vec![format!(
        "{} {}  {} -> {}  {}",
        priority_badge(item.priority),
        item.created_at.format("%Y-%m-%d %H:%M"),
        item.from_label.cyan(),
        item.to_label.magenta(),
        format!("#{}", item.topic).dimmed(),
    )];
    let body = if full_body { &item.body } else { &item.preview };
    lines.extend(body.lines().map(|line| format!("  {line}")));
    if let Some(path) = &item.payload_path {
        lines.push(format!("  payload: {path}"));
    }
    if let Some(badge) = ack_badge(item) {
        lines.push(format!("  {badge}"));
    }
    lines.push(format!("  id: {}", item.msg_id.dimmed()));
    lines.join("\n") + "\n"
}

fn presence_marker(presence: Presence) -> ColoredString {
    match presence {
        Presence::Active => "● active ".green(),
        Presence::Idle => "○ idle   ".dimmed(),
        Presence::Offline => "× offline".red(),
    }
}

fn agent_line(agent: &AgentItem, now: DateTime<Utc>) -> String {
    let kind = if agent.human { "human" } else { "agent" };
    format!(
        "{}  {} [{}]  {kind}  {} msg(s)  last seen {}\n",
        presence_marker(agent.presence),
        agent.label.bold(),
        agent.id,
        agent.message_count,
        time_ago(now, agent.last_seen),
    )
}

// =============================================================================
// RESPONSE RENDERING
// =============================================================================

impl MessagesData {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.messages.is_empty() {
            return "No messages match.\n".to_string();
        }
        let mut out = String::new();
        for item in &self.messages {
            out.push_str(&message_block(item, false));
            out.push('\n');
        }
        out.push_str(&format!("{} message(s)\n", self.messages.len()));
        out
    }
}

impl PendingData {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.messages.is_empty() {
            return "No messages awaiting acknowledgment.\n".to_string();
        }
        let mut out = format!("Awaiting acknowledgment: {}\n\n", self.count);
        for item in &self.messages {
            out.push_str(&message_block(item, false));
            out.push('\n');
        }
        let first = self.messages.first().map_or("<msg-id>", |m| m.msg_id.as_str());
        out.push_str(&format!("To acknowledge: agent-hub ack {first} --note \"...\"\n"));
        out
    }
}

impl MessageItem {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text with the full body
    #[must_use]
    pub fn to_human(&self) -> String {
        message_block(self, true)
    }
}

impl AgentsData {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.agents.is_empty() {
            return "No agents registered.\n".to_string();
        }
        let mut out: String = self.agents.iter().map(|a| agent_line(a, self.as_of)).collect();
        let active = self.agents.iter().filter(|a| a.presence == Presence::Active).count();
        out.push_str(&format!("\n{active} of {} active\n", self.agents.len()));
        out
    }
}

impl TopicsData {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.topics.is_empty() {
                    println!("No topics.");
                }
                for topic in &self.topics {
                    println!("#{topic}");
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl AckData {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = format!(
            "Recorded {} for {} by {}\n",
            self.ack.status, self.ack.msg_id, self.ack.agent_id
        );
        if !self.ack.note.is_empty() {
            out.push_str(&format!("  Note: {}\n", self.ack.note));
        }
        if !self.message_known {
            out.push_str("  Warning: message is not in the loaded feed\n");
        }
        out
    }
}
