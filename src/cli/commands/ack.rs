//! Ack command - record an acknowledgment for a message

use agent_hub::api::{self, AckRequest};
use agent_hub::config::HubConfig;
use agent_hub::output::OutputMode;

use super::open_hub;

/// Acknowledge a message
///
/// The acknowledger and note fall back to the configured defaults.
pub fn ack(
    config: &HubConfig,
    id: &str,
    by: Option<String>,
    note: Option<String>,
    status: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (mut hub, source) = open_hub(config)?;
    let request = AckRequest {
        agent_id: Some(by.unwrap_or_else(|| config.hub.default_agent.clone())),
        note: Some(note.unwrap_or_else(|| config.hub.default_note.clone())),
        status,
    };
    let data = api::ack_message(&mut hub, &source, id, &request)?;
    log::debug!("Ledger now holds {} acknowledgment(s)", hub.ledger().len());
    data.render(mode);
    Ok(())
}
