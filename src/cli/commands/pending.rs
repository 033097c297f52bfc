//! Pending command - messages still waiting for an acknowledgment

use agent_hub::api;
use agent_hub::config::HubConfig;
use agent_hub::output::OutputMode;

use super::open_hub;

/// Show messages that require an ack and have none
pub fn pending(config: &HubConfig, mode: OutputMode) -> anyhow::Result<()> {
    let (hub, _) = open_hub(config)?;
    api::get_pending_acks(&hub)?.render(mode);
    Ok(())
}
