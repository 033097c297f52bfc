//! Show command - one message in full

use agent_hub::api;
use agent_hub::config::HubConfig;
use agent_hub::output::OutputMode;

use super::open_hub;

/// Show a single message with its acknowledgment state
pub fn show(config: &HubConfig, id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let (hub, _) = open_hub(config)?;
    api::get_message(&hub, id)?.render(mode);
    Ok(())
}
