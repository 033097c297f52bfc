//! Topics command

use agent_hub::api;
use agent_hub::config::HubConfig;
use agent_hub::output::OutputMode;

use super::open_hub;

/// List distinct topics, most recently used first
pub fn topics(config: &HubConfig, mode: OutputMode) -> anyhow::Result<()> {
    let (hub, _) = open_hub(config)?;
    api::list_topics(&hub)?.render(mode);
    Ok(())
}
