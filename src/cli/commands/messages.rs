//! Messages command - show the filtered feed

use agent_hub::api::{self, MessageQuery};
use agent_hub::config::HubConfig;
use agent_hub::output::OutputMode;

use super::open_hub;

/// Show the feed, narrowed by any given filters
pub fn messages(
    config: &HubConfig,
    agent: Option<String>,
    topic: Option<String>,
    priority: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (hub, _) = open_hub(config)?;
    let query = MessageQuery {
        agent,
        topic,
        priority,
    };
    api::get_filtered_messages(&hub, &query)?.render(mode);
    Ok(())
}
