//! Agents command - presence of every registered participant

use anyhow::Context;
use chrono::{DateTime, Utc};

use agent_hub::api;
use agent_hub::config::HubConfig;
use agent_hub::output::OutputMode;

use super::open_hub;

/// Show presence as of `now` (RFC 3339), or as of the current time
pub fn agents(config: &HubConfig, now: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let now = match now {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("Invalid time '{s}', expected RFC 3339"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    let (hub, _) = open_hub(config)?;
    api::get_agent_presence_list(&hub, now)?.render(mode);
    Ok(())
}
