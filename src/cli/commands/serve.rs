//! Serve command - expose the hub over HTTP

use agent_hub::config::HubConfig;

use super::open_hub;
use crate::server;

/// Load the hub and serve it until the process is stopped
pub fn serve(config: &HubConfig, port: u16) -> anyhow::Result<()> {
    let (hub, source) = open_hub(config)?;
    server::serve(hub, source, port)
}
