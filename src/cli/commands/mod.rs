//! Command implementations

mod ack;
mod agents;
mod init;
mod messages;
mod pending;
#[cfg(feature = "serve")]
mod serve;
mod show;
mod status;
mod topics;

pub use ack::ack;
pub use agents::agents;
pub use init::init;
pub use messages::messages;
pub use pending::pending;
#[cfg(feature = "serve")]
pub use serve::serve;
pub use show::show;
pub use status::status;
pub use topics::topics;

use anyhow::Context;

use agent_hub::adapters::JsonFileSource;
use agent_hub::config::HubConfig;
use agent_hub::core::services::Hub;

/// Hub loaded from the configured data directory, with its source
fn open_hub(config: &HubConfig) -> anyhow::Result<(Hub, JsonFileSource)> {
    let source = config.source();
    if !source.exists() {
        log::warn!(
            "No hub data in {}, run 'agent-hub init' to create it",
            source.dir().display()
        );
    }
    let mut hub = config.hub()?;
    hub.load_from(&source)
        .with_context(|| format!("Failed to load hub data from {}", source.dir().display()))?;
    Ok((hub, source))
}
