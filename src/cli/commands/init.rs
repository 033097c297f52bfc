//! Initialize a hub in the current directory

use std::path::Path;

use agent_hub::adapters::seed;
use agent_hub::config::HubConfig;
use agent_hub::core::models::ParticipantRegistry;
use agent_hub::output::{OperationResult, OutputMode};
use agent_hub::paths;

/// Write the config (when missing) and the data files
///
/// The feed is seeded with the demo session unless `empty` is set.
/// Existing data is kept unless `force` is set.
pub fn init(
    explicit: Option<&Path>,
    force: bool,
    empty: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config_path = explicit.map_or_else(paths::project_config, Path::to_path_buf);
    let config_exists = config_path.is_file();
    let config = if config_exists {
        HubConfig::load_from(&config_path)?
    } else {
        HubConfig {
            participants: ParticipantRegistry::default().participants().to_vec(),
            ..HubConfig::default()
        }
    };
    let source = config.source();

    if source.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to reinitialize.",
                source.messages_path().display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    let mut lines = Vec::new();
    if !config_exists {
        config.save_to(&config_path)?;
        lines.push(format!("  Created {}", config_path.display()));
    }

    let (messages, acks) = if empty {
        (Vec::new(), Vec::new())
    } else {
        (seed::demo_messages()?, seed::demo_acks()?)
    };
    source.write_messages(&messages)?;
    source.write_acks(&acks)?;
    lines.push(format!(
        "  Wrote {} ({} messages)",
        source.messages_path().display(),
        messages.len()
    ));
    lines.push(format!(
        "  Wrote {} ({} acknowledgments)",
        source.acks_path().display(),
        acks.len()
    ));
    log::info!("Initialized hub in {}", source.dir().display());

    OperationResult {
        success: true,
        message: format!(
            "Initializing agent-hub...\n\n{}\n\nagent-hub initialized!\n\nNext steps:\n  \
             agent-hub pending\n  agent-hub ack <msg-id> --note \"...\"",
            lines.join("\n")
        ),
    }
    .render(mode);
    Ok(())
}
