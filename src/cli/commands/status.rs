//! Status command - one-screen summary of the hub

use chrono::Utc;

use agent_hub::config::HubConfig;
use agent_hub::core::models::Presence;
use agent_hub::output::OutputMode;

use super::open_hub;

/// Show data location, counts, pending acks and active participants
pub fn status(config: &HubConfig, mode: OutputMode) -> anyhow::Result<()> {
    let (hub, source) = open_hub(config)?;
    let pending = hub.pending_acks().len();
    let presence = hub.agent_presence_list(Utc::now());
    let active = presence
        .iter()
        .filter(|p| p.presence == Presence::Active)
        .count();

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "version": env!("CARGO_PKG_VERSION"),
                "data_dir": source.dir(),
                "initialized": source.exists(),
                "messages": hub.store().len(),
                "acks": hub.ledger().len(),
                "pending": pending,
                "active": active,
                "participants": presence.len(),
            })
        );
        return Ok(());
    }

    println!("agent-hub v{}", env!("CARGO_PKG_VERSION"));
    if !source.exists() {
        println!("\nNo hub data in {}", source.dir().display());
        println!("Run 'agent-hub init' to get started");
        return Ok(());
    }
    println!(
        "\nData: {} ({} messages, {} acks)",
        source.dir().display(),
        hub.store().len(),
        hub.ledger().len()
    );
    println!("Pending acknowledgments: {pending}");
    println!("Active participants: {active} of {}", presence.len());
    if pending > 0 {
        println!("\nRun 'agent-hub pending' to see what is waiting");
    }
    Ok(())
}
