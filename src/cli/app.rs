//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use agent_hub::config::HubConfig;
use agent_hub::output::OutputMode;

/// agent-hub - Message feed with acknowledgment and presence tracking
#[derive(Parser, Debug)]
#[command(
    name = "agent-hub",
    version,
    about = "Message feed with acknowledgment and presence tracking",
    long_about = "Track messages exchanged between agent sessions and their operators.\n\n\
                  Messages that require an acknowledgment stay pending until someone acks them.\n\
                  Presence is derived from each participant's most recent activity."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of the discovered one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a hub in the current directory
    Init {
        /// Force re-initialization (overwrites existing data)
        #[arg(short, long)]
        force: bool,

        /// Start with an empty feed instead of the demo data
        #[arg(long)]
        empty: bool,
    },

    /// Show the message feed, newest first
    Messages {
        /// Only messages sent or received by this participant
        #[arg(short, long)]
        agent: Option<String>,

        /// Only messages with this topic
        #[arg(short, long)]
        topic: Option<String>,

        /// Only messages with this priority: LOW, MEDIUM, HIGH, CRITICAL
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// Show messages waiting for acknowledgment
    Pending,

    /// Show one message in full
    Show {
        /// Message ID
        id: String,
    },

    /// Acknowledge a message
    Ack {
        /// Message ID to acknowledge
        id: String,

        /// Acknowledging participant (defaults to the configured agent)
        #[arg(short, long)]
        by: Option<String>,

        /// Note to record with the acknowledgment
        #[arg(short, long)]
        note: Option<String>,

        /// Status: RECEIVED, ACK, REJECTED, PENDING
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Show presence of every registered participant
    Agents {
        /// Compute presence as of this RFC 3339 instant instead of now
        #[arg(long, value_name = "TIME")]
        now: Option<String>,
    },

    /// List distinct topics in the feed
    Topics,

    /// Show a summary of the hub
    Status,

    /// Serve the hub over HTTP
    #[cfg(feature = "serve")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 7878)]
        port: u16,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.as_deref();
    let load = || HubConfig::load(config_path);

    match cli.command {
        Some(Command::Init { force, empty }) => {
            commands::init(config_path, force, empty, output_mode)
        },
        Some(Command::Messages {
            agent,
            topic,
            priority,
        }) => commands::messages(&load()?, agent, topic, priority, output_mode),
        Some(Command::Pending) => commands::pending(&load()?, output_mode),
        Some(Command::Show { id }) => commands::show(&load()?, &id, output_mode),
        Some(Command::Ack {
            id,
            by,
            note,
            status,
        }) => commands::ack(&load()?, &id, by, note, status, output_mode),
        Some(Command::Agents { now }) => commands::agents(&load()?, now.as_deref(), output_mode),
        Some(Command::Topics) => commands::topics(&load()?, output_mode),
        Some(Command::Status) | None => commands::status(&load()?, output_mode),
        #[cfg(feature = "serve")]
        Some(Command::Serve { port }) => commands::serve(&load()?, port),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("agent-hub v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
    }
}
