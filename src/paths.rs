//! Centralized path definitions for agent-hub
//!
//! ## Storage Layout
//!
//! ### Per-Project (working directory)
//!
//! ```text
//! project/
//! ├── .agent-hub.toml          # Project config (registry, presence window)
//! └── .agent-hub/              # Default data directory
//!     ├── messages.json        # Message feed
//!     └── acks.jsonl           # Append-only acknowledgment ledger
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! <config_dir>/agent-hub/
//! └── config.toml              # Used when no project config exists
//! ```

use std::path::PathBuf;

// =============================================================================
// Project-level paths
// =============================================================================

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".agent-hub.toml";

/// Default data directory name
pub const DATA_DIR: &str = ".agent-hub";

/// Environment variable overriding the global config directory
pub const CONFIG_DIR_ENV: &str = "AGENT_HUB_CONFIG_DIR";

/// Get path to the project config file in the working directory.
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG)
}

/// Get the default data directory in the working directory.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(DATA_DIR)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = "agent-hub";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global agent-hub directory.
///
/// Returns `$AGENT_HUB_CONFIG_DIR` when set, otherwise
/// `<config_dir>/agent-hub/` (e.g. `~/.config/agent-hub/` on Linux).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(GLOBAL_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
