//! Configuration management
//!
//! Config is TOML. Lookup order: an explicit path, then `./.agent-hub.toml`,
//! then the global file (see [`paths::global_config`]), then defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::adapters::JsonFileSource;
use crate::core::error::ValidationError;
use crate::core::models::{Participant, ParticipantRegistry};
use crate::core::services::{DEFAULT_ACTIVITY_WINDOW_HOURS, Hub};
use crate::paths;

/// Top-level agent-hub configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    /// Storage and identity settings
    #[serde(default)]
    pub hub: HubSettings,
    /// Presence computation settings
    #[serde(default)]
    pub presence: PresenceSettings,
    /// Participant registry (empty = built-in registry)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<Participant>,
}

/// Storage and identity settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubSettings {
    /// Directory holding `messages.json` and `acks.jsonl`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Participant recorded as acknowledger when none is given
    #[serde(default = "default_agent")]
    pub default_agent: String,
    /// Note recorded when none is given
    #[serde(default = "default_note")]
    pub default_note: String,
}

fn default_data_dir() -> PathBuf {
    paths::default_data_dir()
}

fn default_agent() -> String {
    "ld-design".to_string()
}

fn default_note() -> String {
    "Acknowledged from cockpit UI".to_string()
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_agent: default_agent(),
            default_note: default_note(),
        }
    }
}

/// Presence computation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceSettings {
    /// Hours within which activity counts as present
    #[serde(default = "default_window_hours")]
    pub activity_window_hours: i64,
}

const fn default_window_hours() -> i64 {
    DEFAULT_ACTIVITY_WINDOW_HOURS
}

impl Default for PresenceSettings {
    fn default() -> Self {
        Self {
            activity_window_hours: default_window_hours(),
        }
    }
}

impl HubConfig {
    /// Load config following the lookup order
    ///
    /// An explicit path must exist; discovered files are optional.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::discover() {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// First existing config file, project before global
    #[must_use]
    pub fn discover() -> Option<PathBuf> {
        [paths::project_config(), paths::global_config()]
            .into_iter()
            .find(|p| p.is_file())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// The configured activity window
    ///
    /// Fails when the hour count is not positive or does not fit a duration.
    pub fn activity_window(&self) -> Result<TimeDelta, ValidationError> {
        let hours = self.presence.activity_window_hours;
        if hours <= 0 {
            return Err(ValidationError::invalid("activity_window_hours", hours.to_string()));
        }
        TimeDelta::try_hours(hours)
            .ok_or_else(|| ValidationError::invalid("activity_window_hours", hours.to_string()))
    }

    /// The participant registry, built-in when none is configured
    #[must_use]
    pub fn registry(&self) -> ParticipantRegistry {
        if self.participants.is_empty() {
            ParticipantRegistry::default()
        } else {
            ParticipantRegistry::new(self.participants.clone())
        }
    }

    /// File source over the configured data directory
    #[must_use]
    pub fn source(&self) -> JsonFileSource {
        JsonFileSource::new(&self.hub.data_dir)
    }

    /// An empty hub configured with this registry and window
    pub fn hub(&self) -> Result<Hub, ValidationError> {
        Ok(Hub::new(self.registry(), self.activity_window()?))
    }
}
