//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the config file. They
//! are deserialized directly and converted into the application-layer
//! [`RecorderConfig`].

use actionlog_application::config::RecorderConfig;
use actionlog_application::ports::containers;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output log settings
    pub log: FileLogConfig,
    /// Tracker behavior settings
    pub trackers: FileTrackersConfig,
}

/// `[log]` section: where the JSONL files go.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Output directory. Defaults to `<data dir>/actionlog/logs`.
    pub directory: Option<PathBuf>,
}

impl FileLogConfig {
    /// Resolve the output directory, falling back to the platform data
    /// directory.
    pub fn resolve_directory(&self) -> PathBuf {
        if let Some(directory) = &self.directory {
            return directory.clone();
        }
        dirs::data_dir()
            .map(|d| d.join("actionlog").join("logs"))
            .unwrap_or_else(|| PathBuf::from("actionlog-logs"))
    }
}

/// `[trackers]` section: per-tracker behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTrackersConfig {
    /// Container id the inventory tracker reacts to.
    pub inventory_container: i32,
    /// Varbit ids that never produce records.
    pub ignored_varbits: Vec<i32>,
    /// Varp ids that never produce records.
    pub ignored_varps: Vec<i32>,
}

impl Default for FileTrackersConfig {
    fn default() -> Self {
        Self {
            inventory_container: containers::PLAYER_INVENTORY,
            ignored_varbits: Vec::new(),
            ignored_varps: Vec::new(),
        }
    }
}

impl FileTrackersConfig {
    pub fn to_recorder_config(&self) -> RecorderConfig {
        RecorderConfig {
            tracked_container: self.inventory_container,
            ignored_varbits: self.ignored_varbits.clone(),
            ignored_varps: self.ignored_varps.clone(),
        }
    }
}
