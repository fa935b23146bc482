//! Recorder behavior configuration.

use crate::ports::containers;

/// Behavior knobs for the tracker layer.
///
/// Built from the infrastructure file configuration, or used as-is with
/// defaults when no config file is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Container id the inventory tracker reacts to.
    pub tracked_container: i32,
    /// Varbit ids that never produce records.
    pub ignored_varbits: Vec<i32>,
    /// Varp ids that never produce records.
    pub ignored_varps: Vec<i32>,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            tracked_container: containers::PLAYER_INVENTORY,
            ignored_varbits: Vec::new(),
            ignored_varps: Vec::new(),
        }
    }
}
