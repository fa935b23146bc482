//! Inventory change tracker.

use crate::events::ContainerUpdate;
use crate::ports::EventLog;
use actionlog_domain::RecordPayload;
use actionlog_domain::inventory::InventorySnapshot;
use std::sync::Arc;

/// Diff-and-emit tracker over one container's contents.
///
/// Reacts only to the configured container id; updates for every other
/// container are ignored without comparison. Emitted records carry both
/// full snapshots — ids and quantities — never per-slot deltas.
pub struct InventoryTracker {
    log: Arc<dyn EventLog>,
    container_id: i32,
    snapshot: InventorySnapshot,
}

impl InventoryTracker {
    pub fn new(log: Arc<dyn EventLog>, container_id: i32) -> Self {
        Self {
            log,
            container_id,
            snapshot: InventorySnapshot::empty(),
        }
    }

    pub fn on_container_update(&mut self, update: &ContainerUpdate) {
        if update.container_id != self.container_id {
            return;
        }

        let new = InventorySnapshot::from_stacks(&update.items);
        if let Some(change) = self.snapshot.diff(&new) {
            self.log.write(RecordPayload::InventoryChanged(change));
            self.snapshot = new;
        }
    }
}
