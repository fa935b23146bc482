//! Fixed-slot inventory snapshot and comparison.
//!
//! The tracked container always has [`INVENTORY_SLOTS`] slots; host
//! reports are normalized to that size before comparison so every emitted
//! record carries full fixed-size arrays for ids and quantities.

use crate::world::ItemStack;
use serde::{Deserialize, Serialize};

/// Number of slots in the tracked container.
pub const INVENTORY_SLOTS: usize = 28;

/// Item id marking an empty slot.
pub const EMPTY_SLOT_ID: i32 = -1;

/// Last-observed inventory contents: item ids and quantities per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySnapshot {
    ids: Vec<i32>,
    quantities: Vec<i32>,
}

impl InventorySnapshot {
    /// All slots empty.
    pub fn empty() -> Self {
        Self {
            ids: vec![EMPTY_SLOT_ID; INVENTORY_SLOTS],
            quantities: vec![0; INVENTORY_SLOTS],
        }
    }

    /// Normalize a host-reported stack list to exactly [`INVENTORY_SLOTS`]
    /// slots: missing trailing slots are empty, excess entries are dropped.
    pub fn from_stacks(stacks: &[ItemStack]) -> Self {
        let mut snapshot = Self::empty();
        for (slot, stack) in stacks.iter().take(INVENTORY_SLOTS).enumerate() {
            snapshot.ids[slot] = stack.id;
            snapshot.quantities[slot] = stack.quantity;
        }
        snapshot
    }

    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    pub fn quantities(&self) -> &[i32] {
        &self.quantities
    }

    /// Compare against a fresh snapshot, slot by slot and in order.
    ///
    /// Returns the full old/new change payload when ids or quantities
    /// differ anywhere, `None` when both are identical.
    pub fn diff(&self, new: &InventorySnapshot) -> Option<InventoryChange> {
        if self == new {
            return None;
        }
        Some(InventoryChange {
            old_inventory: self.ids.clone(),
            old_quantities: self.quantities.clone(),
            new_inventory: new.ids.clone(),
            new_quantities: new.quantities.clone(),
        })
    }
}

impl Default for InventorySnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Payload of an `INVENTORY_CHANGED` record: both full snapshots, never
/// per-slot deltas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryChange {
    pub old_inventory: Vec<i32>,
    pub old_quantities: Vec<i32>,
    pub new_inventory: Vec<i32>,
    pub new_quantities: Vec<i32>,
}
