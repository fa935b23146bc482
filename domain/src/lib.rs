//! Domain layer for actionlog
//!
//! This crate contains the core entities and pure logic of the action
//! recorder. It has no dependencies on infrastructure or host concerns.
//!
//! # Core Concepts
//!
//! ## Records
//!
//! Every semantic event becomes one [`LogRecord`]: a `{tick, ts, type,
//! data}` envelope around a [`RecordPayload`], the closed union of record
//! shapes. One record serializes to one JSON line in the output file.
//!
//! ## Trackers
//!
//! The application layer hosts the stateful trackers; this crate provides
//! the state they operate on:
//!
//! - [`DialogueSession`] — one active dialogue interaction, with set-once
//!   option resolution.
//! - [`DiffMap`] — last-observed keyed values with an ignore set, the
//!   generic diff-and-emit state.
//! - [`InventorySnapshot`] — fixed-slot container contents compared as
//!   full ordered arrays.

pub mod animation;
pub mod core;
pub mod dialogue;
pub mod diff;
pub mod inventory;
pub mod record;
pub mod world;

// Re-export commonly used types
pub use animation::{InteractionContext, PlayerAnimationChange};
pub use core::DomainError;
pub use dialogue::{CONTINUE_SENTINEL, DialogueKey, DialogueSession, choice_for_key};
pub use diff::{DiffMap, ValueChange, VarChange};
pub use inventory::{EMPTY_SLOT_ID, INVENTORY_SLOTS, InventoryChange, InventorySnapshot};
pub use record::{LogRecord, RecordPayload};
pub use world::{
    DumpCategory, DumpSelector, GroundItem, ItemStack, NpcInfo, PlayerSnapshot, SceneContents,
    SceneInfo, SceneNpc, SceneObject, WidgetData, WidgetId, WidgetSnapshot, WorldPoint,
    WorldSnapshot,
};
