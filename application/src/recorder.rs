//! Recorder — wires host callbacks to the trackers.
//!
//! Pure composition: the host glue calls one method per native callback,
//! and the recorder fans it out to the interested trackers. Also the
//! control-surface entry point for one-shot dumps.

use crate::config::RecorderConfig;
use crate::dump;
use crate::events::{
    AnimationChange, ContainerUpdate, InteractionChange, MenuClick, VarUpdate,
};
use crate::ports::{EventLog, GameView, WorldView};
use crate::trackers::{AnimationTracker, DialogueTracker, InventoryTracker, VarTracker};
use actionlog_domain::RecordPayload;
use actionlog_domain::core::DomainError;
use actionlog_domain::dialogue::DialogueKey;
use actionlog_domain::world::DumpSelector;
use std::sync::Arc;

/// Owns the trackers and dispatches host events to them.
pub struct Recorder {
    dialogue: DialogueTracker,
    inventory: InventoryTracker,
    vars: VarTracker,
    animation: AnimationTracker,
    log: Arc<dyn EventLog>,
}

impl Recorder {
    pub fn new(log: Arc<dyn EventLog>, config: RecorderConfig) -> Self {
        Self {
            dialogue: DialogueTracker::new(log.clone()),
            inventory: InventoryTracker::new(log.clone(), config.tracked_container),
            vars: VarTracker::new(log.clone(), config.ignored_varbits, config.ignored_varps),
            animation: AnimationTracker::new(log.clone()),
            log,
        }
    }

    pub fn on_game_tick(&mut self, view: &dyn GameView) {
        self.dialogue.on_game_tick(view);
    }

    pub fn on_interaction_change(&mut self, change: &InteractionChange) {
        self.dialogue.on_interaction_change(change);
    }

    pub fn on_container_update(&mut self, update: &ContainerUpdate) {
        self.inventory.on_container_update(update);
    }

    pub fn on_var_update(&mut self, update: &VarUpdate) {
        self.vars.on_var_update(update);
    }

    pub fn on_animation_change(&mut self, change: &AnimationChange, view: &dyn GameView) {
        self.animation.on_animation_change(change, view);
    }

    pub fn on_menu_click(&mut self, click: &MenuClick) {
        self.animation.on_menu_click(click);
        self.dialogue.on_menu_click(click);
    }

    pub fn on_key_press(&mut self, key: DialogueKey) {
        self.dialogue.on_key_press(key);
    }

    /// Control surface: capture a one-shot world snapshot and record it.
    pub fn dump(&self, view: &dyn WorldView, selector: &DumpSelector) -> Result<(), DomainError> {
        let snapshot = dump::capture(view, selector)?;
        self.log.write(RecordPayload::Dump(Box::new(snapshot)));
        Ok(())
    }
}
