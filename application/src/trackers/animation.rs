//! Player animation tracker.

use crate::events::{AnimationChange, MenuClick};
use crate::ports::{EventLog, GameView};
use actionlog_domain::RecordPayload;
use actionlog_domain::animation::{InteractionContext, PlayerAnimationChange};
use std::sync::Arc;
use tracing::debug;

/// Diff-and-emit tracker over the local player's animation pair.
///
/// Menu clicks update a rolling interaction context so each animation
/// record carries the click that likely caused it.
pub struct AnimationTracker {
    log: Arc<dyn EventLog>,
    interaction: InteractionContext,
    old_animation: i32,
    old_pose_animation: i32,
}

impl AnimationTracker {
    pub fn new(log: Arc<dyn EventLog>) -> Self {
        Self {
            log,
            interaction: InteractionContext::default(),
            old_animation: -1,
            old_pose_animation: -1,
        }
    }

    pub fn on_menu_click(&mut self, click: &MenuClick) {
        self.interaction.id = click.clicked_id;
        self.interaction.menu_option = click.option.clone();
        self.interaction.menu_target = click.target.clone();
        // Clicks without a tile under them keep the previous position.
        if let Some(tile) = click.selected_tile {
            self.interaction.position = Some(tile);
        }
    }

    pub fn on_animation_change(&mut self, change: &AnimationChange, view: &dyn GameView) {
        if !change.actor_is_local_player {
            return;
        }
        let Some(player) = view.local_player() else {
            debug!("no local player; skipping animation update");
            return;
        };

        if player.animation == self.old_animation
            && player.pose_animation == self.old_pose_animation
        {
            return;
        }

        self.log
            .write(RecordPayload::AnimationPlayerChanged(PlayerAnimationChange {
                animation: player.animation,
                pose_animation: player.pose_animation,
                old_animation: self.old_animation,
                old_pose_animation: self.old_pose_animation,
                player_position: player.position,
                interaction_id: self.interaction.id,
                interaction_menu_option: self.interaction.menu_option.clone(),
                interaction_menu_target: self.interaction.menu_target.clone(),
                interaction_position: self.interaction.position,
            }));
        self.old_animation = player.animation;
        self.old_pose_animation = player.pose_animation;
    }
}
