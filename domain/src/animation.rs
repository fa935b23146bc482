//! Player animation change payload and interaction context.

use crate::world::WorldPoint;
use serde::{Deserialize, Serialize};

/// The most recent menu interaction, attached to animation records so an
/// animation can be attributed to the click that likely caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionContext {
    pub id: i32,
    pub menu_option: Option<String>,
    pub menu_target: Option<String>,
    pub position: Option<WorldPoint>,
}

impl Default for InteractionContext {
    fn default() -> Self {
        Self {
            id: -1,
            menu_option: None,
            menu_target: None,
            position: None,
        }
    }
}

/// Payload of an `ANIMATION_PLAYER_CHANGED` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAnimationChange {
    pub animation: i32,
    pub pose_animation: i32,
    pub old_animation: i32,
    pub old_pose_animation: i32,
    pub player_position: WorldPoint,
    pub interaction_id: i32,
    pub interaction_menu_option: Option<String>,
    pub interaction_menu_target: Option<String>,
    pub interaction_position: Option<WorldPoint>,
}
