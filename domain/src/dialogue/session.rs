//! Dialogue session entity.
//!
//! A [`DialogueSession`] is created when a dialogue surface first appears,
//! mutated only to resolve the chosen option (set-once), and logged twice:
//! once on start, once — with any resolved choice — on termination.

use crate::world::{NpcInfo, WorldPoint};
use serde::{Deserialize, Serialize};

/// Chosen-option sentinel: the dialogue was continued without a real choice.
pub const CONTINUE_SENTINEL: i32 = -1;

/// One active dialogue interaction, from first detection to closure.
///
/// All fields except the chosen option are fixed at creation time.
/// `dialogue_option_chosen` is set-once: the first resolution wins and
/// later inputs are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueSession {
    pub actor_name: Option<String>,
    #[serde(rename = "actorID")]
    pub actor_id: Option<i32>,
    pub last_interacted_name: Option<String>,
    #[serde(rename = "lastInteractedID")]
    pub last_interacted_id: Option<i32>,
    pub last_interacted_position: Option<WorldPoint>,
    pub player_position: WorldPoint,
    pub dialogue_text: String,
    pub dialogue_options: Option<Vec<String>>,
    dialogue_option_chosen: Option<i32>,
}

impl DialogueSession {
    pub fn new(
        actor_name: Option<String>,
        actor_id: Option<i32>,
        last_interacted: Option<&NpcInfo>,
        player_position: WorldPoint,
        dialogue_text: impl Into<String>,
        dialogue_options: Option<Vec<String>>,
    ) -> Self {
        Self {
            actor_name,
            actor_id,
            last_interacted_name: last_interacted.and_then(|npc| npc.name.clone()),
            last_interacted_id: last_interacted.map(|npc| npc.id),
            last_interacted_position: last_interacted.map(|npc| npc.position),
            player_position,
            dialogue_text: dialogue_text.into(),
            dialogue_options,
            dialogue_option_chosen: None,
        }
    }

    pub fn option_chosen(&self) -> Option<i32> {
        self.dialogue_option_chosen
    }

    /// Number of options on screen; zero when this is not an options surface.
    pub fn option_count(&self) -> usize {
        self.dialogue_options.as_ref().map_or(0, Vec::len)
    }

    /// Resolve the chosen option. First write wins; returns whether the
    /// value was applied.
    pub fn resolve_option(&mut self, choice: i32) -> bool {
        if self.dialogue_option_chosen.is_some() {
            return false;
        }
        self.dialogue_option_chosen = Some(choice);
        true
    }
}
