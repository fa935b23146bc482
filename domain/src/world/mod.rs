//! World value objects — positions, widgets, actors, items.
//!
//! These types mirror what the host client exposes through its query
//! surface. They carry no behavior beyond small accessors; trackers and
//! the dump use case consume them read-only.

mod snapshot;

pub use snapshot::{
    DumpCategory, DumpSelector, GroundItem, SceneContents, SceneInfo, SceneNpc, SceneObject,
    WidgetBounds, WidgetData, WorldSnapshot,
};

use serde::{Deserialize, Serialize};

/// A position in the game world (tile coordinates plus plane).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl WorldPoint {
    pub fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }
}

/// Identifier of a UI widget, as assigned by the host client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(pub i32);

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point-in-time view of a single UI widget.
///
/// `children` is `None` when the widget exposes no child list at all,
/// as opposed to `Some(vec![])` for an empty one — the dialogue tracker
/// only runs its option comparison when a child list is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSnapshot {
    pub id: WidgetId,
    pub text: String,
    pub children: Option<Vec<String>>,
    pub model_id: Option<i32>,
}

impl WidgetSnapshot {
    pub fn new(id: WidgetId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            children: None,
            model_id: None,
        }
    }

    pub fn with_children(mut self, children: Vec<String>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_model_id(mut self, model_id: i32) -> Self {
        self.model_id = Some(model_id);
        self
    }

    /// Non-blank child labels, in display order.
    ///
    /// Returns `None` when the widget has no child list.
    pub fn option_labels(&self) -> Option<Vec<String>> {
        self.children.as_ref().map(|children| {
            children
                .iter()
                .filter(|label| !label.trim().is_empty())
                .cloned()
                .collect()
        })
    }
}

/// Point-in-time view of the local player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub name: Option<String>,
    pub position: WorldPoint,
    pub animation: i32,
    pub pose_animation: i32,
}

/// An NPC the player interacted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcInfo {
    pub name: Option<String>,
    pub id: i32,
    pub position: WorldPoint,
}

/// One slot of a container: item id plus stack quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStack {
    pub id: i32,
    pub quantity: i32,
}

impl ItemStack {
    pub fn new(id: i32, quantity: i32) -> Self {
        Self { id, quantity }
    }
}
