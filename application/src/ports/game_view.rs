//! Read-only host query ports.
//!
//! The host client exposes its state strictly as pull-style queries; these
//! traits are the seams the host glue implements. Trackers only ever read
//! through them — all mutation stays inside the trackers themselves.

use actionlog_domain::world::{
    PlayerSnapshot, SceneContents, WidgetData, WidgetId, WidgetSnapshot,
};

/// Source of the host's discrete simulation step counter, used as the
/// logical clock on every record.
pub trait TickSource: Send + Sync {
    fn tick_count(&self) -> i32;
}

/// Per-tick query surface of the host client.
pub trait GameView: TickSource {
    /// Current snapshot of a widget, `None` when it is not present.
    fn widget(&self, id: WidgetId) -> Option<WidgetSnapshot>;

    /// Current snapshot of the local player, `None` while not available
    /// (loading screens, login).
    fn local_player(&self) -> Option<PlayerSnapshot>;
}

/// Extended query surface for the one-shot world dump.
pub trait WorldView: GameView {
    /// Pre-collected contents of the current scene, `None` when no scene
    /// is loaded.
    fn scene_contents(&self) -> Option<SceneContents>;

    /// Snapshots of all root widgets, with children.
    fn widget_roots(&self) -> Vec<WidgetData>;
}

/// Well-known widget ids of the dialogue surfaces.
///
/// Packed as `interface << 16 | child`, the host client's component id
/// scheme.
pub mod components {
    use actionlog_domain::world::WidgetId;

    /// NPC speech: body text.
    pub const DIALOG_NPC_TEXT: WidgetId = WidgetId((231 << 16) | 6);
    /// NPC speech: speaker name.
    pub const DIALOG_NPC_NAME: WidgetId = WidgetId((231 << 16) | 4);
    /// NPC speech: speaker head model.
    pub const DIALOG_NPC_HEAD_MODEL: WidgetId = WidgetId((231 << 16) | 2);
    /// Player speech: body text.
    pub const DIALOG_PLAYER_TEXT: WidgetId = WidgetId((217 << 16) | 6);
    /// Player options: option list container.
    pub const DIALOG_OPTION_OPTIONS: WidgetId = WidgetId((219 << 16) | 1);
}

/// Well-known container ids.
pub mod containers {
    /// The local player's main inventory.
    pub const PLAYER_INVENTORY: i32 = 93;
}
