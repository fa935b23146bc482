//! Inbound host event DTOs.
//!
//! The host glue translates its native callbacks into these types and
//! delivers them to [`Recorder`](crate::recorder::Recorder) methods, all
//! on the host's single callback thread.

use actionlog_domain::world::{ItemStack, NpcInfo, WorldPoint};

/// A container's contents changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerUpdate {
    pub container_id: i32,
    /// Reported slots, in slot order. May be shorter than the container.
    pub items: Vec<ItemStack>,
}

/// Which variable namespace a [`VarUpdate`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarScope {
    /// Server-side bit-packed variable.
    Bit,
    /// Per-player variable.
    Player,
}

/// A tracked variable changed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarUpdate {
    pub scope: VarScope,
    pub id: i32,
    pub value: i32,
}

/// What an actor's interaction target changed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionTarget {
    Npc(NpcInfo),
    Other { name: Option<String> },
}

/// An actor's interaction target changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionChange {
    /// Whether the source of the change is the local player.
    pub source_is_local_player: bool,
    pub target: Option<InteractionTarget>,
}

/// Classified menu click action. Only continuation clicks are
/// distinguished; everything else is context for the animation tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Click on a dialogue continue/option widget.
    WidgetContinue,
    Other,
}

/// A menu entry was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuClick {
    pub action: MenuAction,
    /// Clicked option index for continuation clicks (1-indexed, host
    /// supplied).
    pub index: i32,
    /// Id of the clicked entity or widget.
    pub clicked_id: i32,
    pub option: Option<String>,
    pub target: Option<String>,
    /// World position of the selected scene tile, when one was under the
    /// click.
    pub selected_tile: Option<WorldPoint>,
}

/// An actor's animation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationChange {
    /// Whether the animating actor is the local player.
    pub actor_is_local_player: bool,
}
