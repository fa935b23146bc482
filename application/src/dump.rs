//! One-shot world snapshot use case.
//!
//! Stateless: reads the current scene and widget tree through
//! [`WorldView`] and filters it by a [`DumpSelector`]. The caller writes
//! the result through the regular [`EventLog`](crate::ports::EventLog)
//! entry point as a `DUMP` record.

use crate::ports::WorldView;
use actionlog_domain::core::DomainError;
use actionlog_domain::world::{DumpCategory, DumpSelector, WorldSnapshot};

/// Capture a snapshot of the selected world state categories.
///
/// Fails with [`DomainError::MissingHostState`] when no scene is loaded;
/// everything else is best-effort over whatever the view reports.
pub fn capture(
    view: &dyn WorldView,
    selector: &DumpSelector,
) -> Result<WorldSnapshot, DomainError> {
    let contents = view
        .scene_contents()
        .ok_or(DomainError::MissingHostState("scene"))?;

    let objects = selector.includes(DumpCategory::Objects);

    Ok(WorldSnapshot {
        scene: contents.info,
        world_view_plane: contents.plane,
        ground_items: selector
            .includes(DumpCategory::GroundItems)
            .then_some(contents.ground_items),
        decorative_objects: objects.then_some(contents.decorative_objects),
        wall_objects: objects.then_some(contents.wall_objects),
        game_objects: objects.then_some(contents.game_objects),
        ground_objects: objects.then_some(contents.ground_objects),
        npcs: selector
            .includes(DumpCategory::Npcs)
            .then_some(contents.npcs),
        widgets: selector
            .includes(DumpCategory::Widgets)
            .then(|| view.widget_roots()),
    })
}
