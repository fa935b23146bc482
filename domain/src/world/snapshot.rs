//! One-shot world snapshot types and the dump category selector.
//!
//! A [`WorldSnapshot`] is the payload of a `DUMP` record: a single
//! structured capture of scene contents and the widget tree, filtered by a
//! [`DumpSelector`]. Unselected categories serialize as absent fields so a
//! partial dump stays distinguishable from an empty scene.

use crate::core::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A category of world state that a dump can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DumpCategory {
    GroundItems,
    Objects,
    Npcs,
    Widgets,
}

impl DumpCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DumpCategory::GroundItems => "grounditems",
            DumpCategory::Objects => "objects",
            DumpCategory::Npcs => "npcs",
            DumpCategory::Widgets => "widgets",
        }
    }
}

impl std::str::FromStr for DumpCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grounditems" => Ok(DumpCategory::GroundItems),
            "objects" => Ok(DumpCategory::Objects),
            "npcs" => Ok(DumpCategory::Npcs),
            "widgets" => Ok(DumpCategory::Widgets),
            _ => Err(DomainError::UnknownDumpCategory(s.to_string())),
        }
    }
}

/// Selection of dump categories. Defaults to everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSelector {
    categories: BTreeSet<DumpCategory>,
}

impl DumpSelector {
    /// Select every category.
    pub fn all() -> Self {
        Self {
            categories: BTreeSet::from([
                DumpCategory::GroundItems,
                DumpCategory::Objects,
                DumpCategory::Npcs,
                DumpCategory::Widgets,
            ]),
        }
    }

    /// Parse a selector from category name arguments.
    ///
    /// An empty argument list selects everything; any unknown name fails
    /// the whole parse.
    pub fn from_args<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<Self, DomainError> {
        let mut categories = BTreeSet::new();
        for arg in args {
            categories.insert(arg.parse::<DumpCategory>()?);
        }
        if categories.is_empty() {
            return Ok(Self::all());
        }
        Ok(Self { categories })
    }

    pub fn includes(&self, category: DumpCategory) -> bool {
        self.categories.contains(&category)
    }
}

impl Default for DumpSelector {
    fn default() -> Self {
        Self::all()
    }
}

/// Scene base coordinates and instancing flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneInfo {
    pub base_x: i32,
    pub base_y: i32,
    pub is_instance: bool,
}

/// An item lying on the ground, in scene coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundItem {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub id: i32,
    pub name: String,
    pub quantity: i32,
}

/// A placed object, in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneObject {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub id: i32,
}

/// An NPC present in the scene, in scene coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneNpc {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub id: i32,
    pub name: Option<String>,
}

/// Pixel bounds of a widget on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Recursive snapshot of one widget and its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetData {
    pub id: i32,
    pub widget_type: i32,
    pub content_type: i32,
    pub parent_id: i32,
    pub text: String,
    pub name: String,
    #[serde(rename = "itemID")]
    pub item_id: i32,
    #[serde(rename = "modelID")]
    pub model_id: i32,
    #[serde(rename = "spriteID")]
    pub sprite_id: i32,
    pub bounds: Option<WidgetBounds>,
    pub hidden: bool,
    pub children: Vec<WidgetData>,
}

/// Everything the host can report about the current scene, pre-collected
/// by the host adapter. The dump use case filters this through a
/// [`DumpSelector`] into a [`WorldSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneContents {
    pub info: SceneInfo,
    pub plane: i32,
    pub ground_items: Vec<GroundItem>,
    pub decorative_objects: Vec<SceneObject>,
    pub wall_objects: Vec<SceneObject>,
    pub game_objects: Vec<SceneObject>,
    pub ground_objects: Vec<SceneObject>,
    pub npcs: Vec<SceneNpc>,
}

/// Payload of a `DUMP` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSnapshot {
    pub scene: SceneInfo,
    pub world_view_plane: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_items: Option<Vec<GroundItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decorative_objects: Option<Vec<SceneObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall_objects: Option<Vec<SceneObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_objects: Option<Vec<SceneObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_objects: Option<Vec<SceneObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npcs: Option<Vec<SceneNpc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widgets: Option<Vec<WidgetData>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_defaults_to_all_categories() {
        let selector = DumpSelector::default();
        assert!(selector.includes(DumpCategory::GroundItems));
        assert!(selector.includes(DumpCategory::Objects));
        assert!(selector.includes(DumpCategory::Npcs));
        assert!(selector.includes(DumpCategory::Widgets));
    }

    #[test]
    fn selector_from_empty_args_is_all() {
        assert_eq!(DumpSelector::from_args([]).unwrap(), DumpSelector::all());
    }

    #[test]
    fn selector_from_args_narrows() {
        let selector = DumpSelector::from_args(["npcs", "WIDGETS"]).unwrap();
        assert!(selector.includes(DumpCategory::Npcs));
        assert!(selector.includes(DumpCategory::Widgets));
        assert!(!selector.includes(DumpCategory::GroundItems));
        assert!(!selector.includes(DumpCategory::Objects));
    }

    #[test]
    fn selector_rejects_unknown_category() {
        let err = DumpSelector::from_args(["npcs", "tiles"]).unwrap_err();
        assert!(matches!(err, DomainError::UnknownDumpCategory(name) if name == "tiles"));
    }

    #[test]
    fn unselected_snapshot_fields_are_absent() {
        let snapshot = WorldSnapshot {
            scene: SceneInfo {
                base_x: 3136,
                base_y: 3136,
                is_instance: false,
            },
            world_view_plane: 0,
            ground_items: None,
            decorative_objects: None,
            wall_objects: None,
            game_objects: None,
            ground_objects: None,
            npcs: Some(vec![]),
            widgets: None,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("groundItems").is_none());
        assert!(json.get("npcs").is_some());
        assert_eq!(json["scene"]["baseX"], 3136);
    }
}
