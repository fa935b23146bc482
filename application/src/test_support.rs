//! Hand-rolled fakes shared by tracker tests.

use crate::ports::{EventLog, GameView, TickSource, WorldView};
use actionlog_domain::RecordPayload;
use actionlog_domain::world::{
    PlayerSnapshot, SceneContents, WidgetData, WidgetId, WidgetSnapshot, WorldPoint,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// EventLog fake that captures every payload for inspection.
#[derive(Default)]
pub struct RecordingLog {
    records: Mutex<Vec<RecordPayload>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<RecordPayload> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl EventLog for RecordingLog {
    fn write(&self, payload: RecordPayload) {
        self.records.lock().unwrap().push(payload);
    }
}

/// GameView fake backed by explicit widget and player state.
#[derive(Default)]
pub struct FakeGame {
    pub tick: i32,
    widgets: HashMap<WidgetId, WidgetSnapshot>,
    player: Option<PlayerSnapshot>,
    scene: Option<SceneContents>,
    widget_roots: Vec<WidgetData>,
}

impl FakeGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, position: WorldPoint) -> Self {
        self.player = Some(PlayerSnapshot {
            name: Some("Player".to_string()),
            position,
            animation: -1,
            pose_animation: 808,
        });
        self
    }

    pub fn set_widget(&mut self, widget: WidgetSnapshot) {
        self.widgets.insert(widget.id, widget);
    }

    pub fn remove_widget(&mut self, id: WidgetId) {
        self.widgets.remove(&id);
    }

    pub fn set_player_animation(&mut self, animation: i32, pose_animation: i32) {
        if let Some(player) = self.player.as_mut() {
            player.animation = animation;
            player.pose_animation = pose_animation;
        }
    }

    pub fn clear_player(&mut self) {
        self.player = None;
    }

    pub fn set_scene(&mut self, scene: SceneContents) {
        self.scene = Some(scene);
    }

    pub fn set_widget_roots(&mut self, roots: Vec<WidgetData>) {
        self.widget_roots = roots;
    }
}

impl TickSource for FakeGame {
    fn tick_count(&self) -> i32 {
        self.tick
    }
}

impl GameView for FakeGame {
    fn widget(&self, id: WidgetId) -> Option<WidgetSnapshot> {
        self.widgets.get(&id).cloned()
    }

    fn local_player(&self) -> Option<PlayerSnapshot> {
        self.player.clone()
    }
}

impl WorldView for FakeGame {
    fn scene_contents(&self) -> Option<SceneContents> {
        self.scene.clone()
    }

    fn widget_roots(&self) -> Vec<WidgetData> {
        self.widget_roots.clone()
    }
}
