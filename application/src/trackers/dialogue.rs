//! Dialogue session tracker.
//!
//! Collapses per-tick UI surface snapshots plus discrete input events into
//! `DIALOGUE_STARTED` / `DIALOGUE_ENDED` records. At most one session is
//! active at a time; the tick pass always runs the termination check
//! before considering a new session, so a surface swap produces an ended
//! record followed by a started record on the same tick.

use crate::events::{InteractionChange, InteractionTarget, MenuAction, MenuClick};
use crate::ports::{EventLog, GameView, components};
use actionlog_domain::dialogue::{DialogueKey, DialogueSession, choice_for_key};
use actionlog_domain::world::{NpcInfo, WidgetId};
use actionlog_domain::RecordPayload;
use std::sync::Arc;
use tracing::debug;

/// A session in progress, pinned to the widget it was detected on.
struct ActiveSession {
    widget: WidgetId,
    session: DialogueSession,
}

/// Tracks dialogue sessions across ticks and inputs.
pub struct DialogueTracker {
    log: Arc<dyn EventLog>,
    active: Option<ActiveSession>,
    last_interacted: Option<NpcInfo>,
}

impl DialogueTracker {
    pub fn new(log: Arc<dyn EventLog>) -> Self {
        Self {
            log,
            active: None,
            last_interacted: None,
        }
    }

    /// Per-tick pass: termination check first, then new-session probing.
    pub fn on_game_tick(&mut self, view: &dyn GameView) {
        self.check_termination(view);

        if self.active.is_none() {
            self.try_begin(view);
        }
    }

    /// End the active session if its surface closed, its text changed, or
    /// its option labels changed while still open.
    fn check_termination(&mut self, view: &dyn GameView) {
        let Some(active) = &self.active else {
            return;
        };

        let ended = match view.widget(active.widget) {
            // The surface closed, so the dialogue ended.
            None => true,
            Some(widget) => {
                if widget.text != active.session.dialogue_text {
                    // Same widget still open, but the body moved on to a
                    // new line.
                    true
                } else if let Some(labels) = widget.option_labels() {
                    // Order-sensitive: reordered labels count as changed.
                    active.session.dialogue_options.as_ref() != Some(&labels)
                } else {
                    false
                }
            }
        };

        if ended {
            self.end_session();
        }
    }

    /// Probe the three surfaces in priority order and start a session on
    /// the first hit.
    fn try_begin(&mut self, view: &dyn GameView) {
        if let Some(widget) = view.widget(components::DIALOG_NPC_TEXT) {
            let actor_name = view
                .widget(components::DIALOG_NPC_NAME)
                .map(|name_widget| name_widget.text);
            let actor_id = view
                .widget(components::DIALOG_NPC_HEAD_MODEL)
                .and_then(|model_widget| model_widget.model_id);

            self.begin(view, widget.id, actor_name, actor_id, widget.text, None);
        } else if let Some(widget) = view.widget(components::DIALOG_PLAYER_TEXT) {
            let actor_name = view.local_player().and_then(|player| player.name);

            self.begin(view, widget.id, actor_name, None, widget.text, None);
        } else if let Some(widget) = view.widget(components::DIALOG_OPTION_OPTIONS) {
            let Some(labels) = widget.option_labels() else {
                debug!("options surface without children");
                return;
            };
            let actor_name = view.local_player().and_then(|player| player.name);

            self.begin(
                view,
                widget.id,
                actor_name,
                None,
                widget.text,
                Some(labels),
            );
        }
    }

    fn begin(
        &mut self,
        view: &dyn GameView,
        widget: WidgetId,
        actor_name: Option<String>,
        actor_id: Option<i32>,
        text: String,
        options: Option<Vec<String>>,
    ) {
        // Player state can be transiently absent across ticks; skip this
        // tick rather than start a session with no position.
        let Some(player) = view.local_player() else {
            debug!("no local player; not starting dialogue session");
            return;
        };

        let session = DialogueSession::new(
            actor_name,
            actor_id,
            self.last_interacted.as_ref(),
            player.position,
            text,
            options,
        );
        self.log
            .write(RecordPayload::DialogueStarted(session.clone()));
        self.active = Some(ActiveSession { widget, session });
    }

    fn end_session(&mut self) {
        if let Some(active) = self.active.take() {
            self.log.write(RecordPayload::DialogueEnded(active.session));
        }
    }

    /// Resolve the choice from a raw key press. Set-once.
    pub fn on_key_press(&mut self, key: DialogueKey) {
        if let Some(active) = &mut self.active {
            if let Some(choice) = choice_for_key(key, active.session.option_count()) {
                active.session.resolve_option(choice);
            }
        }
    }

    /// Resolve the choice from a continuation click. Set-once.
    pub fn on_menu_click(&mut self, click: &MenuClick) {
        if click.action != MenuAction::WidgetContinue {
            return;
        }
        if let Some(active) = &mut self.active {
            active.session.resolve_option(click.index);
        }
    }

    /// Rolling last-interacted NPC, read at session start. Persists across
    /// sessions.
    pub fn on_interaction_change(&mut self, change: &InteractionChange) {
        if !change.source_is_local_player {
            return;
        }
        match &change.target {
            Some(InteractionTarget::Npc(npc)) => self.last_interacted = Some(npc.clone()),
            Some(InteractionTarget::Other { name }) => {
                debug!(?name, "interaction target is not an NPC");
            }
            None => {}
        }
    }

    /// Whether a session is currently active.
    pub fn has_active_session(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeGame, RecordingLog};
    use actionlog_domain::dialogue::CONTINUE_SENTINEL;
    use actionlog_domain::world::{WidgetSnapshot, WorldPoint};

    fn npc_text_widget(text: &str) -> WidgetSnapshot {
        WidgetSnapshot::new(components::DIALOG_NPC_TEXT, text)
    }

    fn options_widget(labels: &[&str]) -> WidgetSnapshot {
        WidgetSnapshot::new(components::DIALOG_OPTION_OPTIONS, "Select an option")
            .with_children(labels.iter().map(|s| s.to_string()).collect())
    }

    fn setup() -> (Arc<RecordingLog>, DialogueTracker, FakeGame) {
        let log = Arc::new(RecordingLog::new());
        let tracker = DialogueTracker::new(log.clone());
        let game = FakeGame::new().with_player(WorldPoint::new(3222, 3218, 0));
        (log, tracker, game)
    }

    #[test]
    fn npc_speech_starts_session_with_actor_attribution() {
        let (log, mut tracker, mut game) = setup();
        game.set_widget(npc_text_widget("Hello, adventurer."));
        game.set_widget(WidgetSnapshot::new(components::DIALOG_NPC_NAME, "Hans"));
        game.set_widget(
            WidgetSnapshot::new(components::DIALOG_NPC_HEAD_MODEL, "").with_model_id(3105),
        );

        tracker.on_game_tick(&game);

        let records = log.records();
        assert_eq!(records.len(), 1);
        let RecordPayload::DialogueStarted(session) = &records[0] else {
            panic!("expected DialogueStarted, got {:?}", records[0]);
        };
        assert_eq!(session.actor_name.as_deref(), Some("Hans"));
        assert_eq!(session.actor_id, Some(3105));
        assert_eq!(session.dialogue_text, "Hello, adventurer.");
        assert_eq!(session.dialogue_options, None);
        assert!(tracker.has_active_session());
    }

    #[test]
    fn stable_surface_does_not_end_session() {
        let (log, mut tracker, mut game) = setup();
        game.set_widget(npc_text_widget("Hello."));

        tracker.on_game_tick(&game);
        tracker.on_game_tick(&game);
        tracker.on_game_tick(&game);

        // Only the single started record.
        assert_eq!(log.len(), 1);
        assert!(tracker.has_active_session());
    }

    #[test]
    fn closed_surface_ends_session() {
        let (log, mut tracker, mut game) = setup();
        game.set_widget(npc_text_widget("Hello."));
        tracker.on_game_tick(&game);

        game.remove_widget(components::DIALOG_NPC_TEXT);
        tracker.on_game_tick(&game);

        let records = log.records();
        assert_eq!(records.len(), 2);
        assert!(matches!(records[1], RecordPayload::DialogueEnded(_)));
        assert!(!tracker.has_active_session());
    }

    #[test]
    fn changed_text_ends_and_restarts_in_one_tick() {
        let (log, mut tracker, mut game) = setup();
        game.set_widget(npc_text_widget("First line."));
        tracker.on_game_tick(&game);

        game.set_widget(npc_text_widget("Second line."));
        tracker.on_game_tick(&game);

        let records = log.records();
        assert_eq!(records.len(), 3);
        assert!(matches!(records[1], RecordPayload::DialogueEnded(_)));
        let RecordPayload::DialogueStarted(session) = &records[2] else {
            panic!("expected DialogueStarted, got {:?}", records[2]);
        };
        assert_eq!(session.dialogue_text, "Second line.");
    }

    #[test]
    fn changed_options_end_session_before_new_session_logic() {
        let (log, mut tracker, mut game) = setup();
        game.set_widget(options_widget(&["Yes", "No"]));
        tracker.on_game_tick(&game);

        game.set_widget(options_widget(&["Yes", "No", "Maybe"]));
        tracker.on_game_tick(&game);

        let records = log.records();
        assert_eq!(records.len(), 3);
        let RecordPayload::DialogueEnded(ended) = &records[1] else {
            panic!("expected DialogueEnded, got {:?}", records[1]);
        };
        assert_eq!(
            ended.dialogue_options,
            Some(vec!["Yes".to_string(), "No".to_string()])
        );
        let RecordPayload::DialogueStarted(started) = &records[2] else {
            panic!("expected DialogueStarted, got {:?}", records[2]);
        };
        assert_eq!(started.option_count(), 3);
    }

    #[test]
    fn reordered_options_count_as_changed() {
        let (log, mut tracker, mut game) = setup();
        game.set_widget(options_widget(&["Yes", "No"]));
        tracker.on_game_tick(&game);

        game.set_widget(options_widget(&["No", "Yes"]));
        tracker.on_game_tick(&game);

        assert!(matches!(log.records()[1], RecordPayload::DialogueEnded(_)));
    }

    #[test]
    fn surface_priority_is_npc_then_player_then_options() {
        let (log, mut tracker, mut game) = setup();
        game.set_widget(npc_text_widget("Npc line"));
        game.set_widget(WidgetSnapshot::new(
            components::DIALOG_PLAYER_TEXT,
            "Player line",
        ));
        game.set_widget(options_widget(&["Yes", "No"]));

        tracker.on_game_tick(&game);

        let RecordPayload::DialogueStarted(session) = &log.records()[0] else {
            panic!("expected DialogueStarted");
        };
        assert_eq!(session.dialogue_text, "Npc line");
    }

    #[test]
    fn missing_local_player_skips_session_start() {
        let (log, mut tracker, mut game) = setup();
        game.clear_player();
        game.set_widget(npc_text_widget("Hello."));

        tracker.on_game_tick(&game);

        assert_eq!(log.len(), 0);
        assert!(!tracker.has_active_session());
    }

    #[test]
    fn digit_key_resolves_option_set_once() {
        let (log, mut tracker, mut game) = setup();
        game.set_widget(options_widget(&["Yes", "No"]));
        tracker.on_game_tick(&game);

        tracker.on_key_press(DialogueKey::Digit(2));
        tracker.on_key_press(DialogueKey::Digit(1));

        game.remove_widget(components::DIALOG_OPTION_OPTIONS);
        tracker.on_game_tick(&game);

        let RecordPayload::DialogueEnded(session) = &log.records()[1] else {
            panic!("expected DialogueEnded");
        };
        assert_eq!(session.option_chosen(), Some(2));
    }

    #[test]
    fn digit_beyond_option_count_is_ignored() {
        let (log, mut tracker, mut game) = setup();
        game.set_widget(options_widget(&["Yes", "No"]));
        tracker.on_game_tick(&game);

        tracker.on_key_press(DialogueKey::Digit(3));

        game.remove_widget(components::DIALOG_OPTION_OPTIONS);
        tracker.on_game_tick(&game);

        let RecordPayload::DialogueEnded(session) = &log.records()[1] else {
            panic!("expected DialogueEnded");
        };
        assert_eq!(session.option_chosen(), None);
    }

    #[test]
    fn continue_key_resolves_sentinel_on_plain_speech() {
        let (log, mut tracker, mut game) = setup();
        game.set_widget(npc_text_widget("Hello."));
        tracker.on_game_tick(&game);

        tracker.on_key_press(DialogueKey::Continue);

        game.remove_widget(components::DIALOG_NPC_TEXT);
        tracker.on_game_tick(&game);

        let RecordPayload::DialogueEnded(session) = &log.records()[1] else {
            panic!("expected DialogueEnded");
        };
        assert_eq!(session.option_chosen(), Some(CONTINUE_SENTINEL));
    }

    #[test]
    fn continuation_click_resolves_host_index() {
        let (log, mut tracker, mut game) = setup();
        game.set_widget(options_widget(&["Yes", "No"]));
        tracker.on_game_tick(&game);

        tracker.on_menu_click(&MenuClick {
            action: MenuAction::WidgetContinue,
            index: 1,
            clicked_id: 0,
            option: None,
            target: None,
            selected_tile: None,
        });
        // A later key press must not overwrite the click.
        tracker.on_key_press(DialogueKey::Digit(2));

        game.remove_widget(components::DIALOG_OPTION_OPTIONS);
        tracker.on_game_tick(&game);

        let RecordPayload::DialogueEnded(session) = &log.records()[1] else {
            panic!("expected DialogueEnded");
        };
        assert_eq!(session.option_chosen(), Some(1));
    }

    #[test]
    fn interaction_target_is_attached_to_new_sessions() {
        let (log, mut tracker, mut game) = setup();
        tracker.on_interaction_change(&InteractionChange {
            source_is_local_player: true,
            target: Some(InteractionTarget::Npc(NpcInfo {
                name: Some("Hans".to_string()),
                id: 3105,
                position: WorldPoint::new(3221, 3218, 0),
            })),
        });

        game.set_widget(npc_text_widget("Hello."));
        tracker.on_game_tick(&game);

        let RecordPayload::DialogueStarted(session) = &log.records()[0] else {
            panic!("expected DialogueStarted");
        };
        assert_eq!(session.last_interacted_name.as_deref(), Some("Hans"));
        assert_eq!(session.last_interacted_id, Some(3105));
    }

    #[test]
    fn non_local_interaction_changes_are_ignored() {
        let (log, mut tracker, mut game) = setup();
        tracker.on_interaction_change(&InteractionChange {
            source_is_local_player: false,
            target: Some(InteractionTarget::Npc(NpcInfo {
                name: Some("Hans".to_string()),
                id: 3105,
                position: WorldPoint::new(3221, 3218, 0),
            })),
        });

        game.set_widget(npc_text_widget("Hello."));
        tracker.on_game_tick(&game);

        let RecordPayload::DialogueStarted(session) = &log.records()[0] else {
            panic!("expected DialogueStarted");
        };
        assert_eq!(session.last_interacted_name, None);
    }

    #[test]
    fn last_interacted_persists_across_sessions() {
        let (log, mut tracker, mut game) = setup();
        tracker.on_interaction_change(&InteractionChange {
            source_is_local_player: true,
            target: Some(InteractionTarget::Npc(NpcInfo {
                name: Some("Hans".to_string()),
                id: 3105,
                position: WorldPoint::new(3221, 3218, 0),
            })),
        });

        game.set_widget(npc_text_widget("First."));
        tracker.on_game_tick(&game);
        game.remove_widget(components::DIALOG_NPC_TEXT);
        tracker.on_game_tick(&game);

        game.set_widget(npc_text_widget("Second."));
        tracker.on_game_tick(&game);

        let RecordPayload::DialogueStarted(session) = &log.records()[2] else {
            panic!("expected DialogueStarted");
        };
        assert_eq!(session.last_interacted_id, Some(3105));
    }
}
