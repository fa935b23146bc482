//! Variable change tracker.

use crate::events::{VarScope, VarUpdate};
use crate::ports::EventLog;
use actionlog_domain::RecordPayload;
use actionlog_domain::diff::{DiffMap, VarChange};
use std::sync::Arc;

/// Diff-and-emit tracker over the two variable namespaces.
///
/// Varbits and varps are tracked independently, each with its own ignore
/// set. One record per individually changed id; old values default to 0
/// for ids never seen before.
pub struct VarTracker {
    log: Arc<dyn EventLog>,
    varbits: DiffMap<i32, i32>,
    varps: DiffMap<i32, i32>,
}

impl VarTracker {
    pub fn new(
        log: Arc<dyn EventLog>,
        ignored_varbits: impl IntoIterator<Item = i32>,
        ignored_varps: impl IntoIterator<Item = i32>,
    ) -> Self {
        Self {
            log,
            varbits: DiffMap::with_ignored(ignored_varbits),
            varps: DiffMap::with_ignored(ignored_varps),
        }
    }

    pub fn on_var_update(&mut self, update: &VarUpdate) {
        let (map, wrap): (_, fn(VarChange) -> RecordPayload) = match update.scope {
            VarScope::Bit => (&mut self.varbits, RecordPayload::VarbitChanged),
            VarScope::Player => (&mut self.varps, RecordPayload::VarpChanged),
        };

        if let Some(change) = map.observe(update.id, update.value) {
            self.log.write(wrap(VarChange {
                id: update.id,
                old_value: change.old,
                new_value: change.new,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingLog;

    fn setup_with_ignored(
        ignored_varbits: Vec<i32>,
        ignored_varps: Vec<i32>,
    ) -> (Arc<RecordingLog>, VarTracker) {
        let log = Arc::new(RecordingLog::new());
        let tracker = VarTracker::new(log.clone(), ignored_varbits, ignored_varps);
        (log, tracker)
    }

    #[test]
    fn first_change_defaults_old_value_to_zero() {
        let (log, mut tracker) = setup_with_ignored(vec![], vec![]);

        tracker.on_var_update(&VarUpdate {
            scope: VarScope::Player,
            id: 173,
            value: 1,
        });

        let records = log.records();
        assert_eq!(records.len(), 1);
        let RecordPayload::VarpChanged(change) = &records[0] else {
            panic!("expected VarpChanged, got {:?}", records[0]);
        };
        assert_eq!(
            *change,
            VarChange {
                id: 173,
                old_value: 0,
                new_value: 1
            }
        );
    }

    #[test]
    fn namespaces_are_independent() {
        let (log, mut tracker) = setup_with_ignored(vec![], vec![]);

        tracker.on_var_update(&VarUpdate {
            scope: VarScope::Bit,
            id: 7,
            value: 1,
        });
        tracker.on_var_update(&VarUpdate {
            scope: VarScope::Player,
            id: 7,
            value: 2,
        });

        let records = log.records();
        assert_eq!(records.len(), 2);
        assert!(matches!(records[0], RecordPayload::VarbitChanged(_)));
        assert!(matches!(records[1], RecordPayload::VarpChanged(_)));
    }

    #[test]
    fn unchanged_value_emits_nothing() {
        let (log, mut tracker) = setup_with_ignored(vec![], vec![]);
        let update = VarUpdate {
            scope: VarScope::Bit,
            id: 4070,
            value: 3,
        };

        tracker.on_var_update(&update);
        tracker.on_var_update(&update);

        assert_eq!(log.len(), 1);
    }

    #[test]
    fn ignored_ids_emit_nothing_and_store_nothing() {
        let (log, mut tracker) = setup_with_ignored(vec![4070], vec![]);

        tracker.on_var_update(&VarUpdate {
            scope: VarScope::Bit,
            id: 4070,
            value: 3,
        });
        // Ignoring is per-namespace: the same id as a varp still emits.
        tracker.on_var_update(&VarUpdate {
            scope: VarScope::Player,
            id: 4070,
            value: 3,
        });

        let records = log.records();
        assert_eq!(records.len(), 1);
        assert!(matches!(records[0], RecordPayload::VarpChanged(_)));
    }

    #[test]
    fn successive_changes_chain_old_values() {
        let (log, mut tracker) = setup_with_ignored(vec![], vec![]);

        tracker.on_var_update(&VarUpdate {
            scope: VarScope::Bit,
            id: 4070,
            value: 3,
        });
        tracker.on_var_update(&VarUpdate {
            scope: VarScope::Bit,
            id: 4070,
            value: 5,
        });

        let RecordPayload::VarbitChanged(change) = &log.records()[1] else {
            panic!("expected VarbitChanged");
        };
        assert_eq!(change.old_value, 3);
        assert_eq!(change.new_value, 5);
    }
}
