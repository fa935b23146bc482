//! Log record envelope and the closed payload union.
//!
//! One [`LogRecord`] serializes to one JSON line:
//!
//! ```json
//! {"tick":123,"ts":"2024-06-01T12:00:00.000Z","type":"VARP_CHANGED","data":{...}}
//! ```
//!
//! `tick` and `ts` are stamped when the record is accepted on the producer
//! thread, so they reflect when the event occurred, not when it was
//! flushed. The `type` tag and `data` body come from [`RecordPayload`], an
//! adjacently tagged union over every record shape this system emits.

use crate::animation::PlayerAnimationChange;
use crate::dialogue::DialogueSession;
use crate::diff::VarChange;
use crate::inventory::InventoryChange;
use crate::world::WorldSnapshot;
use serde::{Deserialize, Serialize};

/// A single append-log record. Immutable once constructed; written
/// exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub tick: i32,
    pub ts: String,
    #[serde(flatten)]
    pub payload: RecordPayload,
}

impl LogRecord {
    pub fn new(tick: i32, ts: impl Into<String>, payload: RecordPayload) -> Self {
        Self {
            tick,
            ts: ts.into(),
            payload,
        }
    }
}

/// Every payload shape the recorder can emit, tagged by record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RecordPayload {
    #[serde(rename = "DIALOGUE_STARTED")]
    DialogueStarted(DialogueSession),
    #[serde(rename = "DIALOGUE_ENDED")]
    DialogueEnded(DialogueSession),
    #[serde(rename = "INVENTORY_CHANGED")]
    InventoryChanged(InventoryChange),
    #[serde(rename = "VARBIT_CHANGED")]
    VarbitChanged(VarChange),
    #[serde(rename = "VARP_CHANGED")]
    VarpChanged(VarChange),
    #[serde(rename = "ANIMATION_PLAYER_CHANGED")]
    AnimationPlayerChanged(PlayerAnimationChange),
    #[serde(rename = "DUMP")]
    Dump(Box<WorldSnapshot>),
}

impl RecordPayload {
    /// The `type` tag this payload serializes under, for diagnostics.
    pub fn type_tag(&self) -> &'static str {
        match self {
            RecordPayload::DialogueStarted(_) => "DIALOGUE_STARTED",
            RecordPayload::DialogueEnded(_) => "DIALOGUE_ENDED",
            RecordPayload::InventoryChanged(_) => "INVENTORY_CHANGED",
            RecordPayload::VarbitChanged(_) => "VARBIT_CHANGED",
            RecordPayload::VarpChanged(_) => "VARP_CHANGED",
            RecordPayload::AnimationPlayerChanged(_) => "ANIMATION_PLAYER_CHANGED",
            RecordPayload::Dump(_) => "DUMP",
        }
    }
}
