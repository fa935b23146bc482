//! Generic diff-and-emit state: last-observed values keyed by id.
//!
//! A [`DiffMap`] stores the last observation for every key and reports a
//! change only when a fresh observation differs. Keys in the ignore set
//! produce no changes and are never stored, so noisy ids stay invisible
//! to both the output and the internal state.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// An observed old → new transition for a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueChange<V> {
    pub old: V,
    pub new: V,
}

/// Last-observed mapping with a static ignore set.
///
/// Values for never-seen keys default to `V::default()`, so the first
/// observation of a non-default value already counts as a change.
#[derive(Debug, Clone)]
pub struct DiffMap<K, V> {
    seen: HashMap<K, V>,
    ignored: HashSet<K>,
}

impl<K, V> DiffMap<K, V>
where
    K: Eq + Hash + Copy,
    V: Eq + Copy + Default,
{
    pub fn new() -> Self {
        Self::with_ignored([])
    }

    pub fn with_ignored(ignored: impl IntoIterator<Item = K>) -> Self {
        Self {
            seen: HashMap::new(),
            ignored: ignored.into_iter().collect(),
        }
    }

    /// Record a fresh observation.
    ///
    /// Returns the transition when the value differs from the stored one,
    /// `None` when it is unchanged or the key is ignored.
    pub fn observe(&mut self, key: K, value: V) -> Option<ValueChange<V>> {
        if self.ignored.contains(&key) {
            return None;
        }
        let old = self.seen.insert(key, value).unwrap_or_default();
        (old != value).then_some(ValueChange { old, new: value })
    }

    /// Last stored value for a key, if any observation was recorded.
    pub fn last(&self, key: K) -> Option<V> {
        self.seen.get(&key).copied()
    }

    pub fn is_ignored(&self, key: K) -> bool {
        self.ignored.contains(&key)
    }
}

impl<K, V> Default for DiffMap<K, V>
where
    K: Eq + Hash + Copy,
    V: Eq + Copy + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Payload of a `VARBIT_CHANGED` / `VARP_CHANGED` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarChange {
    pub id: i32,
    pub old_value: i32,
    pub new_value: i32,
}
