//! Port for the structured append log.
//!
//! Defines the [`EventLog`] trait through which trackers record semantic
//! events. This is separate from `tracing`-based operation logs: tracing
//! handles human-readable diagnostics, while this port captures the
//! machine-readable event stream (JSONL).

use actionlog_domain::RecordPayload;

/// Port for recording semantic events to the append log.
///
/// Implementations wrap each payload in a `{tick, ts, type, data}`
/// envelope and write it as a single record (one JSONL line). `write` is
/// intentionally synchronous and non-fallible: it must never block the
/// host callback thread beyond enqueue cost, and logging failures are
/// contained inside the implementation.
pub trait EventLog: Send + Sync {
    /// Record one semantic event.
    fn write(&self, payload: RecordPayload);
}

/// No-op implementation for tests and when recording is disabled.
pub struct NoEventLog;

impl EventLog for NoEventLog {
    fn write(&self, _payload: RecordPayload) {}
}
