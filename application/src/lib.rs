//! Application layer for actionlog
//!
//! This crate contains the stateful trackers, the ports they talk
//! through, and the recorder that wires host callbacks to them. It
//! depends only on the domain layer.
//!
//! All tracker logic executes synchronously on the host's single callback
//! thread; the only concurrency boundary in the system lives behind the
//! [`EventLog`] port, whose implementation hands records to a background
//! writer.

pub mod config;
pub mod dump;
pub mod events;
pub mod ports;
pub mod recorder;
pub mod trackers;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::RecorderConfig;
pub use ports::{
    EventLog, GameView, NoEventLog, TickSource, WorldView, components, containers,
};
pub use recorder::Recorder;
pub use trackers::{AnimationTracker, DialogueTracker, InventoryTracker, VarTracker};
