//! Ports — the seams between the recorder core and the host client.

pub mod event_log;
pub mod game_view;

pub use event_log::{EventLog, NoEventLog};
pub use game_view::{GameView, TickSource, WorldView, components, containers};
