//! Infrastructure layer for actionlog
//!
//! This crate contains the adapters behind the application-layer ports:
//! the asynchronous JSONL writer implementing
//! [`EventLog`](actionlog_application::ports::EventLog), and file
//! configuration loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileLogConfig, FileTrackersConfig};
pub use logging::{JsonlEventWriter, Rotation, WriterError};
