//! Structured event log adapters.

pub mod jsonl_writer;

pub use jsonl_writer::{JsonlEventWriter, Rotation, WriterError};
