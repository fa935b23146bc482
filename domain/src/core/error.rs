//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown dump category: {0}")]
    UnknownDumpCategory(String),

    #[error("Host state unavailable: {0}")]
    MissingHostState(&'static str),
}
