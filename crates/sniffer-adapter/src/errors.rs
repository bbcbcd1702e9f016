//! Error types for the engine port.

use thiserror::Error;

/// Failure raised by a checking engine during invocation.
#[derive(Debug, Error, Clone)]
pub enum SnifferError {
    /// The engine rejected the invocation outright.
    #[error("{0}")]
    Invocation(String),

    /// The requested standard is unknown to the engine.
    #[error("unknown standard: {0}")]
    UnknownStandard(String),
}

impl SnifferError {
    pub fn invocation(message: impl Into<String>) -> Self {
        Self::Invocation(message.into())
    }
}
