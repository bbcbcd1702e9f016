//! Error types for the audit pipeline.

use thiserror::Error;

/// Audit failure taxonomy. Every variant is caught at the orchestrator and
/// flattened into the terminal outcome; none escape as panics.
#[derive(Debug, Error, Clone)]
pub enum AuditError {
    /// The checking engine failed while being invoked.
    #[error("{engine}: {reason}")]
    EngineInvocation { engine: String, reason: String },
}
