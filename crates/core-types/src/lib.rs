//! Shared primitives for the a11ycheck audit pipeline.

pub mod dom;

pub use dom::{DomNode, NodeRef, TreeNode};

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a single audit run.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RunId(pub String);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-supplied audit configuration, immutable for the run.
///
/// All fields are required; this core defines no defaults. Defaulting is the
/// host's responsibility.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Ruleset/profile identifier handed to the checking engine.
    pub standard: String,

    /// Delay in milliseconds before the engine is invoked, letting the
    /// document settle.
    pub wait_ms: u64,

    /// Ignore entries: diagnostic codes (matched case-insensitively) or
    /// severity names (matched exactly).
    pub ignore: Vec<String>,
}

/// Severity of a diagnostic, derived from the engine's raw type code.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Notice,
    Unknown,
}

impl Severity {
    /// Fixed type-code table: 1 error, 2 warning, 3 notice. Any other code
    /// maps to unknown.
    pub fn from_type_code(code: i64) -> Self {
        match code {
            1 => Severity::Error,
            2 => Severity::Warning,
            3 => Severity::Notice,
            _ => Severity::Unknown,
        }
    }

    /// Lowercase name used on the wire and in ignore matching.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Engine rule identifier, case preserved.
    pub code: String,

    /// Human-readable description.
    pub message: String,

    #[serde(rename = "type")]
    pub severity: Severity,

    /// Raw severity code as reported by the engine.
    pub type_code: i64,

    /// Truncated markup snippet of the offending element. Absent when the
    /// element exposes no serializable markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// CSS path uniquely locating the offending element, built bottom-up.
    pub selector: String,
}

/// Terminal payload of an audit run. Exactly one is delivered per run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuditOutcome {
    /// The engine completed; `messages` holds the filtered diagnostics in
    /// original finding order (possibly empty).
    Completed { messages: Vec<Diagnostic> },

    /// The engine invocation failed; `error` describes the cause.
    Failed { error: String },
}

impl AuditOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuditOutcome::Completed { .. })
    }

    pub fn messages(&self) -> Option<&[Diagnostic]> {
        match self {
            AuditOutcome::Completed { messages } => Some(messages),
            AuditOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuditOutcome::Completed { .. } => None,
            AuditOutcome::Failed { error } => Some(error),
        }
    }
}
