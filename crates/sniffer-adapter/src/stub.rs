//! Deterministic stub engine for tests and offline development.

use a11ycheck_core_types::NodeRef;
use async_trait::async_trait;
use tracing::debug;

use crate::errors::SnifferError;
use crate::port::{RawFinding, SnifferPort};

/// Engine stub that serves a preloaded result store.
///
/// Optionally validates the requested standard against an accepted list,
/// failing invocation the way a real engine rejects a profile it does not
/// ship.
pub struct StaticSniffer {
    name: String,
    findings: Vec<RawFinding>,
    accepted_standards: Option<Vec<String>>,
}

impl StaticSniffer {
    pub fn new(findings: Vec<RawFinding>) -> Self {
        Self {
            name: "Static Sniffer".to_string(),
            findings,
            accepted_standards: None,
        }
    }

    /// Override the engine display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Restrict invocation to the given standards.
    pub fn with_accepted_standards(
        mut self,
        standards: impl IntoIterator<Item = String>,
    ) -> Self {
        self.accepted_standards = Some(standards.into_iter().collect());
        self
    }
}

#[async_trait]
impl SnifferPort for StaticSniffer {
    fn name(&self) -> &str {
        &self.name
    }

    async fn process(&self, standard: &str, _document: &NodeRef) -> Result<(), SnifferError> {
        if let Some(accepted) = &self.accepted_standards {
            if !accepted.iter().any(|s| s == standard) {
                return Err(SnifferError::UnknownStandard(standard.to_string()));
            }
        }
        debug!(standard, findings = self.findings.len(), "stub engine processed");
        Ok(())
    }

    fn messages(&self) -> Vec<RawFinding> {
        self.findings.clone()
    }
}
