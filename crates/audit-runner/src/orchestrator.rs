//! Single-shot audit orchestration.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use a11ycheck_core_types::{AuditConfig, AuditOutcome, NodeRef, RunId};
use sniffer_adapter::SnifferPort;

use crate::errors::AuditError;
use crate::filter::IgnorePolicy;
use crate::normalize::normalize;

/// Handle to one scheduled audit run.
///
/// The oneshot receiver carries the terminal outcome exactly once. There is
/// no cancellation and no retry; once scheduled, the run executes unless the
/// host runtime is torn down.
pub struct RunHandle {
    pub run_id: RunId,
    pub receiver: oneshot::Receiver<AuditOutcome>,
}

impl RunHandle {
    /// Await the single terminal outcome.
    pub async fn outcome(self) -> AuditOutcome {
        match self.receiver.await {
            Ok(outcome) => outcome,
            Err(_) => AuditOutcome::Failed {
                error: "audit task ended without delivering an outcome".to_string(),
            },
        }
    }
}

/// Schedules and runs audits against one checking engine.
pub struct AuditOrchestrator<E>
where
    E: SnifferPort + 'static,
{
    engine: Arc<E>,
}

impl<E> AuditOrchestrator<E>
where
    E: SnifferPort + 'static,
{
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// Schedule one audit of `document`.
    ///
    /// The engine is invoked after `config.wait_ms`, letting the document
    /// settle. The outcome reaches the returned handle exactly once: either
    /// the full filtered diagnostic list, or a single error payload when the
    /// engine fails during invocation. Never both, never neither.
    pub fn submit(&self, config: AuditConfig, document: NodeRef) -> RunHandle {
        let run_id = RunId::new();
        let (tx, rx) = oneshot::channel();
        let engine = Arc::clone(&self.engine);
        let id = run_id.clone();
        tokio::spawn(async move {
            debug!(run_id = %id, wait_ms = config.wait_ms, "audit scheduled");
            sleep(Duration::from_millis(config.wait_ms)).await;
            let outcome = run_audit(engine.as_ref(), &config, &document).await;
            if tx.send(outcome).is_err() {
                warn!(run_id = %id, "audit outcome dropped: handle no longer held");
            }
        });
        RunHandle { run_id, receiver: rx }
    }

    /// Run one audit to completion, awaiting the outcome in place.
    pub async fn run(&self, config: AuditConfig, document: NodeRef) -> AuditOutcome {
        self.submit(config, document).outcome().await
    }
}

async fn run_audit<E>(engine: &E, config: &AuditConfig, document: &NodeRef) -> AuditOutcome
where
    E: SnifferPort,
{
    debug!(standard = %config.standard, engine = engine.name(), "invoking checking engine");
    if let Err(err) = engine.process(&config.standard, document).await {
        let failure = AuditError::EngineInvocation {
            engine: engine.name().to_string(),
            reason: err.to_string(),
        };
        warn!(error = %failure, "engine invocation failed");
        return AuditOutcome::Failed {
            error: failure.to_string(),
        };
    }

    let policy = IgnorePolicy::from_config(config);
    let findings = engine.messages();
    let total = findings.len();
    let messages: Vec<_> = findings
        .iter()
        .map(normalize)
        .filter(|diagnostic| policy.is_wanted(diagnostic))
        .collect();
    info!(total, kept = messages.len(), "audit completed");
    AuditOutcome::Completed { messages }
}
