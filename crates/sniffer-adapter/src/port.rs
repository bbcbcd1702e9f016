//! Engine port trait and raw finding model.

use std::fmt;

use a11ycheck_core_types::NodeRef;
use async_trait::async_trait;

use crate::errors::SnifferError;

/// One raw finding as reported by the engine, before normalization.
#[derive(Clone)]
pub struct RawFinding {
    /// Engine rule identifier.
    pub code: String,

    /// Human-readable description.
    pub message: String,

    /// Raw severity code.
    pub type_code: i64,

    /// Offending element.
    pub element: NodeRef,
}

impl fmt::Debug for RawFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawFinding")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("type_code", &self.type_code)
            .finish_non_exhaustive()
    }
}

/// Port to the external checking engine.
///
/// Resolution of the `process` future models the engine's zero-argument
/// completion callback; an `Err` models a synchronous throw during
/// invocation. The result store is read separately through `messages`,
/// preserving the engine's two-step contract.
#[async_trait]
pub trait SnifferPort: Send + Sync {
    /// Engine display name, used in failure payloads.
    fn name(&self) -> &str;

    /// Run a check for `standard` against `document`.
    async fn process(&self, standard: &str, document: &NodeRef) -> Result<(), SnifferError>;

    /// Ordered findings from the engine's result store.
    fn messages(&self) -> Vec<RawFinding>;
}
