//! Accessibility audit pipeline.
//!
//! Runs one automated check against a loaded document through an engine
//! port, normalizes the raw findings into compact diagnostics (deterministic
//! CSS locator + truncated markup snippet), prunes them against the
//! caller's ignore policy, and delivers the full result set exactly once.

pub mod errors;
pub mod filter;
pub mod normalize;
pub mod orchestrator;
pub mod selector;
pub mod snippet;

pub use errors::AuditError;
pub use filter::IgnorePolicy;
pub use normalize::normalize;
pub use orchestrator::{AuditOrchestrator, RunHandle};
pub use selector::css_selector;
pub use snippet::context_snippet;
