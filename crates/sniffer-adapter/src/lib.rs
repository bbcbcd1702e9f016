//! Port to the external accessibility checking engine.
//!
//! The engine is a black box with a two-step contract: invoke a check
//! against a document, then read the ordered findings from its result
//! store. [`SnifferPort`] captures that contract; [`StaticSniffer`] is a
//! deterministic stub binding for tests and offline development.

pub mod errors;
pub mod port;
#[cfg(feature = "stub")]
pub mod stub;

pub use errors::SnifferError;
pub use port::{RawFinding, SnifferPort};
#[cfg(feature = "stub")]
pub use stub::StaticSniffer;

/// Returns `true` when the adapter is compiled with the stub engine.
pub const fn is_stubbed() -> bool {
    cfg!(feature = "stub")
}
