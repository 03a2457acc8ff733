#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros so
//! downstream crates can log through `fkit_core::debug!` without declaring
//! their own dependency. Without the feature the module is empty and call
//! sites are expected to be behind `#[cfg(feature = "tracing")]`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, info, trace, warn};
