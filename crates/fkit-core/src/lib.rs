#![forbid(unsafe_code)]

//! Core: geometry, canonical input events, and widget identifiers.
//!
//! # Role in FrankenKit
//! `fkit-core` is the input layer. It owns the normalized event types that
//! widgets react to, the rectangle math that layout and hit testing share,
//! and the [`id::IdSource`] capability widgets use to name themselves when
//! the caller does not.
//!
//! # How it fits in the system
//! `fkit-render` draws into cells addressed by [`geometry::Rect`], and
//! `fkit-widgets` consumes [`event::Event`] values to drive widget state.
//! Nothing here performs terminal I/O; the host application feeds events in.

pub mod event;
pub mod geometry;
pub mod id;
pub mod logging;
pub mod text_width;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
