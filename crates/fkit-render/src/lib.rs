#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, and frames.
//!
//! # Role in FrankenKit
//! `fkit-render` is the deterministic drawing surface. Widgets write styled
//! [`cell::Cell`]s into a [`buffer::Buffer`] owned by a [`frame::Frame`],
//! and interactive widgets register hit regions on the frame so mouse events
//! can be routed back to them.
//!
//! # Primary responsibilities
//! - **Cell/Buffer**: 2D grid of fixed-size cells with wide-glyph handling.
//! - **Frame**: buffer plus hit grid and cursor metadata for one render pass.
//!
//! Rendering the same widget state into a fresh frame twice always produces
//! identical buffers; nothing here reads clocks or global state.

pub mod buffer;
pub mod cell;
pub mod frame;

pub(crate) use fkit_core::text_width::grapheme_width;
