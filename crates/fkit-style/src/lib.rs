#![forbid(unsafe_code)]

//! Style types for FrankenKit with CSS-like cascading semantics.
//!
//! # Role in FrankenKit
//! `fkit-style` is the shared vocabulary for colors and styling. Widgets use
//! these types to stay visually consistent without depending on each other.
//!
//! # This crate provides
//! - [`Style`] for text styling with patch/merge cascading.
//! - [`InteractiveStyle`] for normal/hover/focus/active/disabled variants.
//! - [`Theme`] with semantic color slots and widget glyphs.
//! - [`config::ThemeConfig`] for loading themes from TOML or JSON
//!   (feature `theme-config`).

/// Theme configuration loading and validation.
pub mod config;
/// Interactive style variants for stateful widgets.
pub mod interactive;
/// Style types with CSS-like cascading semantics.
pub mod style;
/// Theme with semantic color slots.
pub mod theme;

pub use fkit_render::cell::PackedRgba;
pub use interactive::{InteractionState, InteractiveStyle};
pub use style::{Style, StyleFlags};
pub use theme::{Glyphs, Theme, Tone};
