#![forbid(unsafe_code)]

//! Test harness for FrankenKit widgets.
//!
//! - [`golden`]: text snapshots, BLAKE3 checksums, and golden checksum files
//!   with a `BLESS=1` update mode.
//! - [`frame_comparison`]: cell-by-cell buffer comparison with readable
//!   mismatch reports.
//!
//! Widgets render deterministically, so a snapshot taken from a fresh
//! [`fkit_render::frame::Frame`] is stable across runs and machines.

pub mod frame_comparison;
pub mod golden;

pub use frame_comparison::{ComparisonResult, FrameComparator};
pub use golden::{
    GoldenLogger, GoldenOutcome, assert_lines, buffer_to_text, check_or_bless,
    compute_buffer_checksum, compute_text_checksum, diff_lines, golden_checksum_path,
    is_bless_mode,
};
