#![forbid(unsafe_code)]

//! Cell-by-cell buffer comparison.
//!
//! Unlike the checksums in [`crate::golden`], this compares styling too, so
//! it catches a disabled control that renders the right glyphs in the wrong
//! colors.
//!
//! ```
//! use fkit_harness::frame_comparison::FrameComparator;
//! use fkit_render::buffer::Buffer;
//!
//! let result = FrameComparator::new().compare(&Buffer::new(4, 1), &Buffer::new(4, 1));
//! assert!(result.pass);
//! ```

use fkit_render::buffer::Buffer;
use fkit_render::cell::Cell;

use crate::golden::compute_buffer_checksum;

/// One differing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMismatch {
    pub x: u16,
    pub y: u16,
    pub expected: Cell,
    pub actual: Cell,
}

/// Buffer dimensions differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatch {
    pub expected_width: u16,
    pub expected_height: u16,
    pub actual_width: u16,
    pub actual_height: u16,
}

/// Outcome of comparing two buffers.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    /// Caller-provided label.
    pub frame_id: u32,
    pub pass: bool,
    pub expected_checksum: String,
    pub actual_checksum: String,
    pub size_mismatch: Option<SizeMismatch>,
    /// Every differing cell, including cells outside the overlap when sizes
    /// differ.
    pub mismatch_count: usize,
    /// The first `max_mismatches` differing cells in row-major order.
    pub mismatches: Vec<CellMismatch>,
    pub cells_compared: usize,
}

impl ComparisonResult {
    #[must_use]
    pub fn summary(&self) -> String {
        if self.pass {
            format!(
                "Frame {}: PASS ({} cells, checksum {})",
                self.frame_id, self.cells_compared, self.actual_checksum
            )
        } else if let Some(sz) = self.size_mismatch {
            format!(
                "Frame {}: FAIL (size mismatch: expected {}x{}, actual {}x{}, {} cell mismatches)",
                self.frame_id,
                sz.expected_width,
                sz.expected_height,
                sz.actual_width,
                sz.actual_height,
                self.mismatch_count
            )
        } else {
            format!(
                "Frame {}: FAIL ({} mismatches out of {} cells)",
                self.frame_id, self.mismatch_count, self.cells_compared
            )
        }
    }

    /// Summary plus one line per captured mismatch.
    #[must_use]
    pub fn detail_report(&self) -> String {
        let mut out = self.summary();
        out.push('\n');
        for m in &self.mismatches {
            out.push_str(&format!(
                "  [{},{}] expected: {} actual: {}\n",
                m.x,
                m.y,
                describe(&m.expected),
                describe(&m.actual)
            ));
        }
        if self.mismatch_count > self.mismatches.len() {
            out.push_str(&format!(
                "  ... and {} more mismatches\n",
                self.mismatch_count - self.mismatches.len()
            ));
        }
        out
    }
}

fn describe(cell: &Cell) -> String {
    let glyph = cell
        .content
        .as_char()
        .map_or_else(|| "?".to_string(), |c| format!("'{c}'"));
    format!(
        "{glyph} (fg={:#010x} bg={:#010x} a={:#04x})",
        cell.fg.0,
        cell.bg.0,
        cell.attrs.bits()
    )
}

/// Compares buffers cell by cell.
#[derive(Debug, Clone, Copy)]
pub struct FrameComparator {
    /// How many mismatches to capture in detail.
    pub max_mismatches: usize,
}

impl Default for FrameComparator {
    fn default() -> Self {
        Self { max_mismatches: 50 }
    }
}

impl FrameComparator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_mismatches(mut self, max: usize) -> Self {
        self.max_mismatches = max;
        self
    }

    #[must_use]
    pub fn compare_buffers(
        &self,
        frame_id: u32,
        expected: &Buffer,
        actual: &Buffer,
    ) -> ComparisonResult {
        let size_mismatch = (expected.width() != actual.width()
            || expected.height() != actual.height())
        .then(|| SizeMismatch {
            expected_width: expected.width(),
            expected_height: expected.height(),
            actual_width: actual.width(),
            actual_height: actual.height(),
        });

        let cmp_width = expected.width().min(actual.width());
        let cmp_height = expected.height().min(actual.height());
        let mut mismatches = Vec::new();
        let mut mismatch_count = 0;
        for y in 0..cmp_height {
            for x in 0..cmp_width {
                let exp = expected.get(x, y).copied().unwrap_or_default();
                let act = actual.get(x, y).copied().unwrap_or_default();
                if exp != act {
                    mismatch_count += 1;
                    if mismatches.len() < self.max_mismatches {
                        mismatches.push(CellMismatch {
                            x,
                            y,
                            expected: exp,
                            actual: act,
                        });
                    }
                }
            }
        }

        let cells_compared = usize::from(cmp_width) * usize::from(cmp_height);
        if size_mismatch.is_some() {
            let exp_cells = usize::from(expected.width()) * usize::from(expected.height());
            let act_cells = usize::from(actual.width()) * usize::from(actual.height());
            mismatch_count += exp_cells.max(act_cells) - cells_compared;
        }

        let pass = mismatch_count == 0 && size_mismatch.is_none();
        if !pass {
            tracing::debug!(
                message = "frame_comparison.fail",
                frame_id,
                mismatch_count,
                size_mismatch = size_mismatch.is_some()
            );
        }
        ComparisonResult {
            frame_id,
            pass,
            expected_checksum: compute_buffer_checksum(expected),
            actual_checksum: compute_buffer_checksum(actual),
            size_mismatch,
            mismatch_count,
            mismatches,
            cells_compared,
        }
    }

    /// [`Self::compare_buffers`] with frame id 0.
    #[must_use]
    pub fn compare(&self, expected: &Buffer, actual: &Buffer) -> ComparisonResult {
        self.compare_buffers(0, expected, actual)
    }
}
