#![forbid(unsafe_code)]

//! Golden outputs for widget rendering.
//!
//! Two flavors of golden are supported:
//!
//! - **Text snapshots**: the rendered buffer as trimmed lines, compared with
//!   [`assert_lines`]. Best for small widgets where the expected output reads
//!   well inline in the test.
//! - **Checksums**: a BLAKE3 digest of the buffer's glyphs, stored one per
//!   line in a `.checksums` file. Run with `BLESS=1` to rewrite the files.
//!
//! # JSONL log
//!
//! [`GoldenLogger`] writes one JSON object per line:
//!
//! ```json
//! {"event":"start","case":"settings_form"}
//! {"event":"frame","frame_id":0,"width":40,"height":6,"checksum":"blake3:..."}
//! {"event":"complete","case":"settings_form","outcome":"pass","checksums":["blake3:..."]}
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use fkit_render::buffer::Buffer;
use fkit_render::cell::CellContent;
use serde_json::json;

/// Prefix on every checksum so logs say which hash produced them.
const CHECKSUM_PREFIX: &str = "blake3:";

// ============================================================================
// Text snapshots
// ============================================================================

/// The buffer as text: one line per row, trailing spaces trimmed, joined
/// with `\n`.
#[must_use]
pub fn buffer_to_text(buf: &Buffer) -> String {
    buf.to_lines().join("\n")
}

/// Line-by-line diff of `actual` against `expected`.
///
/// Returns `None` when they match. Trailing spaces are ignored on both sides.
#[must_use]
pub fn diff_lines<S: AsRef<str>>(expected: &[S], actual: &[String]) -> Option<String> {
    let rows = expected.len().max(actual.len());
    let mut report = String::new();
    for row in 0..rows {
        let want = expected.get(row).map(|s| s.as_ref().trim_end());
        let got = actual.get(row).map(|s| s.trim_end());
        if want != got {
            report.push_str(&format!(
                "  row {row}:\n    expected: {}\n    actual:   {}\n",
                want.map_or_else(|| "<missing>".to_string(), |s| format!("{s:?}")),
                got.map_or_else(|| "<missing>".to_string(), |s| format!("{s:?}")),
            ));
        }
    }
    if report.is_empty() {
        None
    } else {
        Some(report)
    }
}

/// Assert the buffer's rows read as `expected`.
///
/// # Panics
///
/// Panics with a per-row diff and the full actual output on mismatch.
#[track_caller]
pub fn assert_lines<S: AsRef<str>>(buf: &Buffer, expected: &[S]) {
    let actual = buf.to_lines();
    if let Some(report) = diff_lines(expected, &actual) {
        panic!(
            "rendered output differs from snapshot\n{report}\nfull output:\n{}",
            actual.join("\n")
        );
    }
}

// ============================================================================
// Checksum Computation
// ============================================================================

/// BLAKE3 digest of buffer content (glyphs only, no styling).
///
/// Dimensions are hashed first so an empty 4x1 buffer differs from an
/// empty 2x2 one.
#[must_use]
pub fn compute_buffer_checksum(buf: &Buffer) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&buf.width().to_le_bytes());
    hasher.update(&buf.height().to_le_bytes());
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let tag: u32 = match buf.get(x, y).map(|cell| cell.content) {
                Some(CellContent::Char(c)) => c as u32,
                Some(CellContent::Continuation) => u32::MAX,
                Some(CellContent::Empty) | None => 0,
            };
            hasher.update(&tag.to_le_bytes());
        }
    }
    format!("{CHECKSUM_PREFIX}{}", hasher.finalize().to_hex())
}

/// BLAKE3 digest of a text string.
#[must_use]
pub fn compute_text_checksum(text: &str) -> String {
    format!("{CHECKSUM_PREFIX}{}", blake3::hash(text.as_bytes()).to_hex())
}

// ============================================================================
// JSONL Logger
// ============================================================================

/// Structured JSONL log for a golden run.
///
/// A logger created with [`GoldenLogger::noop`] still records checksums but
/// writes nothing.
pub struct GoldenLogger {
    writer: Option<BufWriter<File>>,
    case: String,
    checksums: Vec<String>,
}

impl std::fmt::Debug for GoldenLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoldenLogger")
            .field("case", &self.case)
            .field("writing", &self.writer.is_some())
            .field("checksums", &self.checksums.len())
            .finish()
    }
}

impl GoldenLogger {
    /// Append to the log file at `path`, creating parent directories.
    pub fn new(path: &Path) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            case: String::new(),
            checksums: Vec::new(),
        })
    }

    #[must_use]
    pub fn noop() -> Self {
        Self {
            writer: None,
            case: String::new(),
            checksums: Vec::new(),
        }
    }

    pub fn log_start(&mut self, case: &str) {
        self.case = case.to_string();
        self.checksums.clear();
        self.write_line(&json!({ "event": "start", "case": case }));
    }

    /// Record a rendered frame; returns its checksum.
    pub fn log_frame(&mut self, frame_id: u32, buf: &Buffer) -> String {
        let checksum = compute_buffer_checksum(buf);
        self.write_line(&json!({
            "event": "frame",
            "frame_id": frame_id,
            "width": buf.width(),
            "height": buf.height(),
            "checksum": checksum,
        }));
        self.checksums.push(checksum.clone());
        checksum
    }

    pub fn log_complete(&mut self, outcome: GoldenOutcome) {
        self.write_line(&json!({
            "event": "complete",
            "case": self.case,
            "outcome": outcome.as_str(),
            "checksums": self.checksums,
        }));
        tracing::debug!(
            message = "golden.complete",
            case = %self.case,
            outcome = outcome.as_str(),
            frames = self.checksums.len()
        );
    }

    pub fn log_error(&mut self, message: &str) {
        self.write_line(&json!({ "event": "error", "case": self.case, "message": message }));
    }

    /// Checksums of every frame logged since the last `log_start`.
    #[must_use]
    pub fn checksums(&self) -> &[String] {
        &self.checksums
    }

    fn write_line(&mut self, value: &serde_json::Value) {
        if let Some(writer) = self.writer.as_mut() {
            let _ = writeln!(writer, "{value}");
            let _ = writer.flush();
        }
    }
}

/// Test outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldenOutcome {
    Pass,
    Fail,
    Skip,
}

impl GoldenOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Skip => "skip",
        }
    }
}

// ============================================================================
// Golden File Management
// ============================================================================

/// Path to the checksums file for `case` under `base_dir/tests/golden/`.
#[must_use]
pub fn golden_checksum_path(base_dir: &Path, case: &str) -> PathBuf {
    base_dir
        .join("tests")
        .join("golden")
        .join(format!("{case}.checksums"))
}

/// Load expected checksums. A missing file yields an empty list.
pub fn load_golden_checksums(path: &Path) -> std::io::Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Write checksums, one per line, under a header comment.
pub fn save_golden_checksums(path: &Path, checksums: &[String]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = format!(
        "# Golden checksums - regenerate with BLESS=1\n{}\n",
        checksums.join("\n")
    );
    fs::write(path, content)
}

/// `BLESS=1` (or `true`) rewrites golden files instead of checking them.
#[must_use]
pub fn is_bless_mode() -> bool {
    std::env::var("BLESS").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Missing golden files fail instead of pass under CI or
/// `FKIT_GOLDEN_ENFORCE=1`.
#[must_use]
pub fn is_golden_enforced() -> bool {
    let truthy = |name: &str| {
        std::env::var(name).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
    };
    truthy("FKIT_GOLDEN_ENFORCE") || truthy("CI")
}

/// Compare checksums; on failure also returns the first differing frame.
#[must_use]
pub fn verify_checksums(actual: &[String], expected: &[String]) -> (GoldenOutcome, Option<usize>) {
    if expected.is_empty() {
        let outcome = if is_golden_enforced() {
            GoldenOutcome::Fail
        } else {
            GoldenOutcome::Skip
        };
        return (outcome, None);
    }
    if let Some(idx) = actual.iter().zip(expected).position(|(a, e)| a != e) {
        return (GoldenOutcome::Fail, Some(idx));
    }
    if actual.len() != expected.len() {
        return (GoldenOutcome::Fail, Some(actual.len().min(expected.len())));
    }
    (GoldenOutcome::Pass, None)
}

/// Check `actual` against the golden file at `path`, or rewrite it in bless
/// mode.
pub fn check_or_bless(path: &Path, actual: &[String]) -> std::io::Result<GoldenOutcome> {
    if is_bless_mode() {
        save_golden_checksums(path, actual)?;
        tracing::info!(message = "golden.bless", path = %path.display(), frames = actual.len());
        return Ok(GoldenOutcome::Pass);
    }
    let expected = load_golden_checksums(path)?;
    Ok(verify_checksums(actual, &expected).0)
}
