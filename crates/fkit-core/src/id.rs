#![forbid(unsafe_code)]

//! Widget identifiers.
//!
//! A widget that pairs a label with an input (checkbox, toggle) needs a
//! stable identifier. Callers may supply one; otherwise the widget asks an
//! [`IdSource`] for a fresh id once, at state creation, and keeps it for the
//! lifetime of that state. The source is passed in rather than reached
//! through a global so tests and hosts control numbering.

use std::fmt;

/// Stable identifier of a widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(String);

impl WidgetId {
    /// Wrap a caller-chosen identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stable 32-bit key derived from the identifier (FNV-1a).
    ///
    /// Used as the hit-region id so mouse events can be routed back to the
    /// widget that registered them.
    #[must_use]
    pub fn hash32(&self) -> u32 {
        let mut hash: u32 = 0x811c_9dc5;
        for byte in self.0.bytes() {
            hash ^= u32::from(byte);
            hash = hash.wrapping_mul(0x0100_0193);
        }
        hash
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for WidgetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Capability that hands out fresh identifiers.
pub trait IdSource {
    /// Produce a new identifier that has not been returned before by this
    /// source. `prefix` names the widget kind (e.g. `"checkbox"`).
    fn next_id(&mut self, prefix: &str) -> WidgetId;
}

/// Counter-backed [`IdSource`]: `checkbox-1`, `checkbox-2`, `toggle-3`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Create a source starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Number of ids issued so far.
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.next
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> WidgetId {
        self.next += 1;
        WidgetId(format!("{prefix}-{}", self.next))
    }
}

impl<F> IdSource for F
where
    F: FnMut(&str) -> WidgetId,
{
    fn next_id(&mut self, prefix: &str) -> WidgetId {
        self(prefix)
    }
}
