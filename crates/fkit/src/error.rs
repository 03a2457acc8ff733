#![forbid(unsafe_code)]

//! FrankenKit error model and graceful degradation.
//!
//! Widget operations that a user can trigger (clicks, key presses) never
//! fail: they report whether anything changed. Errors are reserved for
//! values an application supplies from outside, such as a theme file or a
//! tab index restored from saved settings. Every error maps to a
//! [`DegradationAction`] so the caller can keep the UI alive.

use std::fmt;

use fkit_style::config::ThemeConfigError;
use fkit_widgets::dropdown::Dropdown;
use fkit_widgets::tabs::Tabs;

/// Widget state supplied by the application is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// Widget state is inconsistent and cannot be rendered.
    InvalidState {
        widget_name: &'static str,
        detail: String,
    },
    /// An index past the end of the widget's entries.
    IndexOutOfRange {
        widget_name: &'static str,
        index: usize,
        len: usize,
    },
    /// The entry exists but is disabled.
    Disabled {
        widget_name: &'static str,
        index: usize,
    },
}

/// Top-level error type for FrankenKit apps.
#[derive(Debug)]
pub enum Error {
    /// Theme file could not be read, parsed, or validated.
    Config(ThemeConfigError),
    /// Application-supplied widget state is unusable.
    Widget(WidgetError),
    /// Raw I/O error (convenience variant for `?` on io::Result).
    Io(std::io::Error),
}

/// Standard result type for FrankenKit APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// What the application should do when an error occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradationAction {
    /// Keep running with the built-in default theme.
    DefaultTheme,
    /// Keep the widget's current state and ignore the supplied value.
    KeepCurrentState,
    /// The error is unrecoverable; shut down gracefully.
    Shutdown,
}

impl Error {
    /// Determine the graceful degradation action for this error.
    #[must_use]
    pub fn degradation(&self) -> DegradationAction {
        match self {
            Self::Config(_) => DegradationAction::DefaultTheme,
            Self::Widget(_) => DegradationAction::KeepCurrentState,
            Self::Io(_) => DegradationAction::Shutdown,
        }
    }

    /// Error type label for logs.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Widget(_) => "widget",
            Self::Io(_) => "io",
        }
    }

    /// Whether the error is recoverable (does not require shutdown).
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.degradation(), DegradationAction::Shutdown)
    }
}

// ── Validation helpers ──────────────────────────────────────────────────

/// Check that `index` addresses one of `len` entries.
pub fn validate_index(widget_name: &'static str, index: usize, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(WidgetError::InvalidState {
            widget_name,
            detail: format!("index {index} supplied but the widget has no entries"),
        }
        .into());
    }
    if index >= len {
        return Err(WidgetError::IndexOutOfRange {
            widget_name,
            index,
            len,
        }
        .into());
    }
    Ok(index)
}

/// Check that `index` names an enabled tab, e.g. before restoring a saved
/// active tab with [`Tabs::select`].
pub fn validate_tab(tabs: &Tabs<'_>, index: usize) -> Result<usize> {
    let index = validate_index("tabs", index, tabs.tabs().len())?;
    if tabs.tabs()[index].is_disabled() {
        return Err(WidgetError::Disabled {
            widget_name: "tabs",
            index,
        }
        .into());
    }
    Ok(index)
}

/// Check that `index` names an enabled dropdown item.
pub fn validate_dropdown_selection(dropdown: &Dropdown, index: usize) -> Result<usize> {
    let index = validate_index("dropdown", index, dropdown.items().len())?;
    if dropdown.items()[index].is_disabled() {
        return Err(WidgetError::Disabled {
            widget_name: "dropdown",
            index,
        }
        .into());
    }
    Ok(index)
}

// ── Display ─────────────────────────────────────────────────────────────

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState {
                widget_name,
                detail,
            } => write!(f, "widget '{widget_name}' invalid state: {detail}"),
            Self::IndexOutOfRange {
                widget_name,
                index,
                len,
            } => write!(
                f,
                "widget '{widget_name}' index {index} out of range (len {len})"
            ),
            Self::Disabled { widget_name, index } => {
                write!(f, "widget '{widget_name}' entry {index} is disabled")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "theme config: {err}"),
            Self::Widget(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "I/O: {err}"),
        }
    }
}

impl fmt::Display for DegradationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultTheme => write!(f, "default_theme"),
            Self::KeepCurrentState => write!(f, "keep_current_state"),
            Self::Shutdown => write!(f, "shutdown"),
        }
    }
}

// ── std::error::Error ───────────────────────────────────────────────────

impl std::error::Error for WidgetError {}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Widget(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ThemeConfigError> for Error {
    fn from(err: ThemeConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<WidgetError> for Error {
    fn from(err: WidgetError) -> Self {
        Self::Widget(err)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────
