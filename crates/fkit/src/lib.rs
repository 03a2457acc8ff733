#![forbid(unsafe_code)]

//! FrankenKit public facade crate.
//!
//! Re-exports the widget set and the types needed to drive it, plus the
//! unified [`Error`] model. Most applications only need the [`prelude`].
//!
//! ```
//! use fkit::prelude::*;
//!
//! let mut ids = SequentialIds::new();
//! let mut terms = CheckBox::new("Accept terms");
//! let mut state = terms.create_state(&mut ids);
//!
//! let mut frame = Frame::with_hit_grid(20, 1);
//! StatefulWidget::render(&terms, Rect::new(0, 0, 20, 1), &mut frame, &mut state);
//! assert_eq!(frame.buffer.row_text(0).trim_end(), "[ ] Accept terms");
//!
//! terms.focus(&mut state);
//! terms.handle_event(&mut state, &Event::Key(KeyEvent::new(KeyCode::Enter)), None);
//! assert_eq!(terms.value(&state), CheckValue::Checked);
//! ```

pub mod error;

pub use error::{
    DegradationAction, Error, Result, WidgetError, validate_dropdown_selection, validate_index,
    validate_tab,
};

// --- Core re-exports -------------------------------------------------------

pub use fkit_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use fkit_core::geometry::{Rect, Sides};
pub use fkit_core::id::{IdSource, SequentialIds, WidgetId};

// --- Render re-exports -----------------------------------------------------

pub use fkit_render::buffer::Buffer;
pub use fkit_render::cell::{Cell, CellFlags, PackedRgba};
pub use fkit_render::frame::{Frame, HitData, HitId, HitRegion};

// --- Style re-exports ------------------------------------------------------

pub use fkit_style::config::{ThemeConfig, ThemeConfigError};
pub use fkit_style::{
    Glyphs, InteractionState, InteractiveStyle, Style, StyleFlags, Theme, Tone,
};

// --- Widget re-exports -----------------------------------------------------

pub use fkit_widgets::badge::Badge;
pub use fkit_widgets::boolean_input::{
    Binding, BooleanInputConfig, BooleanInputState, BooleanValue, ChangeOutcome, CheckValue,
    ToggleRequest,
};
pub use fkit_widgets::checkbox::{CheckBox, CheckBoxState};
pub use fkit_widgets::data_list::{DataList, DataListItem};
pub use fkit_widgets::dropdown::{Dropdown, DropdownItem, DropdownState};
pub use fkit_widgets::mouse::MouseResult;
pub use fkit_widgets::nav::{NavBar, NavGroup, NavItem, NavState};
pub use fkit_widgets::tabs::{Tab, Tabs, TabsState};
pub use fkit_widgets::toggle::{Toggle, ToggleState};
pub use fkit_widgets::{Orientation, StatefulWidget, Widget};

// --- Theme loading ---------------------------------------------------------

/// Load and validate a theme file, choosing the format by extension
/// (`.json` is JSON, anything else TOML).
#[cfg(feature = "theme-config")]
pub fn load_theme(path: impl AsRef<std::path::Path>) -> Result<Theme> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        ThemeConfig::from_json_file(path)?
    } else {
        ThemeConfig::from_toml_file(path)?
    };
    Ok(config.validated()?.to_theme())
}

/// [`load_theme`], falling back to [`Theme::default`] when the file cannot
/// be used.
#[cfg(feature = "theme-config")]
#[must_use]
pub fn load_theme_or_default(path: impl AsRef<std::path::Path>) -> Theme {
    let path = path.as_ref();
    match load_theme(path) {
        Ok(theme) => theme,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error_type = err.error_type(),
                action = %err.degradation(),
                error = %err,
                "theme not loaded; using default"
            );
            Theme::default()
        }
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Badge, CheckBox, CheckBoxState, CheckValue, ChangeOutcome, DataList, DataListItem,
        Dropdown, DropdownItem, DropdownState, Error, Event, Frame, IdSource, KeyCode, KeyEvent,
        MouseEvent, MouseResult, NavBar, NavGroup, NavItem, NavState, Orientation, Rect, Result,
        SequentialIds, StatefulWidget, Style, Tab, Tabs, TabsState, Theme, Toggle, ToggleState,
        Tone, Widget,
    };

    pub use crate::{core, render, style, widgets};
}

pub use fkit_core as core;
pub use fkit_render as render;
pub use fkit_style as style;
pub use fkit_widgets as widgets;
