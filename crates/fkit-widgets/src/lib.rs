#![forbid(unsafe_code)]

//! Core widgets for FrankenKit.
//!
//! Widgets are plain builder values describing what to draw; anything that
//! must survive between renders (a toggle's uncontrolled value, the active
//! tab, whether a dropdown is open) lives in a separate state value the
//! caller owns and passes to [`StatefulWidget::render`] and to the widget's
//! event handlers.
//!
//! | Widget | State | Interaction |
//! |---|---|---|
//! | [`checkbox::CheckBox`] | [`checkbox::CheckBoxState`] | Space/Enter, click |
//! | [`toggle::Toggle`] | [`toggle::ToggleState`] | Space/Enter, click |
//! | [`tabs::Tabs`] | [`tabs::TabsState`] | arrows, digits, click |
//! | [`nav::NavBar`] | [`nav::NavState`] | arrows, Enter, click |
//! | [`dropdown::Dropdown`] | [`dropdown::DropdownState`] | Enter/Space, arrows, Esc |
//! | [`data_list::DataList`] | — | — |
//! | [`badge::Badge`] | — | — |

pub mod badge;
pub mod boolean_input;
pub mod checkbox;
pub mod control;
pub mod data_list;
pub mod dropdown;
pub mod mouse;
pub mod nav;
pub mod tabs;
pub mod toggle;

use fkit_core::geometry::Rect;
use fkit_core::text_width::grapheme_width;
use fkit_render::buffer::Buffer;
use fkit_render::cell::Cell;
use fkit_render::frame::Frame;
use fkit_style::Style;
use unicode_segmentation::UnicodeSegmentation;

/// Layout direction of a multi-item widget (tabs, nav bar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Items side by side on one row.
    #[default]
    Horizontal,
    /// One item per row.
    Vertical,
}

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a [`Frame`] within a given [`Rect`].
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;
    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Apply `style` to every cell of `area`.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    buf.modify_area(area, |cell| style.apply_to(cell));
}

/// Draw `text` starting at (x, y), stopping before `max_x`.
///
/// Returns the column after the last drawn glyph. A glyph that would
/// straddle `max_x` is not drawn.
pub(crate) fn draw_text_span(
    frame: &mut Frame,
    mut x: u16,
    y: u16,
    text: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in text.graphemes(true) {
        let width = grapheme_width(grapheme) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > max_x {
            break;
        }
        let Some(ch) = grapheme.chars().next() else {
            continue;
        };
        let mut cell = Cell::from_char(ch);
        style.apply_to(&mut cell);
        frame.buffer.set(x, y, cell);
        x += width;
    }
    x
}
