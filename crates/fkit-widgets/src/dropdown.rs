#![forbid(unsafe_code)]

//! Dropdown menu.
//!
//! A trigger row showing the current selection (or a placeholder) and, while
//! open, the menu rows below it.

use crate::mouse::MouseResult;
use crate::{StatefulWidget, draw_text_span, set_style_area};
use fkit_core::event::{KeyCode, KeyEvent, MouseEvent};
use fkit_core::geometry::Rect;
use fkit_core::text_width::display_width;
use fkit_render::frame::{Frame, HitData, HitId, HitRegion};
use fkit_style::{Style, Theme};

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownItem {
    label: String,
    disabled: bool,
}

impl DropdownItem {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// State for a [`Dropdown`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    /// Whether the menu is showing.
    pub open: bool,
    /// Menu row under the keyboard cursor.
    pub highlighted: usize,
    /// Chosen item, if any.
    pub selected: Option<usize>,
}

/// Dropdown widget.
#[derive(Debug, Clone)]
pub struct Dropdown {
    placeholder: String,
    items: Vec<DropdownItem>,
    disabled: bool,
    style: Style,
    highlight_style: Style,
    disabled_style: Style,
    open_glyph: String,
    closed_glyph: String,
    hit_id: Option<HitId>,
}

impl Dropdown {
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = DropdownItem>) -> Self {
        let glyphs = Theme::default().glyphs;
        Self {
            placeholder: String::new(),
            items: items.into_iter().collect(),
            disabled: false,
            style: Style::default(),
            highlight_style: Style::new().reverse(),
            disabled_style: Style::new().dim(),
            open_glyph: glyphs.dropdown_open,
            closed_glyph: glyphs.dropdown_closed,
            hit_id: None,
        }
    }

    /// Text shown on the trigger while nothing is selected.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.style = theme.text_style().bg(theme.surface);
        self.highlight_style = theme.accent_style().reverse();
        self.disabled_style = Style::new().fg(theme.disabled).dim();
        self.open_glyph = theme.glyphs.dropdown_open.clone();
        self.closed_glyph = theme.glyphs.dropdown_closed.clone();
        self
    }

    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    #[must_use]
    pub fn items(&self) -> &[DropdownItem] {
        &self.items
    }

    /// Label of the selected item.
    #[must_use]
    pub fn selected_label<'s>(&'s self, state: &DropdownState) -> Option<&'s str> {
        state
            .selected
            .and_then(|i| self.items.get(i))
            .map(DropdownItem::label)
    }

    fn is_enabled(&self, idx: usize) -> bool {
        self.items.get(idx).is_some_and(|item| !item.disabled)
    }

    fn first_enabled(&self) -> Option<usize> {
        (0..self.items.len()).find(|&i| self.is_enabled(i))
    }

    fn set_open(&self, state: &mut DropdownState, open: bool) -> bool {
        if state.open == open || (open && self.disabled) {
            return false;
        }
        if open {
            state.highlighted = state
                .selected
                .filter(|&i| self.is_enabled(i))
                .or_else(|| self.first_enabled())
                .unwrap_or(0);
        }
        state.open = open;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "dropdown.toggle", open, highlighted = state.highlighted);
        true
    }

    pub fn open(&self, state: &mut DropdownState) -> bool {
        self.set_open(state, true)
    }

    pub fn close(&self, state: &mut DropdownState) -> bool {
        self.set_open(state, false)
    }

    /// Open a closed menu or close an open one.
    pub fn toggle(&self, state: &mut DropdownState) -> bool {
        let open = !state.open;
        self.set_open(state, open)
    }

    /// Choose item `index` and close the menu. Refuses out-of-range and
    /// disabled items (including any index into an empty menu).
    pub fn select(&self, state: &mut DropdownState, index: usize) -> bool {
        if self.disabled || !self.is_enabled(index) {
            return false;
        }
        state.selected = Some(index);
        state.highlighted = index;
        self.close(state);
        true
    }

    /// Move the highlight down to the next enabled item.
    pub fn highlight_next(&self, state: &mut DropdownState) -> bool {
        let from = state.highlighted.saturating_add(1);
        match (from..self.items.len()).find(|&i| self.is_enabled(i)) {
            Some(i) => {
                state.highlighted = i;
                true
            }
            None => false,
        }
    }

    /// Move the highlight up to the previous enabled item.
    pub fn highlight_previous(&self, state: &mut DropdownState) -> bool {
        let upto = state.highlighted.min(self.items.len());
        match (0..upto).rev().find(|&i| self.is_enabled(i)) {
            Some(i) => {
                state.highlighted = i;
                true
            }
            None => false,
        }
    }

    /// Keyboard handling.
    ///
    /// Closed: `Enter` / `Space` / `Down` open the menu.
    /// Open: `Up` / `Down` move the highlight, `Enter` selects and closes,
    /// `Space` or `Escape` close without selecting.
    pub fn handle_key(&self, state: &mut DropdownState, key: &KeyEvent) -> bool {
        if self.disabled || !key.is_press() {
            return false;
        }
        if !state.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => self.open(state),
                _ => false,
            };
        }
        match key.code {
            KeyCode::Up => self.highlight_previous(state),
            KeyCode::Down => self.highlight_next(state),
            KeyCode::Enter => {
                let highlighted = state.highlighted;
                self.select(state, highlighted)
            }
            KeyCode::Char(' ') | KeyCode::Escape => self.close(state),
            _ => false,
        }
    }

    /// Mouse handling. The trigger registers [`HitRegion::Button`]; menu
    /// rows register [`HitRegion::Content`] with their item index.
    pub fn handle_mouse(
        &self,
        state: &mut DropdownState,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> MouseResult {
        if self.disabled || !event.is_left_click() {
            return MouseResult::Ignored;
        }
        let Some((id, region, data)) = hit else {
            if state.open {
                self.close(state);
                return MouseResult::Toggled;
            }
            return MouseResult::Ignored;
        };
        if Some(id) != self.hit_id {
            return MouseResult::Ignored;
        }
        match region {
            HitRegion::Button => {
                self.toggle(state);
                MouseResult::Toggled
            }
            HitRegion::Content if state.open => {
                let idx = data as usize;
                let already = state.selected == Some(idx);
                if !self.select(state, idx) {
                    MouseResult::Ignored
                } else if already {
                    MouseResult::Activated(idx)
                } else {
                    MouseResult::Selected(idx)
                }
            }
            _ => MouseResult::Ignored,
        }
    }

    fn content_width(&self) -> usize {
        self.items
            .iter()
            .map(|item| display_width(&item.label))
            .chain(std::iter::once(display_width(&self.placeholder)))
            .max()
            .unwrap_or(0)
    }

    fn render_trigger(&self, line: Rect, frame: &mut Frame, state: &DropdownState, width: u16) {
        let style = if self.disabled {
            self.disabled_style.merge(&self.style)
        } else {
            self.style
        };
        let trigger = Rect::new(line.x, line.y, width, 1);
        set_style_area(&mut frame.buffer, trigger, style);
        let right = trigger.right();
        let glyph = if state.open {
            &self.open_glyph
        } else {
            &self.closed_glyph
        };
        let glyph_w = display_width(glyph) as u16;
        let text_right = right.saturating_sub(glyph_w + 1).max(line.x);
        let text = self.selected_label(state).unwrap_or(&self.placeholder);
        draw_text_span(frame, line.x.saturating_add(1), line.y, text, style, text_right);
        if glyph_w < width {
            draw_text_span(frame, right - glyph_w - 1, line.y, glyph, style, right);
        }
        if let Some(id) = self.hit_id
            && !self.disabled
        {
            frame.register_hit(trigger, id, HitRegion::Button, 0);
        }
    }

    fn render_menu(&self, area: Rect, frame: &mut Frame, state: &DropdownState, width: u16) {
        for (i, item) in self.items.iter().enumerate() {
            let Ok(offset) = u16::try_from(i + 1) else {
                break;
            };
            let line = area.row(offset);
            if line.is_empty() {
                break;
            }
            let row = Rect::new(line.x, line.y, width, 1);
            let highlighted = i == state.highlighted && !item.disabled;
            let style = if item.disabled {
                self.disabled_style.merge(&self.style)
            } else if highlighted {
                self.highlight_style.merge(&self.style)
            } else {
                self.style
            };
            set_style_area(&mut frame.buffer, row, style);
            let marker = if highlighted { ">" } else { " " };
            let x = draw_text_span(frame, row.x, row.y, marker, style, row.right());
            draw_text_span(frame, x, row.y, &item.label, style, row.right());
            if let Some(id) = self.hit_id
                && !item.disabled
            {
                frame.register_hit(row, id, HitRegion::Content, i as HitData);
            }
        }
    }
}

impl StatefulWidget for Dropdown {
    type State = DropdownState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }
        if state.selected.is_some_and(|i| i >= self.items.len()) {
            state.selected = None;
        }
        if self.disabled {
            state.open = false;
        }
        // Padding on both sides of the text plus the glyph column.
        let glyph_w = display_width(&self.open_glyph).max(display_width(&self.closed_glyph));
        let wanted = self.content_width() + glyph_w + 3;
        let width = u16::try_from(wanted).unwrap_or(u16::MAX).min(area.width);
        self.render_trigger(area.row(0), frame, state, width);
        if state.open {
            self.render_menu(area, frame, state, width);
        }
    }
}
