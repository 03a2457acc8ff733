#![forbid(unsafe_code)]

//! Tabs widget.
//!
//! A horizontal or vertical tab strip with keyboard navigation, overflow
//! markers, disabled tabs, closable tabs, and reordering helpers.
//!
//! Horizontal tabs that do not fit scroll sideways behind `<` / `>` markers;
//! vertical tabs scroll by rows behind `^` / `v` markers. Either way the
//! active tab is kept in view.

use crate::mouse::MouseResult;
use crate::{Orientation, StatefulWidget, Widget, draw_text_span, set_style_area};
use fkit_core::event::{KeyCode, KeyEvent, MouseEvent};
use fkit_core::geometry::Rect;
use fkit_core::text_width::display_width;
use fkit_render::frame::{Frame, HitData, HitId, HitRegion};
use fkit_style::{Style, Theme};
#[cfg(feature = "tracing")]
use web_time::Instant;

/// A single tab entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    title: String,
    style: Style,
    closable: bool,
    disabled: bool,
}

impl Tab {
    /// Create a new tab with a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            style: Style::default(),
            closable: false,
            disabled: false,
        }
    }

    /// Set style for this tab.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set whether this tab can be closed.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Disabled tabs are drawn but can never become active.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn is_closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// State for a [`Tabs`] widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabsState {
    /// Active tab index.
    pub active: usize,
    /// First visible tab (left-most or top-most) when overflow scrolling is
    /// active.
    pub offset: usize,
}

impl TabsState {
    fn switch_to(&mut self, next: usize, _reason: &'static str) -> bool {
        if self.active == next {
            return false;
        }
        #[cfg(feature = "tracing")]
        let old = self.active;
        self.active = next;
        if self.active < self.offset {
            self.offset = self.active;
        }
        #[cfg(feature = "tracing")]
        Self::log_switch(_reason, old, self.active);
        true
    }

    #[cfg(feature = "tracing")]
    fn log_switch(reason: &str, from: usize, to: usize) {
        tracing::debug!(message = "tabs.switch", reason, from, to);
    }
}

/// Visible window of tabs plus which overflow markers to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VisibleRange {
    start: usize,
    end: usize,
    before: bool,
    after: bool,
}

impl VisibleRange {
    const EMPTY: Self = Self {
        start: 0,
        end: 0,
        before: false,
        after: false,
    };
}

/// Tabs widget.
#[derive(Debug, Clone)]
pub struct Tabs<'a> {
    tabs: Vec<Tab>,
    orientation: Orientation,
    style: Style,
    active_style: Style,
    disabled_style: Style,
    separator: &'a str,
    close_marker: &'a str,
    overflow_before_marker: Option<&'a str>,
    overflow_after_marker: Option<&'a str>,
    hit_id: Option<HitId>,
}

impl<'a> Tabs<'a> {
    /// Create tabs from an iterator.
    #[must_use]
    pub fn new(tabs: impl IntoIterator<Item = Tab>) -> Self {
        Self {
            tabs: tabs.into_iter().collect(),
            orientation: Orientation::Horizontal,
            style: Style::default(),
            active_style: Style::default(),
            disabled_style: Style::new().dim(),
            separator: " ",
            close_marker: " x",
            overflow_before_marker: None,
            overflow_after_marker: None,
            hit_id: None,
        }
    }

    /// Lay tabs out side by side (default) or one per row.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set base style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set active tab style.
    #[must_use]
    pub fn active_style(mut self, style: Style) -> Self {
        self.active_style = style;
        self
    }

    #[must_use]
    pub fn disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = style;
        self
    }

    /// Take base, active, and disabled styles from a theme.
    #[must_use]
    pub fn theme(self, theme: &Theme) -> Self {
        self.style(theme.text_style())
            .active_style(theme.accent_style())
            .disabled_style(Style::new().fg(theme.disabled).dim())
    }

    /// Set separator between horizontal tabs.
    #[must_use]
    pub fn separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    /// Override the overflow markers (`<`/`>` horizontal, `^`/`v` vertical).
    #[must_use]
    pub fn overflow_markers(mut self, before: &'a str, after: &'a str) -> Self {
        self.overflow_before_marker = Some(before);
        self.overflow_after_marker = Some(after);
        self
    }

    /// Set hit id for mouse interactions.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Immutable tab slice.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn is_enabled(&self, idx: usize) -> bool {
        self.tabs.get(idx).is_some_and(|tab| !tab.disabled)
    }

    /// Nearest enabled tab to `idx`: `idx` itself, then left, then right.
    fn nearest_enabled(&self, idx: usize) -> Option<usize> {
        let idx = idx.min(self.tabs.len().saturating_sub(1));
        (0..=idx)
            .rev()
            .chain(idx + 1..self.tabs.len())
            .find(|&i| self.is_enabled(i))
    }

    /// Active tab, if it can be active at all.
    ///
    /// Returns `None` when the strip is empty or the index stored in `state`
    /// points at a disabled tab. A strip whose tabs are all disabled never
    /// has an active tab.
    #[must_use]
    pub fn active_index(&self, state: &TabsState) -> Option<usize> {
        Some(state.active).filter(|&i| self.is_enabled(i))
    }

    /// State whose active tab is the first enabled one.
    #[must_use]
    pub fn create_state(&self) -> TabsState {
        let mut state = TabsState::default();
        self.clamp_state(&mut state);
        state
    }

    fn markers(&self) -> (&'a str, &'a str) {
        let (before, after) = match self.orientation {
            Orientation::Horizontal => ("<", ">"),
            Orientation::Vertical => ("^", "v"),
        };
        (
            self.overflow_before_marker.unwrap_or(before),
            self.overflow_after_marker.unwrap_or(after),
        )
    }

    /// Select a tab by index. Out-of-range indices clamp to the last tab;
    /// disabled targets are refused.
    pub fn select(&self, state: &mut TabsState, index: usize) -> bool {
        if self.tabs.is_empty() {
            state.active = 0;
            state.offset = 0;
            return false;
        }
        let next = index.min(self.tabs.len() - 1);
        if !self.is_enabled(next) {
            return false;
        }
        state.switch_to(next, "select")
    }

    /// Move to the next enabled tab. Stops at the last one.
    pub fn next(&self, state: &mut TabsState) -> bool {
        let from = state.active.saturating_add(1);
        match (from..self.tabs.len()).find(|&i| self.is_enabled(i)) {
            Some(i) => state.switch_to(i, "next"),
            None => false,
        }
    }

    /// Move to the previous enabled tab. Stops at the first one.
    pub fn previous(&self, state: &mut TabsState) -> bool {
        let upto = state.active.min(self.tabs.len());
        match (0..upto).rev().find(|&i| self.is_enabled(i)) {
            Some(i) => state.switch_to(i, "previous"),
            None => false,
        }
    }

    /// Handle keyboard tab switching.
    ///
    /// Supported:
    /// - `Left` / `Right` (horizontal) or `Up` / `Down` (vertical)
    /// - `Home` / `End`
    /// - number keys `1..9`
    pub fn handle_key(&self, state: &mut TabsState, key: &KeyEvent) -> bool {
        if !key.is_press() {
            return false;
        }
        let (back, forward) = match self.orientation {
            Orientation::Horizontal => (KeyCode::Left, KeyCode::Right),
            Orientation::Vertical => (KeyCode::Up, KeyCode::Down),
        };
        match key.code {
            code if code == back => self.previous(state),
            code if code == forward => self.next(state),
            KeyCode::Home => match (0..self.tabs.len()).find(|&i| self.is_enabled(i)) {
                Some(i) => state.switch_to(i, "home"),
                None => false,
            },
            KeyCode::End => match (0..self.tabs.len()).rev().find(|&i| self.is_enabled(i)) {
                Some(i) => state.switch_to(i, "end"),
                None => false,
            },
            KeyCode::Char(ch) if ('1'..='9').contains(&ch) => {
                let idx = ch as usize - '1' as usize;
                if idx >= self.tabs.len() {
                    false
                } else {
                    self.select(state, idx)
                }
            }
            _ => false,
        }
    }

    /// Handle mouse selection for tabs.
    ///
    /// Hit data convention: each tab registers `data = tab_index as u64`.
    pub fn handle_mouse(
        &self,
        state: &mut TabsState,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> MouseResult {
        if !event.is_left_click() {
            return MouseResult::Ignored;
        }
        if let Some((id, HitRegion::Content, data)) = hit
            && Some(id) == self.hit_id
        {
            let idx = data as usize;
            if self.is_enabled(idx) {
                if state.active == idx {
                    return MouseResult::Activated(idx);
                }
                self.select(state, idx);
                return MouseResult::Selected(idx);
            }
        }
        MouseResult::Ignored
    }

    fn tab_label(&self, tab: &Tab, active: bool) -> String {
        let mut out = String::new();
        out.push(if active { '[' } else { ' ' });
        out.push_str(tab.title());
        if tab.is_closable() {
            out.push_str(self.close_marker);
        }
        out.push(if active { ']' } else { ' ' });
        out
    }

    fn tab_style(&self, tab: &Tab, active: bool) -> Style {
        let base = tab.style.merge(&self.style);
        if tab.disabled {
            self.disabled_style.merge(&base)
        } else if active {
            self.active_style.merge(&base)
        } else {
            base
        }
    }

    fn visible_end(&self, state: &TabsState, width: usize) -> usize {
        if self.tabs.is_empty() || width == 0 {
            return state.offset;
        }
        let sep_width = display_width(self.separator);
        let mut used = 0usize;
        let mut end = state.offset;

        for idx in state.offset..self.tabs.len() {
            let w = display_width(&self.tab_label(&self.tabs[idx], idx == state.active));
            if end == state.offset {
                // At least one tab is always shown; drawing clips it.
                used = w;
                end = idx + 1;
                if used > width {
                    break;
                }
                continue;
            }
            if used.saturating_add(sep_width).saturating_add(w) > width {
                break;
            }
            used = used.saturating_add(sep_width).saturating_add(w);
            end = idx + 1;
        }

        end.max((state.offset + 1).min(self.tabs.len()))
    }

    fn total_width(&self, state: &TabsState) -> usize {
        let sep_width = display_width(self.separator);
        self.tabs
            .iter()
            .enumerate()
            .map(|(idx, tab)| display_width(&self.tab_label(tab, idx == state.active)))
            .sum::<usize>()
            .saturating_add(sep_width.saturating_mul(self.tabs.len().saturating_sub(1)))
    }

    fn horizontal_range(&self, state: &mut TabsState, area_width: usize) -> VisibleRange {
        if self.total_width(state) <= area_width {
            state.offset = 0;
            return VisibleRange {
                start: 0,
                end: self.tabs.len(),
                before: false,
                after: false,
            };
        }

        // Overflowing: reserve room for both markers so showing one never
        // pushes the active tab out of view.
        let (before_marker, after_marker) = self.markers();
        let available = area_width
            .saturating_sub(display_width(before_marker))
            .saturating_sub(display_width(after_marker));
        let mut end = self.visible_end(state, available);
        if state.active >= end {
            state.offset = state.active;
            end = self.visible_end(state, available);
        }

        VisibleRange {
            start: state.offset,
            end,
            before: state.offset > 0,
            after: end < self.tabs.len(),
        }
    }

    fn vertical_range(&self, state: &mut TabsState, height: usize) -> VisibleRange {
        let len = self.tabs.len();
        if len <= height {
            state.offset = 0;
            return VisibleRange {
                start: 0,
                end: len,
                before: false,
                after: false,
            };
        }
        if height < 3 {
            // No room for markers; just keep the active tab in view.
            if state.active >= state.offset + height {
                state.offset = state.active + 1 - height;
            }
            return VisibleRange {
                start: state.offset,
                end: (state.offset + height).min(len),
                before: false,
                after: false,
            };
        }
        loop {
            let before = state.offset > 0;
            let mut rows = height - usize::from(before);
            let after = state.offset + rows < len;
            if after {
                rows -= 1;
            }
            if state.active >= state.offset + rows {
                state.offset = state.active + 1 - rows;
                continue;
            }
            return VisibleRange {
                start: state.offset,
                end: (state.offset + rows).min(len),
                before,
                after,
            };
        }
    }

    fn clamp_state(&self, state: &mut TabsState) {
        let last = self.tabs.len().saturating_sub(1);
        state.active = self
            .nearest_enabled(state.active)
            .unwrap_or(state.active.min(last));
        state.offset = state.offset.min(last).min(state.active);
    }

    fn register_tab_hit(&self, frame: &mut Frame, rect: Rect, idx: usize) {
        if let Some(id) = self.hit_id
            && self.is_enabled(idx)
        {
            frame.register_hit(rect, id, HitRegion::Content, idx as HitData);
        }
    }

    fn render_horizontal(&self, area: Rect, frame: &mut Frame, state: &mut TabsState) -> bool {
        let range = self.horizontal_range(state, area.width as usize);
        let (before_marker, after_marker) = self.markers();

        set_style_area(&mut frame.buffer, area.row(0), self.style);

        let mut left = area.x;
        let mut right = area.right();
        if range.before {
            draw_text_span(frame, area.x, area.y, before_marker, self.style, area.right());
            left = left.saturating_add(display_width(before_marker) as u16);
        }
        if range.after {
            right = right.saturating_sub(display_width(after_marker) as u16);
            draw_text_span(frame, right, area.y, after_marker, self.style, area.right());
        }

        let mut x = left;
        for idx in range.start..range.end {
            if x >= right {
                break;
            }
            if idx > range.start && !self.separator.is_empty() {
                x = draw_text_span(frame, x, area.y, self.separator, self.style, right);
                if x >= right {
                    break;
                }
            }
            let tab = &self.tabs[idx];
            let active = idx == state.active && self.is_enabled(idx);
            let label = self.tab_label(tab, active);
            let before = x;
            x = draw_text_span(frame, x, area.y, &label, self.tab_style(tab, active), right);
            let width = x.saturating_sub(before).max(1);
            self.register_tab_hit(frame, Rect::new(before, area.y, width, 1), idx);
        }
        range.before || range.after
    }

    fn render_vertical(&self, area: Rect, frame: &mut Frame, state: &mut TabsState) -> bool {
        let range = self.vertical_range(state, area.height as usize);
        let (before_marker, after_marker) = self.markers();

        set_style_area(&mut frame.buffer, area, self.style);

        let mut row = 0u16;
        if range.before {
            draw_text_span(frame, area.x, area.y, before_marker, self.style, area.right());
            row += 1;
        }
        for idx in range.start..range.end {
            let line = area.row(row);
            if line.is_empty() {
                break;
            }
            let tab = &self.tabs[idx];
            let active = idx == state.active && self.is_enabled(idx);
            let label = self.tab_label(tab, active);
            let end = draw_text_span(
                frame,
                line.x,
                line.y,
                &label,
                self.tab_style(tab, active),
                line.right(),
            );
            let width = end.saturating_sub(line.x).max(1);
            self.register_tab_hit(frame, Rect::new(line.x, line.y, width, 1), idx);
            row += 1;
        }
        if range.after {
            let last = area.row(area.height - 1);
            draw_text_span(frame, last.x, last.y, after_marker, self.style, last.right());
        }
        range.before || range.after
    }

    /// Close the active tab if it is closable.
    pub fn close_active(&mut self, state: &mut TabsState) -> Option<Tab> {
        if self.tabs.is_empty() {
            state.active = 0;
            state.offset = 0;
            return None;
        }
        state.active = state.active.min(self.tabs.len() - 1);
        if !self.tabs[state.active].is_closable() {
            return None;
        }
        let removed = self.tabs.remove(state.active);
        if self.tabs.is_empty() {
            state.active = 0;
            state.offset = 0;
            return Some(removed);
        }
        self.clamp_state(state);
        Some(removed)
    }

    /// Move active tab one position to the left.
    pub fn move_active_left(&mut self, state: &mut TabsState) -> bool {
        if self.tabs.len() < 2 || state.active == 0 || state.active >= self.tabs.len() {
            return false;
        }
        self.tabs.swap(state.active, state.active - 1);
        state.active -= 1;
        state.offset = state.offset.min(state.active);
        true
    }

    /// Move active tab one position to the right.
    pub fn move_active_right(&mut self, state: &mut TabsState) -> bool {
        if self.tabs.len() < 2 || state.active.saturating_add(1) >= self.tabs.len() {
            return false;
        }
        self.tabs.swap(state.active, state.active + 1);
        state.active += 1;
        true
    }
}

impl StatefulWidget for Tabs<'_> {
    type State = TabsState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let render_start = Instant::now();

        if area.is_empty() || self.tabs.is_empty() {
            return;
        }
        self.clamp_state(state);

        #[cfg(feature = "tracing")]
        let render_span = tracing::debug_span!(
            "tabs.render",
            tab_count = self.tabs.len(),
            active_tab = state.active,
            vertical = self.orientation == Orientation::Vertical,
            overflow = tracing::field::Empty,
            render_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _render_guard = render_span.enter();

        let _overflow = match self.orientation {
            Orientation::Horizontal => self.render_horizontal(area, frame, state),
            Orientation::Vertical => self.render_vertical(area, frame, state),
        };

        #[cfg(feature = "tracing")]
        {
            render_span.record("overflow", _overflow);
            let elapsed_us = render_start.elapsed().as_micros() as u64;
            render_span.record("render_duration_us", elapsed_us);
        }
    }
}

impl Widget for Tabs<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let mut state = TabsState::default();
        StatefulWidget::render(self, area, frame, &mut state);
    }
}
