#![forbid(unsafe_code)]

//! Navigation bar.
//!
//! A list of links, optionally grouped under collapsible headers, laid out
//! horizontally or vertically. Items are addressed by their *flat index*:
//! the position of the item when every group is expanded.
//!
//! ```
//! use fkit_widgets::nav::{NavBar, NavGroup, NavItem, NavState};
//!
//! let nav = NavBar::new()
//!     .item(NavItem::new("Home"))
//!     .group(NavGroup::new("Docs").item(NavItem::new("Guide")).item(NavItem::new("API")));
//! let mut state = NavState::default();
//! assert!(nav.select(&mut state, 2));
//! assert_eq!(state.active, Some(2));
//! ```

use crate::mouse::MouseResult;
use crate::{Orientation, StatefulWidget, draw_text_span};
use fkit_core::event::{KeyCode, KeyEvent, MouseEvent};
use fkit_core::geometry::Rect;
use fkit_render::frame::{Frame, HitData, HitId, HitRegion};
use fkit_style::{Style, Theme};
use std::collections::BTreeMap;

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    label: String,
    disabled: bool,
}

impl NavItem {
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

/// A titled, collapsible run of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    title: String,
    items: Vec<NavItem>,
    expanded: bool,
}

impl NavGroup {
    /// New group, expanded by default.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            expanded: true,
        }
    }

    #[must_use]
    pub fn item(mut self, item: NavItem) -> Self {
        self.items.push(item);
        self
    }

    /// Initial expansion; [`NavState`] tracks later changes.
    #[must_use]
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NavEntry {
    Item(NavItem),
    Group(NavGroup),
}

/// State for a [`NavBar`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    /// Flat index of the current page, if any.
    pub active: Option<usize>,
    /// Flat index of the keyboard cursor.
    pub focused: usize,
    expanded: BTreeMap<usize, bool>,
}

impl NavState {
    /// Whether group `group` is expanded, falling back to the group's
    /// initial setting.
    #[must_use]
    pub fn is_expanded(&self, nav: &NavBar<'_>, group: usize) -> bool {
        match self.expanded.get(&group) {
            Some(&expanded) => expanded,
            None => nav.group_at(group).is_some_and(|g| g.expanded),
        }
    }
}

/// One item in flat order, with where it sits.
#[derive(Debug, Clone, Copy)]
struct Slot<'n> {
    item: &'n NavItem,
    visible: bool,
}

/// Navigation bar widget.
#[derive(Debug, Clone)]
pub struct NavBar<'a> {
    entries: Vec<NavEntry>,
    orientation: Orientation,
    style: Style,
    active_style: Style,
    focus_style: Style,
    disabled_style: Style,
    header_style: Style,
    separator: &'a str,
    expanded_glyph: String,
    collapsed_glyph: String,
    hit_id: Option<HitId>,
}

impl Default for NavBar<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> NavBar<'a> {
    #[must_use]
    pub fn new() -> Self {
        let glyphs = Theme::default().glyphs;
        Self {
            entries: Vec::new(),
            orientation: Orientation::Horizontal,
            style: Style::default(),
            active_style: Style::new().bold(),
            focus_style: Style::new().reverse(),
            disabled_style: Style::new().dim(),
            header_style: Style::new().bold(),
            separator: " ",
            expanded_glyph: glyphs.nav_expanded,
            collapsed_glyph: glyphs.nav_collapsed,
            hit_id: None,
        }
    }

    #[must_use]
    pub fn item(mut self, item: NavItem) -> Self {
        self.entries.push(NavEntry::Item(item));
        self
    }

    #[must_use]
    pub fn group(mut self, group: NavGroup) -> Self {
        self.entries.push(NavEntry::Group(group));
        self
    }

    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn active_style(mut self, style: Style) -> Self {
        self.active_style = style;
        self
    }

    #[must_use]
    pub fn separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.style = theme.text_style();
        self.active_style = theme.accent_style();
        self.focus_style = Style::new().bg(theme.surface);
        self.disabled_style = Style::new().fg(theme.disabled).dim();
        self.header_style = theme.muted_style().bold();
        self.expanded_glyph = theme.glyphs.nav_expanded.clone();
        self.collapsed_glyph = theme.glyphs.nav_collapsed.clone();
        self
    }

    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Total number of items, counting those inside groups.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match entry {
                NavEntry::Item(_) => 1,
                NavEntry::Group(group) => group.items.len(),
            })
            .sum()
    }

    /// Number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, NavEntry::Group(_)))
            .count()
    }

    fn group_at(&self, group: usize) -> Option<&NavGroup> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                NavEntry::Group(g) => Some(g),
                NavEntry::Item(_) => None,
            })
            .nth(group)
    }

    fn slots(&self, state: &NavState) -> Vec<Slot<'_>> {
        let mut out = Vec::with_capacity(self.item_count());
        let mut group_idx = 0;
        for entry in &self.entries {
            match entry {
                NavEntry::Item(item) => out.push(Slot {
                    item,
                    visible: true,
                }),
                NavEntry::Group(group) => {
                    let visible = state.is_expanded(self, group_idx);
                    out.extend(group.items.iter().map(|item| Slot { item, visible }));
                    group_idx += 1;
                }
            }
        }
        out
    }

    fn is_reachable(slots: &[Slot<'_>], idx: usize) -> bool {
        slots
            .get(idx)
            .is_some_and(|slot| slot.visible && !slot.item.disabled)
    }

    /// Make item `index` the active page (and move focus to it).
    pub fn select(&self, state: &mut NavState, index: usize) -> bool {
        let slots = self.slots(state);
        if !Self::is_reachable(&slots, index) {
            return false;
        }
        state.focused = index;
        if state.active == Some(index) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "nav.activate", from = ?state.active, to = index);
        state.active = Some(index);
        true
    }

    /// Move focus to the next reachable item. Stops at the last one.
    pub fn focus_next(&self, state: &mut NavState) -> bool {
        let slots = self.slots(state);
        let from = state.focused.saturating_add(1);
        match (from..slots.len()).find(|&i| Self::is_reachable(&slots, i)) {
            Some(i) => {
                state.focused = i;
                true
            }
            None => false,
        }
    }

    /// Move focus to the previous reachable item. Stops at the first one.
    pub fn focus_previous(&self, state: &mut NavState) -> bool {
        let slots = self.slots(state);
        let upto = state.focused.min(slots.len());
        match (0..upto).rev().find(|&i| Self::is_reachable(&slots, i)) {
            Some(i) => {
                state.focused = i;
                true
            }
            None => false,
        }
    }

    /// Expand or collapse group `group`. Returns the new expansion, or
    /// `None` if there is no such group.
    pub fn toggle_group(&self, state: &mut NavState, group: usize) -> Option<bool> {
        self.group_at(group)?;
        let expanded = !state.is_expanded(self, group);
        state.expanded.insert(group, expanded);
        Some(expanded)
    }

    /// Keyboard handling.
    ///
    /// - `Left` / `Right` (horizontal) or `Up` / `Down` (vertical) move focus,
    ///   skipping disabled items and collapsed groups
    /// - `Enter` / `Space` activate the focused item
    pub fn handle_key(&self, state: &mut NavState, key: &KeyEvent) -> bool {
        if !key.is_press() {
            return false;
        }
        let (back, forward) = match self.orientation {
            Orientation::Horizontal => (KeyCode::Left, KeyCode::Right),
            Orientation::Vertical => (KeyCode::Up, KeyCode::Down),
        };
        match key.code {
            code if code == back => self.focus_previous(state),
            code if code == forward => self.focus_next(state),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let focused = state.focused;
                self.select(state, focused)
            }
            _ => false,
        }
    }

    /// Mouse handling. Items register [`HitRegion::Content`] with their flat
    /// index; group headers register [`HitRegion::Button`] with their group
    /// index.
    pub fn handle_mouse(
        &self,
        state: &mut NavState,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> MouseResult {
        if !event.is_left_click() {
            return MouseResult::Ignored;
        }
        let Some((id, region, data)) = hit else {
            return MouseResult::Ignored;
        };
        if Some(id) != self.hit_id {
            return MouseResult::Ignored;
        }
        let idx = data as usize;
        match region {
            HitRegion::Content => {
                if state.active == Some(idx) {
                    state.focused = idx;
                    MouseResult::Activated(idx)
                } else if self.select(state, idx) {
                    MouseResult::Selected(idx)
                } else {
                    MouseResult::Ignored
                }
            }
            HitRegion::Button => match self.toggle_group(state, idx) {
                Some(_) => MouseResult::Toggled,
                None => MouseResult::Ignored,
            },
            _ => MouseResult::Ignored,
        }
    }

    fn item_label(item: &NavItem, active: bool) -> String {
        if active {
            format!("[{}]", item.label)
        } else {
            format!(" {} ", item.label)
        }
    }

    fn item_style(&self, item: &NavItem, index: usize, state: &NavState) -> Style {
        if item.disabled {
            return self.disabled_style.merge(&self.style);
        }
        let mut style = self.style;
        if state.active == Some(index) {
            style = self.active_style.merge(&style);
        }
        if state.focused == index {
            style = self.focus_style.merge(&style);
        }
        style
    }

    fn draw_item(
        &self,
        frame: &mut Frame,
        at: (u16, u16),
        max_x: u16,
        item: &NavItem,
        index: usize,
        state: &NavState,
    ) -> u16 {
        let (x, y) = at;
        let label = Self::item_label(item, state.active == Some(index));
        let style = self.item_style(item, index, state);
        let end = draw_text_span(frame, x, y, &label, style, max_x);
        if let Some(id) = self.hit_id
            && !item.disabled
            && end > x
        {
            frame.register_hit(
                Rect::new(x, y, end - x, 1),
                id,
                HitRegion::Content,
                index as HitData,
            );
        }
        end
    }

    fn draw_header(
        &self,
        frame: &mut Frame,
        at: (u16, u16),
        max_x: u16,
        group: &NavGroup,
        group_idx: usize,
        expanded: bool,
    ) -> u16 {
        let (x, y) = at;
        let glyph = if expanded {
            &self.expanded_glyph
        } else {
            &self.collapsed_glyph
        };
        let style = self.header_style.merge(&self.style);
        let mut end = draw_text_span(frame, x, y, glyph, style, max_x);
        end = draw_text_span(frame, end, y, " ", style, max_x);
        end = draw_text_span(frame, end, y, &group.title, style, max_x);
        if let Some(id) = self.hit_id
            && end > x
        {
            frame.register_hit(
                Rect::new(x, y, end - x, 1),
                id,
                HitRegion::Button,
                group_idx as HitData,
            );
        }
        end
    }

    fn render_horizontal(&self, area: Rect, frame: &mut Frame, state: &NavState) {
        let right = area.right();
        let y = area.y;
        let mut x = area.x;
        let mut flat = 0usize;
        let mut group_idx = 0usize;
        let mut first = true;
        let gap = |frame: &mut Frame, x: u16, first: &mut bool| -> u16 {
            if std::mem::replace(first, false) {
                x
            } else {
                draw_text_span(frame, x, y, self.separator, self.style, right)
            }
        };
        for entry in &self.entries {
            if x >= right {
                break;
            }
            match entry {
                NavEntry::Item(item) => {
                    x = gap(frame, x, &mut first);
                    x = self.draw_item(frame, (x, y), right, item, flat, state);
                    flat += 1;
                }
                NavEntry::Group(group) => {
                    let expanded = state.is_expanded(self, group_idx);
                    x = gap(frame, x, &mut first);
                    x = self.draw_header(frame, (x, y), right, group, group_idx, expanded);
                    for item in &group.items {
                        if expanded && x < right {
                            x = gap(frame, x, &mut first);
                            x = self.draw_item(frame, (x, y), right, item, flat, state);
                        }
                        flat += 1;
                    }
                    group_idx += 1;
                }
            }
        }
    }

    fn render_vertical(&self, area: Rect, frame: &mut Frame, state: &NavState) {
        let mut row = 0u16;
        let mut flat = 0usize;
        let mut group_idx = 0usize;
        for entry in &self.entries {
            match entry {
                NavEntry::Item(item) => {
                    let line = area.row(row);
                    if !line.is_empty() {
                        self.draw_item(frame, (line.x, line.y), line.right(), item, flat, state);
                    }
                    row = row.saturating_add(1);
                    flat += 1;
                }
                NavEntry::Group(group) => {
                    let expanded = state.is_expanded(self, group_idx);
                    let line = area.row(row);
                    if !line.is_empty() {
                        self.draw_header(
                            frame,
                            (line.x, line.y),
                            line.right(),
                            group,
                            group_idx,
                            expanded,
                        );
                    }
                    row = row.saturating_add(1);
                    for item in &group.items {
                        if expanded {
                            let line = area.row(row);
                            if !line.is_empty() {
                                let x = line.x.saturating_add(2).min(line.right());
                                self.draw_item(frame, (x, line.y), line.right(), item, flat, state);
                            }
                            row = row.saturating_add(1);
                        }
                        flat += 1;
                    }
                    group_idx += 1;
                }
            }
        }
    }
}

impl StatefulWidget for NavBar<'_> {
    type State = NavState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if area.is_empty() || self.entries.is_empty() {
            return;
        }
        let count = self.item_count();
        if state.active.is_some_and(|a| a >= count) {
            state.active = None;
        }
        state.focused = state.focused.min(count.saturating_sub(1));
        match self.orientation {
            Orientation::Horizontal => self.render_horizontal(area, frame, state),
            Orientation::Vertical => self.render_vertical(area, frame, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::row_text;
    use fkit_core::event::{MouseButton, MouseEventKind};

    fn site() -> NavBar<'static> {
        NavBar::new()
            .item(NavItem::new("Home"))
            .group(
                NavGroup::new("Docs")
                    .item(NavItem::new("Guide"))
                    .item(NavItem::new("API").disabled(true)),
            )
            .item(NavItem::new("Blog"))
    }

    fn click() -> MouseEvent {
        MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 0, 0)
    }

    #[test]
    fn counts_items_across_groups() {
        let nav = site();
        assert_eq!(nav.item_count(), 4);
        assert_eq!(nav.group_count(), 1);
    }

    #[test]
    fn horizontal_render_brackets_active() {
        let nav = site();
        let mut state = NavState::default();
        nav.select(&mut state, 0);
        let mut frame = Frame::new(40, 1);
        StatefulWidget::render(&nav, Rect::new(0, 0, 40, 1), &mut frame, &mut state);
        assert_eq!(
            row_text(&frame, 0).trim_end(),
            "[Home] ▾ Docs  Guide   API   Blog"
        );
    }

    #[test]
    fn vertical_render_indents_group_items() {
        let nav = site().orientation(Orientation::Vertical);
        let mut state = NavState::default();
        nav.select(&mut state, 3);
        let mut frame = Frame::new(12, 6);
        StatefulWidget::render(&nav, Rect::new(0, 0, 12, 6), &mut frame, &mut state);
        assert_eq!(
            frame.buffer.to_lines(),
            vec![
                " Home".to_string(),
                "▾ Docs".into(),
                "   Guide".into(),
                "   API".into(),
                "[Blog]".into(),
                String::new(),
            ]
        );
    }

    #[test]
    fn keyboard_skips_disabled_items() {
        let nav = site();
        let mut state = NavState::default();
        assert!(nav.handle_key(&mut state, &KeyEvent::new(KeyCode::Right)));
        assert_eq!(state.focused, 1);
        assert!(nav.handle_key(&mut state, &KeyEvent::new(KeyCode::Right)));
        assert_eq!(state.focused, 3);
        assert!(!nav.handle_key(&mut state, &KeyEvent::new(KeyCode::Right)));
        assert!(nav.handle_key(&mut state, &KeyEvent::new(KeyCode::Enter)));
        assert_eq!(state.active, Some(3));
        assert!(nav.handle_key(&mut state, &KeyEvent::new(KeyCode::Left)));
        assert_eq!(state.focused, 1);
    }

    #[test]
    fn disabled_item_cannot_be_selected() {
        let nav = site();
        let mut state = NavState::default();
        assert!(!nav.select(&mut state, 2));
        assert_eq!(state.active, None);
    }

    #[test]
    fn collapsed_group_hides_items_from_focus() {
        let nav = site().orientation(Orientation::Vertical);
        let mut state = NavState::default();
        assert_eq!(nav.toggle_group(&mut state, 0), Some(false));
        assert!(!state.is_expanded(&nav, 0));
        assert!(nav.handle_key(&mut state, &KeyEvent::new(KeyCode::Down)));
        assert_eq!(state.focused, 3);
        assert!(!nav.select(&mut state, 1));

        let mut frame = Frame::new(10, 4);
        StatefulWidget::render(&nav, Rect::new(0, 0, 10, 4), &mut frame, &mut state);
        assert_eq!(frame.buffer.to_lines()[1], "▸ Docs");
        assert_eq!(frame.buffer.to_lines()[2], " Blog");
        assert_eq!(nav.toggle_group(&mut state, 5), None);
    }

    #[test]
    fn initially_collapsed_group() {
        let nav = NavBar::new().group(NavGroup::new("More").expanded(false).item(NavItem::new("X")));
        let mut state = NavState::default();
        assert!(!state.is_expanded(&nav, 0));
        assert!(!nav.select(&mut state, 0));
        nav.toggle_group(&mut state, 0);
        assert!(nav.select(&mut state, 0));
    }

    #[test]
    fn mouse_selects_items_and_toggles_groups() {
        let nav = site().orientation(Orientation::Vertical).hit_id(HitId::new(7));
        let mut state = NavState::default();
        let mut frame = Frame::with_hit_grid(12, 6);
        StatefulWidget::render(&nav, Rect::new(0, 0, 12, 6), &mut frame, &mut state);

        let guide = frame.hit_test(4, 2);
        assert_eq!(guide, Some((HitId::new(7), HitRegion::Content, 1)));
        assert_eq!(nav.handle_mouse(&mut state, &click(), guide), MouseResult::Selected(1));
        assert_eq!(nav.handle_mouse(&mut state, &click(), guide), MouseResult::Activated(1));

        assert!(frame.hit_test(4, 3).is_none(), "disabled item has no region");

        let header = frame.hit_test(0, 1);
        assert_eq!(header, Some((HitId::new(7), HitRegion::Button, 0)));
        assert_eq!(nav.handle_mouse(&mut state, &click(), header), MouseResult::Toggled);
        assert!(!state.is_expanded(&nav, 0));
    }

    #[test]
    fn render_clamps_stale_state() {
        let nav = NavBar::new().item(NavItem::new("Only"));
        let mut state = NavState {
            active: Some(9),
            focused: 9,
            ..NavState::default()
        };
        let mut frame = Frame::new(10, 1);
        StatefulWidget::render(&nav, Rect::new(0, 0, 10, 1), &mut frame, &mut state);
        assert_eq!(state.active, None);
        assert_eq!(state.focused, 0);
    }
}
