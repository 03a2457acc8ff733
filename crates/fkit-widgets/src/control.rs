#![forbid(unsafe_code)]

//! Shared machinery for glyph + label boolean controls.
//!
//! [`CheckBox`](crate::checkbox::CheckBox) and [`Toggle`](crate::toggle::Toggle)
//! differ only in their value domain and glyphs. Both wrap a [`Control`] and
//! keep their per-instance memory in a [`ControlState`].

use crate::boolean_input::{
    BooleanInputConfig, BooleanInputState, BooleanValue, ChangeOutcome, ToggleRequest,
};
use crate::draw_text_span;
use fkit_core::event::{Event, KeyCode, MouseEventKind};
use fkit_core::geometry::Rect;
use fkit_core::id::{IdSource, WidgetId};
use fkit_render::frame::{Frame, HitData, HitId, HitRegion};
use fkit_style::{InteractionState, InteractiveStyle, Theme};

/// Per-instance memory of a boolean control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState<V> {
    input: BooleanInputState<V>,
    id: WidgetId,
    focused: bool,
    hovered: bool,
}

impl<V: BooleanValue> ControlState<V> {
    pub(crate) fn new(config: &BooleanInputConfig<'_, V>, id: WidgetId) -> Self {
        Self {
            input: BooleanInputState::initialize(config),
            id,
            focused: false,
            hovered: false,
        }
    }

    /// Identifier tying the label to the input.
    #[must_use]
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// Hit-grid id this control registers its region under.
    #[must_use]
    pub fn hit_id(&self) -> HitId {
        HitId::new(self.id.hash32())
    }

    /// The reconciliation state (uncontrolled value).
    #[must_use]
    pub fn input(&self) -> &BooleanInputState<V> {
        &self.input
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Drop keyboard focus. Gaining focus goes through the widget, which
    /// knows whether it is disabled.
    pub fn blur(&mut self) {
        self.focused = false;
    }
}

/// Label, config, and styling shared by boolean controls.
#[derive(Debug)]
pub(crate) struct Control<'a, V> {
    pub(crate) config: BooleanInputConfig<'a, V>,
    pub(crate) label: String,
    pub(crate) id: Option<WidgetId>,
    pub(crate) style: InteractiveStyle,
}

impl<'a, V: BooleanValue> Control<'a, V> {
    pub(crate) fn new(label: String, theme: &Theme) -> Self {
        Self {
            config: BooleanInputConfig::new(),
            label,
            id: None,
            style: theme.control_style(),
        }
    }

    /// Create the per-instance state, drawing an id from `ids` only when the
    /// caller did not supply one.
    pub(crate) fn create_state(&self, prefix: &str, ids: &mut impl IdSource) -> ControlState<V> {
        let id = match &self.id {
            Some(id) => id.clone(),
            None => ids.next_id(prefix),
        };
        ControlState::new(&self.config, id)
    }

    pub(crate) fn value(&self, state: &ControlState<V>) -> V {
        state.input.read(&self.config)
    }

    pub(crate) fn focus(&self, state: &mut ControlState<V>) -> bool {
        if self.config.disabled {
            return false;
        }
        state.focused = true;
        true
    }

    /// Flip the displayed value as a click or Space press would.
    pub(crate) fn toggle(&mut self, state: &mut ControlState<V>) -> ChangeOutcome<V> {
        let request = ToggleRequest::flip(self.value(state));
        state.input.handle_user_toggle(&mut self.config, request)
    }

    /// Route an input event.
    ///
    /// `hit` is the frame's hit test at the mouse position, if the event is a
    /// mouse event.
    pub(crate) fn handle_event(
        &mut self,
        state: &mut ControlState<V>,
        event: &Event,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> ChangeOutcome<V> {
        if self.config.disabled {
            state.focused = false;
            state.hovered = false;
            return ChangeOutcome::Ignored;
        }
        let ours = matches!(hit, Some((id, HitRegion::Content, _)) if id == state.hit_id());
        match event {
            Event::Key(key) if key.is_press() && state.focused => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => self.toggle(state),
                _ => ChangeOutcome::Ignored,
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved => {
                    state.hovered = ours;
                    ChangeOutcome::Ignored
                }
                _ if mouse.is_left_click() && ours => {
                    state.focused = true;
                    self.toggle(state)
                }
                _ => ChangeOutcome::Ignored,
            },
            Event::Focus(gained) => {
                state.focused = *gained;
                ChangeOutcome::Ignored
            }
            _ => ChangeOutcome::Ignored,
        }
    }

    /// Draw `glyph label` on the first row of `area` and register the hit
    /// region. Returns the number of columns drawn.
    pub(crate) fn render_with_glyph(
        &self,
        area: Rect,
        frame: &mut Frame,
        state: &ControlState<V>,
        glyph: &str,
    ) -> u16 {
        if area.is_empty() {
            return 0;
        }
        let interaction =
            InteractionState::from_flags(self.config.disabled, state.focused, state.hovered);
        let style = self.style.resolve(interaction);
        let right = area.right();
        let mut x = draw_text_span(frame, area.x, area.y, glyph, style, right);
        if !self.label.is_empty() && x < right {
            x = draw_text_span(frame, x, area.y, " ", style, right);
            x = draw_text_span(frame, x, area.y, &self.label, style, right);
        }
        let drawn = x.saturating_sub(area.x);
        if !self.config.disabled && drawn > 0 {
            frame.register_hit(
                Rect::new(area.x, area.y, drawn, 1),
                state.hit_id(),
                HitRegion::Content,
                0,
            );
        }
        drawn
    }
}
