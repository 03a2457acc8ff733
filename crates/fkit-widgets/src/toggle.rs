#![forbid(unsafe_code)]

//! On/off switch.
//!
//! Same reconciliation as [`CheckBox`](crate::checkbox::CheckBox) over a
//! plain `bool`: a toggle has no indeterminate value.

use crate::StatefulWidget;
use crate::boolean_input::ChangeOutcome;
use crate::control::{Control, ControlState};
use fkit_core::event::Event;
use fkit_core::geometry::Rect;
use fkit_core::id::{IdSource, WidgetId};
use fkit_render::frame::{Frame, HitData, HitId, HitRegion};
use fkit_style::{InteractiveStyle, Theme};
#[cfg(feature = "tracing")]
use web_time::Instant;

/// State for a [`Toggle`].
pub type ToggleState = ControlState<bool>;

/// A labelled on/off switch.
#[derive(Debug)]
pub struct Toggle<'a> {
    control: Control<'a, bool>,
    on_glyph: String,
    off_glyph: String,
}

impl<'a> Toggle<'a> {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::themed(label, &Theme::default())
    }

    #[must_use]
    pub fn themed(label: impl Into<String>, theme: &Theme) -> Self {
        Self {
            control: Control::new(label.into(), theme),
            on_glyph: theme.glyphs.toggle_on.clone(),
            off_glyph: theme.glyphs.toggle_off.clone(),
        }
    }

    /// Controlled value.
    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.control.config = self.control.config.controlled(on);
        self
    }

    /// Starting value when uncontrolled.
    #[must_use]
    pub fn default_on(mut self, on: bool) -> Self {
        self.control.config = self.control.config.default_value(on);
        self
    }

    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(bool) + 'a) -> Self {
        self.control.config = self.control.config.on_change(handler);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.control.config = self.control.config.disabled(disabled);
        self
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<WidgetId>) -> Self {
        self.control.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn style(mut self, style: InteractiveStyle) -> Self {
        self.control.style = style;
        self
    }

    /// Override the on/off glyphs. Use glyphs of equal width so the label
    /// does not shift when the value changes.
    #[must_use]
    pub fn glyphs(mut self, on: impl Into<String>, off: impl Into<String>) -> Self {
        self.on_glyph = on.into();
        self.off_glyph = off.into();
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.control.label
    }

    #[must_use]
    pub const fn is_focusable(&self) -> bool {
        !self.control.config.disabled
    }

    pub fn create_state(&self, ids: &mut impl IdSource) -> ToggleState {
        self.control.create_state("toggle", ids)
    }

    #[must_use]
    pub fn is_on(&self, state: &ToggleState) -> bool {
        self.control.value(state)
    }

    pub fn focus(&self, state: &mut ToggleState) -> bool {
        self.control.focus(state)
    }

    pub fn toggle(&mut self, state: &mut ToggleState) -> ChangeOutcome<bool> {
        self.control.toggle(state)
    }

    /// Handle a key, mouse, or focus event. See
    /// [`CheckBox::handle_event`](crate::checkbox::CheckBox::handle_event).
    pub fn handle_event(
        &mut self,
        state: &mut ToggleState,
        event: &Event,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> ChangeOutcome<bool> {
        self.control.handle_event(state, event, hit)
    }
}

impl StatefulWidget for Toggle<'_> {
    type State = ToggleState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let render_start = Instant::now();
        let on = self.is_on(state);
        #[cfg(feature = "tracing")]
        let render_span = tracing::debug_span!(
            "toggle.render",
            id = %state.id(),
            on,
            render_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _render_guard = render_span.enter();

        let glyph = if on { &self.on_glyph } else { &self.off_glyph };
        self.control.render_with_glyph(area, frame, state, glyph);

        #[cfg(feature = "tracing")]
        {
            let elapsed_us = render_start.elapsed().as_micros() as u64;
            render_span.record("render_duration_us", elapsed_us);
        }
    }
}
