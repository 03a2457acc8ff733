#![forbid(unsafe_code)]

//! Tri-state checkbox.
//!
//! Renders `[x] label`, `[ ] label`, or `[-] label`. The value is either
//! controlled by the caller or remembered in [`CheckBoxState`]; see
//! [`crate::boolean_input`] for the reconciliation rules.

use crate::StatefulWidget;
use crate::boolean_input::{BooleanValue, ChangeOutcome, CheckValue};
use crate::control::{Control, ControlState};
use fkit_core::event::Event;
use fkit_core::geometry::Rect;
use fkit_core::id::{IdSource, WidgetId};
use fkit_render::frame::{Frame, HitData, HitId, HitRegion};
use fkit_style::{InteractiveStyle, Theme};
#[cfg(feature = "tracing")]
use web_time::Instant;

/// State for a [`CheckBox`].
pub type CheckBoxState = ControlState<CheckValue>;

/// A labelled three-state checkbox.
#[derive(Debug)]
pub struct CheckBox<'a> {
    control: Control<'a, CheckValue>,
    checked_glyph: String,
    unchecked_glyph: String,
    indeterminate_glyph: String,
}

impl<'a> CheckBox<'a> {
    /// Uncontrolled, unchecked checkbox styled with the default theme.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::themed(label, &Theme::default())
    }

    /// Checkbox using the glyphs and control style of `theme`.
    #[must_use]
    pub fn themed(label: impl Into<String>, theme: &Theme) -> Self {
        Self {
            control: Control::new(label.into(), theme),
            checked_glyph: theme.glyphs.checkbox_checked.clone(),
            unchecked_glyph: theme.glyphs.checkbox_unchecked.clone(),
            indeterminate_glyph: theme.glyphs.checkbox_indeterminate.clone(),
        }
    }

    /// Controlled value. Takes precedence over [`Self::default_value`].
    #[must_use]
    pub fn checked(mut self, value: impl Into<CheckValue>) -> Self {
        self.control.config = self.control.config.controlled(value.into());
        self
    }

    /// Starting value of an uncontrolled checkbox.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<CheckValue>) -> Self {
        self.control.config = self.control.config.default_value(value.into());
        self
    }

    /// Called with the requested value when a controlled checkbox is
    /// toggled.
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(CheckValue) + 'a) -> Self {
        self.control.config = self.control.config.on_change(handler);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.control.config = self.control.config.disabled(disabled);
        self
    }

    /// Fixed identifier; otherwise one is drawn from the [`IdSource`] when
    /// the state is created.
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

    /// Override the `[x]` / `[ ]` / `[-]` glyphs.
    #[must_use]
    pub fn glyphs(
        mut self,
        checked: impl Into<String>,
        unchecked: impl Into<String>,
        indeterminate: impl Into<String>,
    ) -> Self {
        self.checked_glyph = checked.into();
        self.unchecked_glyph = unchecked.into();
        self.indeterminate_glyph = indeterminate.into();
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.control.label
    }

    /// Disabled checkboxes never take focus.
    #[must_use]
    pub const fn is_focusable(&self) -> bool {
        !self.control.config.disabled
    }

    /// Create the per-instance state. Call once per checkbox instance.
    pub fn create_state(&self, ids: &mut impl IdSource) -> CheckBoxState {
        self.control.create_state("checkbox", ids)
    }

    /// The value currently displayed.
    #[must_use]
    pub fn value(&self, state: &CheckBoxState) -> CheckValue {
        self.control.value(state)
    }

    /// Rendered `(checked, indeterminate)` flags. An indeterminate value is
    /// reported as checked.
    #[must_use]
    pub fn rendered_flags(&self, state: &CheckBoxState) -> (bool, bool) {
        let value = self.value(state);
        (value.is_checked(), value.is_indeterminate())
    }

    /// Give keyboard focus. Returns `false` when disabled.
    pub fn focus(&self, state: &mut CheckBoxState) -> bool {
        self.control.focus(state)
    }

    /// Flip the displayed value as a click would.
    pub fn toggle(&mut self, state: &mut CheckBoxState) -> ChangeOutcome<CheckValue> {
        self.control.toggle(state)
    }

    /// Handle a key, mouse, or focus event.
    ///
    /// Space/Enter toggle a focused checkbox; a left click inside its hit
    /// region focuses and toggles it. `hit` is `frame.hit_test(x, y)` for
    /// mouse events and is ignored otherwise.
    pub fn handle_event(
        &mut self,
        state: &mut CheckBoxState,
        event: &Event,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> ChangeOutcome<CheckValue> {
        self.control.handle_event(state, event, hit)
    }

    fn glyph(&self, value: CheckValue) -> &str {
        match value {
            CheckValue::Checked => &self.checked_glyph,
            CheckValue::Unchecked => &self.unchecked_glyph,
            CheckValue::Indeterminate => &self.indeterminate_glyph,
        }
    }
}

impl StatefulWidget for CheckBox<'_> {
    type State = CheckBoxState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let render_start = Instant::now();
        let value = self.value(state);
        #[cfg(feature = "tracing")]
        let render_span = tracing::debug_span!(
            "checkbox.render",
            id = %state.id(),
            value = %value,
            disabled = self.control.config.disabled,
            render_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _render_guard = render_span.enter();

        self.control
            .render_with_glyph(area, frame, state, self.glyph(value));

        #[cfg(feature = "tracing")]
        {
            let elapsed_us = render_start.elapsed().as_micros() as u64;
            render_span.record("render_duration_us", elapsed_us);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::row_text;
    use fkit_core::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
    use fkit_core::id::SequentialIds;
    use std::cell::Cell;
    #[cfg(feature = "tracing")]
    use std::sync::{Arc, Mutex};
    #[cfg(feature = "tracing")]
    use tracing_subscriber::layer::{Context, SubscriberExt};

    fn click(x: u16, y: u16) -> Event {
        Event::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y))
    }

    fn space() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(' ')))
    }

    fn render(cb: &CheckBox<'_>, state: &mut CheckBoxState, width: u16) -> Frame {
        let mut frame = Frame::with_hit_grid(width, 1);
        StatefulWidget::render(cb, Rect::new(0, 0, width, 1), &mut frame, state);
        frame
    }

    #[test]
    fn renders_each_value() {
        let mut ids = SequentialIds::new();
        for (value, expected) in [
            (CheckValue::Checked, "[x] Accept"),
            (CheckValue::Unchecked, "[ ] Accept"),
            (CheckValue::Indeterminate, "[-] Accept"),
        ] {
            let cb = CheckBox::new("Accept").checked(value);
            let mut state = cb.create_state(&mut ids);
            let frame = render(&cb, &mut state, 12);
            assert_eq!(row_text(&frame, 0).trim_end(), expected);
        }
    }

    #[test]
    fn label_is_clipped_to_area() {
        let cb = CheckBox::new("Subscribe");
        let mut state = cb.create_state(&mut SequentialIds::new());
        let frame = render(&cb, &mut state, 6);
        assert_eq!(row_text(&frame, 0), "[ ] Su");
    }

    #[test]
    fn ids_come_from_source_unless_given() {
        let mut ids = SequentialIds::new();
        let a = CheckBox::new("A").create_state(&mut ids);
        let b = CheckBox::new("B").create_state(&mut ids);
        assert_ne!(a.id(), b.id());
        let fixed = CheckBox::new("C").id("terms").create_state(&mut ids);
        assert_eq!(fixed.id().as_str(), "terms");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn click_toggles_uncontrolled() {
        let mut cb = CheckBox::new("Accept");
        let mut state = cb.create_state(&mut SequentialIds::new());
        let frame = render(&cb, &mut state, 12);
        let outcome = cb.handle_event(&mut state, &click(5, 0), frame.hit_test(5, 0));
        assert_eq!(
            outcome,
            ChangeOutcome::Changed {
                from: CheckValue::Unchecked,
                to: CheckValue::Checked
            }
        );
        assert!(state.is_focused());
        let frame = render(&cb, &mut state, 12);
        assert_eq!(row_text(&frame, 0).trim_end(), "[x] Accept");
    }

    #[test]
    fn click_outside_region_is_ignored() {
        let mut cb = CheckBox::new("A");
        let mut state = cb.create_state(&mut SequentialIds::new());
        let frame = render(&cb, &mut state, 10);
        assert_eq!(frame.hit_test(8, 0), None);
        let outcome = cb.handle_event(&mut state, &click(8, 0), frame.hit_test(8, 0));
        assert_eq!(outcome, ChangeOutcome::Ignored);
    }

    #[test]
    fn space_requires_focus() {
        let mut cb = CheckBox::new("A");
        let mut state = cb.create_state(&mut SequentialIds::new());
        assert_eq!(cb.handle_event(&mut state, &space(), None), ChangeOutcome::Ignored);
        assert!(cb.focus(&mut state));
        assert!(cb.handle_event(&mut state, &space(), None).is_handled());
        assert_eq!(cb.value(&state), CheckValue::Checked);
        state.blur();
        assert_eq!(cb.handle_event(&mut state, &space(), None), ChangeOutcome::Ignored);
    }

    #[test]
    fn indeterminate_flips_to_unchecked() {
        let mut cb = CheckBox::new("All").default_value(CheckValue::Indeterminate);
        let mut state = cb.create_state(&mut SequentialIds::new());
        assert_eq!(cb.rendered_flags(&state), (true, true));
        cb.toggle(&mut state);
        assert_eq!(cb.value(&state), CheckValue::Unchecked);
        assert_eq!(cb.rendered_flags(&state), (false, false));
    }

    #[test]
    fn controlled_click_reports_and_keeps_glyph() {
        let calls = Cell::new(0);
        let seen = Cell::new(None);
        let mut cb = CheckBox::new("Accept").checked(false).on_change(|v| {
            calls.set(calls.get() + 1);
            seen.set(Some(v));
        });
        let mut state = cb.create_state(&mut SequentialIds::new());
        let frame = render(&cb, &mut state, 12);
        let outcome = cb.handle_event(&mut state, &click(0, 0), frame.hit_test(0, 0));
        assert_eq!(outcome, ChangeOutcome::Requested(CheckValue::Checked));
        let frame = render(&cb, &mut state, 12);
        assert_eq!(row_text(&frame, 0).trim_end(), "[ ] Accept");
        drop(cb);
        assert_eq!(calls.get(), 1);
        assert_eq!(seen.get(), Some(CheckValue::Checked));
    }

    #[test]
    fn disabled_registers_no_hit_and_refuses_focus() {
        let calls = Cell::new(0);
        let mut cb = CheckBox::new("Off")
            .checked(true)
            .on_change(|_| calls.set(calls.get() + 1))
            .disabled(true);
        let mut state = cb.create_state(&mut SequentialIds::new());
        let frame = render(&cb, &mut state, 10);
        assert_eq!(row_text(&frame, 0).trim_end(), "[x] Off");
        assert!(frame.hit_test(0, 0).is_none());
        assert!(!cb.is_focusable());
        assert!(!cb.focus(&mut state));
        assert_eq!(
            cb.handle_event(&mut state, &Event::Focus(true), None),
            ChangeOutcome::Ignored
        );
        assert!(!state.is_focused());
        assert_eq!(cb.toggle(&mut state), ChangeOutcome::Ignored);
        drop(cb);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn disabled_uses_disabled_style() {
        let theme = Theme::default();
        let cb = CheckBox::themed("Off", &theme).disabled(true);
        let mut state = cb.create_state(&mut SequentialIds::new());
        let frame = render(&cb, &mut state, 8);
        assert_eq!(frame.buffer.get(0, 0).map(|c| c.fg), Some(theme.disabled));
    }

    #[test]
    fn hover_tracks_pointer() {
        let mut cb = CheckBox::new("A");
        let mut state = cb.create_state(&mut SequentialIds::new());
        let frame = render(&cb, &mut state, 10);
        let moved = |x| Event::Mouse(MouseEvent::new(MouseEventKind::Moved, x, 0));
        cb.handle_event(&mut state, &moved(1), frame.hit_test(1, 0));
        assert!(state.is_hovered());
        cb.handle_event(&mut state, &moved(9), frame.hit_test(9, 0));
        assert!(!state.is_hovered());
    }

    #[test]
    fn render_is_idempotent() {
        let cb = CheckBox::new("Same").default_value(true);
        let mut state = cb.create_state(&mut SequentialIds::new());
        let first = render(&cb, &mut state, 10);
        let second = render(&cb, &mut state, 10);
        assert_eq!(first.buffer.to_lines(), second.buffer.to_lines());
    }

    #[cfg(feature = "tracing")]
    struct SpanCapture {
        names: Arc<Mutex<Vec<String>>>,
    }

    #[cfg(feature = "tracing")]
    impl<S> tracing_subscriber::Layer<S> for SpanCapture
    where
        S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            _id: &tracing::Id,
            _ctx: Context<'_, S>,
        ) {
            self.names
                .lock()
                .expect("span capture lock")
                .push(attrs.metadata().name().to_string());
        }
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn render_emits_checkbox_span() {
        let names = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(SpanCapture {
            names: Arc::clone(&names),
        });
        let _guard = tracing::subscriber::set_default(subscriber);

        let cb = CheckBox::new("Traced");
        let mut state = cb.create_state(&mut SequentialIds::new());
        render(&cb, &mut state, 12);

        let names = names.lock().expect("span capture lock");
        assert!(names.iter().any(|n| n == "checkbox.render"));
    }
}
