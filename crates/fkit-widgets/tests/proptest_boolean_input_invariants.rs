//! Property tests for controlled/uncontrolled boolean inputs and the
//! widgets built on them.

use fkit_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use fkit_core::geometry::Rect;
use fkit_core::id::SequentialIds;
use fkit_render::frame::Frame;
use fkit_widgets::StatefulWidget;
use fkit_widgets::boolean_input::{
    BooleanInputConfig, BooleanInputState, BooleanValue, ChangeOutcome, CheckValue, ToggleRequest,
};
use fkit_widgets::checkbox::CheckBox;
use fkit_widgets::tabs::{Tab, Tabs, TabsState};
use fkit_widgets::toggle::Toggle;
use proptest::prelude::*;

fn check_value() -> impl Strategy<Value = CheckValue> {
    prop_oneof![
        Just(CheckValue::Unchecked),
        Just(CheckValue::Checked),
        Just(CheckValue::Indeterminate),
    ]
}

fn request() -> impl Strategy<Value = ToggleRequest> {
    (any::<bool>(), any::<bool>()).prop_map(|(checked, indeterminate)| ToggleRequest {
        checked,
        indeterminate,
    })
}

#[derive(Debug, Clone, Copy)]
enum Input {
    Click,
    Space,
    Enter,
    Release,
    Hover,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Click),
        Just(Input::Space),
        Just(Input::Enter),
        Just(Input::Release),
        Just(Input::Hover),
    ]
}

fn event_for(input: Input) -> Event {
    match input {
        Input::Click => Event::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 1, 0)),
        Input::Space => Event::Key(KeyEvent::new(KeyCode::Char(' '))),
        Input::Enter => Event::Key(KeyEvent::new(KeyCode::Enter)),
        Input::Release => Event::Key(
            KeyEvent::new(KeyCode::Char(' ')).with_kind(fkit_core::event::KeyEventKind::Release),
        ),
        Input::Hover => Event::Mouse(MouseEvent::new(MouseEventKind::Moved, 1, 0)),
    }
}

/// Whether `input` flips a control that was already clicked or focused.
fn flips(input: Input) -> bool {
    matches!(input, Input::Click | Input::Space | Input::Enter)
}

proptest! {
    #[test]
    fn controlled_value_takes_precedence_over_default(
        controlled in check_value(),
        default in check_value(),
    ) {
        let config = BooleanInputConfig::new()
            .controlled(controlled)
            .default_value(default);
        let state = BooleanInputState::initialize(&config);
        prop_assert_eq!(state.read(&config), controlled);

        let config = BooleanInputConfig::new().default_value(default);
        let state = BooleanInputState::initialize(&config);
        prop_assert_eq!(state.read(&config), default);
    }

    #[test]
    fn controlled_value_is_sticky(
        fixed in check_value(),
        requests in prop::collection::vec(request(), 0..24),
    ) {
        let mut seen = Vec::new();
        {
            let mut config = BooleanInputConfig::new()
                .controlled(fixed)
                .on_change(|v| seen.push(v));
            let mut state = BooleanInputState::initialize(&config);
            for req in &requests {
                let outcome = state.handle_user_toggle(&mut config, *req);
                prop_assert_eq!(outcome, ChangeOutcome::Requested(CheckValue::from_request(*req)));
                prop_assert_eq!(state.read(&config), fixed);
            }
        }
        let expected: Vec<CheckValue> = requests.iter().map(|r| CheckValue::from_request(*r)).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn uncontrolled_last_write_wins_without_callbacks(
        default in proptest::option::of(any::<bool>()),
        requests in prop::collection::vec(request(), 0..24),
    ) {
        let mut calls = 0usize;
        {
            let mut config = BooleanInputConfig::<bool>::new().on_change(|_| calls += 1);
            if let Some(default) = default {
                config = config.default_value(default);
            }
            let mut state = BooleanInputState::initialize(&config);
            prop_assert_eq!(state.read(&config), default.unwrap_or(false));
            for req in &requests {
                let before = state.read(&config);
                let outcome = state.handle_user_toggle(&mut config, *req);
                prop_assert_eq!(outcome, ChangeOutcome::Changed { from: before, to: req.checked });
            }
            let last = requests.last().map_or(default.unwrap_or(false), |r| r.checked);
            prop_assert_eq!(state.read(&config), last);
            prop_assert_eq!(state.stored(), last);
        }
        prop_assert_eq!(calls, 0);
    }

    #[test]
    fn disabled_input_never_changes_or_notifies(
        controlled in proptest::option::of(check_value()),
        start in check_value(),
        requests in prop::collection::vec(request(), 1..16),
    ) {
        let mut calls = 0usize;
        {
            let mut config = BooleanInputConfig::new()
                .default_value(start)
                .on_change(|_| calls += 1)
                .disabled(true);
            if let Some(value) = controlled {
                config = config.controlled(value);
            }
            let mut state = BooleanInputState::initialize(&config);
            let initial = state.read(&config);
            for req in &requests {
                prop_assert_eq!(state.handle_user_toggle(&mut config, *req), ChangeOutcome::Ignored);
            }
            prop_assert_eq!(state.read(&config), initial);
        }
        prop_assert_eq!(calls, 0);
    }

    #[test]
    fn rendered_flags_follow_value(value in check_value()) {
        prop_assert_eq!(value.is_checked(), value != CheckValue::Unchecked);
        prop_assert_eq!(value.is_indeterminate(), value == CheckValue::Indeterminate);
        let flipped = CheckValue::from_request(ToggleRequest::flip(value));
        prop_assert_eq!(flipped.is_checked(), !value.is_checked());
        prop_assert!(!flipped.is_indeterminate());
    }

    #[test]
    fn checkbox_event_sequence_matches_flip_model(
        start in check_value(),
        inputs in prop::collection::vec(input(), 0..32),
    ) {
        let mut ids = SequentialIds::new();
        let mut cb = CheckBox::new("Agree").default_value(start);
        let mut state = cb.create_state(&mut ids);
        let mut frame = Frame::with_hit_grid(12, 1);
        StatefulWidget::render(&cb, Rect::new(0, 0, 12, 1), &mut frame, &mut state);

        let mut model = start;
        let mut focused = false;
        for input in inputs {
            let event = event_for(input);
            let hit = match &event {
                Event::Mouse(m) => frame.hit_test(m.x, m.y),
                _ => None,
            };
            cb.handle_event(&mut state, &event, hit);
            let acts = match input {
                Input::Click => true,
                Input::Space | Input::Enter => focused,
                _ => false,
            };
            if matches!(input, Input::Click) {
                focused = true;
            }
            if acts && flips(input) {
                model = CheckValue::from_request(ToggleRequest::flip(model));
            }
            prop_assert_eq!(cb.value(&state), model);
        }
    }

    #[test]
    fn controlled_toggle_ignores_any_event_sequence(
        fixed in any::<bool>(),
        inputs in prop::collection::vec(input(), 0..32),
    ) {
        let mut requests = Vec::new();
        {
            let mut toggle = Toggle::new("Sync").on(fixed).on_change(|v| requests.push(v));
            let mut state = toggle.create_state(&mut SequentialIds::new());
            let mut frame = Frame::with_hit_grid(12, 1);
            StatefulWidget::render(&toggle, Rect::new(0, 0, 12, 1), &mut frame, &mut state);
            for input in inputs {
                let event = event_for(input);
                let hit = match &event {
                    Event::Mouse(m) => frame.hit_test(m.x, m.y),
                    _ => None,
                };
                toggle.handle_event(&mut state, &event, hit);
                prop_assert_eq!(toggle.is_on(&state), fixed);
            }
        }
        prop_assert!(requests.iter().all(|&v| v == !fixed));
    }

    #[test]
    fn active_tab_stays_visible(
        count in 1usize..20,
        disabled in prop::collection::vec(any::<bool>(), 20),
        width in 12u16..60,
        keys in prop::collection::vec(
            prop_oneof![
                Just(KeyCode::Left),
                Just(KeyCode::Right),
                Just(KeyCode::Home),
                Just(KeyCode::End),
                (1u8..=9).prop_map(|d| KeyCode::Char(char::from(b'0' + d))),
            ],
            0..24,
        ),
    ) {
        let tabs = Tabs::new((0..count).map(|i| Tab::new(format!("T{i:02}")).disabled(disabled[i])));
        let any_enabled = disabled[..count].iter().any(|&d| !d);
        let mut state = TabsState::default();
        let mut frame = Frame::new(width, 1);
        StatefulWidget::render(&tabs, Rect::new(0, 0, width, 1), &mut frame, &mut state);
        prop_assert_eq!(tabs.active_index(&state).is_some(), any_enabled);
        for key in keys {
            tabs.handle_key(&mut state, &KeyEvent::new(key));
            prop_assert!(state.active < count);
            prop_assert_eq!(tabs.active_index(&state).is_some(), any_enabled);

            let mut frame = Frame::new(width, 1);
            StatefulWidget::render(&tabs, Rect::new(0, 0, width, 1), &mut frame, &mut state);
            prop_assert!(state.offset <= state.active);
            let row = frame.buffer.row_text(0);
            let title = format!("T{:02}", state.active);
            prop_assert!(row.contains(&title), "{title} missing from {row:?}");
        }
    }
}
