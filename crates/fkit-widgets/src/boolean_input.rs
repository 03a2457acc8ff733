#![forbid(unsafe_code)]

//! Controlled/uncontrolled boolean input reconciliation.
//!
//! A checkable control shows a value that is owned either by the caller
//! (*controlled*: the caller passes the value on every render and the
//! control never stores its own copy) or by the control itself
//! (*uncontrolled*: the control remembers the value, seeded once from an
//! optional default).
//!
//! [`BooleanInputConfig`] is what the caller supplies per render;
//! [`BooleanInputState`] is the per-instance memory that survives between
//! renders. The three operations are:
//!
//! - [`BooleanInputState::initialize`]: pick the starting value
//!   (controlled value, else default, else off). Runs once.
//! - [`BooleanInputState::read`]: the value to display.
//! - [`BooleanInputState::handle_user_toggle`]: apply a user change request.
//!   Controlled inputs forward the request to `on_change` and stay put;
//!   uncontrolled inputs store the new value and do **not** call
//!   `on_change`. Disabled inputs ignore the request entirely.
//!
//! ```
//! use fkit_widgets::boolean_input::{BooleanInputConfig, BooleanInputState, ToggleRequest};
//!
//! let mut config = BooleanInputConfig::<bool>::new().default_value(true);
//! let mut state = BooleanInputState::initialize(&config);
//! assert!(state.read(&config));
//!
//! state.handle_user_toggle(&mut config, ToggleRequest::checked(false));
//! assert!(!state.read(&config));
//! ```

use std::fmt;

/// Raw change request from the interactive element.
///
/// Mirrors what a checkbox change event carries: the element's new checked
/// flag and whether it is now indeterminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleRequest {
    pub checked: bool,
    pub indeterminate: bool,
}

impl ToggleRequest {
    /// Request a plain checked/unchecked value.
    #[must_use]
    pub const fn checked(checked: bool) -> Self {
        Self {
            checked,
            indeterminate: false,
        }
    }

    /// Request the indeterminate value (checkbox only).
    #[must_use]
    pub const fn indeterminate() -> Self {
        Self {
            checked: false,
            indeterminate: true,
        }
    }

    /// The request a click or Space press produces on a control showing
    /// `current`: flip the checked flag and clear indeterminate.
    ///
    /// An indeterminate value displays as checked, so flipping it yields
    /// unchecked.
    #[must_use]
    pub fn flip<V: BooleanValue>(current: V) -> Self {
        Self::checked(!current.is_checked())
    }
}

/// Value domain of a boolean input.
pub trait BooleanValue: Copy + Eq + fmt::Debug {
    /// The value used when neither a controlled value nor a default is given.
    const OFF: Self;

    /// Map a raw change request to a value of this domain.
    fn from_request(request: ToggleRequest) -> Self;

    /// The rendered checked flag: anything other than [`Self::OFF`].
    fn is_checked(self) -> bool {
        self != Self::OFF
    }

    /// The rendered indeterminate sub-flag.
    fn is_indeterminate(self) -> bool {
        false
    }
}

/// Two-state domain used by toggles. Indeterminate requests are read as
/// their checked flag.
impl BooleanValue for bool {
    const OFF: Self = false;

    fn from_request(request: ToggleRequest) -> Self {
        request.checked
    }
}

/// Three-state checkbox value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckValue {
    #[default]
    Unchecked,
    Checked,
    /// Neither checked nor unchecked; used for partial selection.
    Indeterminate,
}

impl BooleanValue for CheckValue {
    const OFF: Self = CheckValue::Unchecked;

    fn from_request(request: ToggleRequest) -> Self {
        if request.indeterminate {
            CheckValue::Indeterminate
        } else {
            request.checked.into()
        }
    }

    fn is_indeterminate(self) -> bool {
        self == CheckValue::Indeterminate
    }
}

impl From<bool> for CheckValue {
    fn from(checked: bool) -> Self {
        if checked {
            CheckValue::Checked
        } else {
            CheckValue::Unchecked
        }
    }
}

impl fmt::Display for CheckValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckValue::Unchecked => "unchecked",
            CheckValue::Checked => "checked",
            CheckValue::Indeterminate => "indeterminate",
        })
    }
}

/// Who owns the displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<V> {
    /// The caller owns the value; the input only reports change requests.
    Controlled(V),
    /// The input owns the value, seeded once from `default_value`.
    Uncontrolled { default_value: Option<V> },
}

impl<V> Default for Binding<V> {
    fn default() -> Self {
        Self::Uncontrolled {
            default_value: None,
        }
    }
}

/// Change notification callback.
pub type ChangeHandler<'a, V> = Box<dyn FnMut(V) + 'a>;

/// Per-render configuration supplied by the caller.
pub struct BooleanInputConfig<'a, V> {
    pub binding: Binding<V>,
    pub on_change: Option<ChangeHandler<'a, V>>,
    pub disabled: bool,
}

impl<V: fmt::Debug> fmt::Debug for BooleanInputConfig<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BooleanInputConfig")
            .field("binding", &self.binding)
            .field("on_change", &self.on_change.as_ref().map(|_| "FnMut"))
            .field("disabled", &self.disabled)
            .finish()
    }
}

impl<V> Default for BooleanInputConfig<'_, V> {
    fn default() -> Self {
        Self {
            binding: Binding::default(),
            on_change: None,
            disabled: false,
        }
    }
}

impl<'a, V: BooleanValue> BooleanInputConfig<'a, V> {
    /// Uncontrolled, no default, enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the input controlled with the given value.
    #[must_use]
    pub fn controlled(mut self, value: V) -> Self {
        self.binding = Binding::Controlled(value);
        self
    }

    /// Set the starting value of an uncontrolled input.
    ///
    /// Ignored once the input is controlled: a controlled value always takes
    /// precedence.
    #[must_use]
    pub fn default_value(mut self, value: V) -> Self {
        if let Binding::Uncontrolled { default_value } = &mut self.binding {
            *default_value = Some(value);
        }
        self
    }

    /// Callback for change requests on a controlled input.
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(V) + 'a) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether the caller owns the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        matches!(self.binding, Binding::Controlled(_))
    }

    /// The controlled value, if any.
    #[must_use]
    pub const fn fixed_value(&self) -> Option<V> {
        match self.binding {
            Binding::Controlled(value) => Some(value),
            Binding::Uncontrolled { .. } => None,
        }
    }
}

/// Result of a change attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome<V> {
    /// Disabled input; nothing happened.
    Ignored,
    /// Controlled input: the caller was asked (via `on_change`, if set) to
    /// re-render with this value. The displayed value did not change.
    Requested(V),
    /// Uncontrolled input: the stored value was replaced.
    Changed { from: V, to: V },
}

impl<V> ChangeOutcome<V> {
    /// Whether the input reacted to the request.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Per-instance memory of a boolean input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanInputState<V> {
    value: V,
}

impl<V: BooleanValue> BooleanInputState<V> {
    /// Choose the starting value: controlled value, else default, else off.
    ///
    /// Call once when the input is created. Later changes to the default
    /// have no effect on an existing state.
    #[must_use]
    pub fn initialize(config: &BooleanInputConfig<'_, V>) -> Self {
        let value = match config.binding {
            Binding::Controlled(value) => value,
            Binding::Uncontrolled { default_value } => default_value.unwrap_or(V::OFF),
        };
        Self { value }
    }

    /// The value to display: the controlled value if present, else the
    /// stored one.
    #[must_use]
    pub fn read(&self, config: &BooleanInputConfig<'_, V>) -> V {
        config.fixed_value().unwrap_or(self.value)
    }

    /// The internally stored value, regardless of binding.
    #[must_use]
    pub const fn stored(&self) -> V {
        self.value
    }

    /// Apply a raw change request from the interactive element.
    pub fn handle_user_toggle(
        &mut self,
        config: &mut BooleanInputConfig<'_, V>,
        request: ToggleRequest,
    ) -> ChangeOutcome<V> {
        self.attempt_change(config, V::from_request(request))
    }

    /// Apply a change to `new_value`.
    ///
    /// Controlled: the stored value is untouched and `on_change(new_value)`
    /// is called if present. Uncontrolled: the stored value becomes
    /// `new_value` and `on_change` is not called. Disabled: nothing.
    pub fn attempt_change(
        &mut self,
        config: &mut BooleanInputConfig<'_, V>,
        new_value: V,
    ) -> ChangeOutcome<V> {
        if config.disabled {
            return ChangeOutcome::Ignored;
        }
        match config.binding {
            Binding::Controlled(_current) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    message = "boolean_input.change",
                    mode = "controlled",
                    from = ?_current,
                    to = ?new_value,
                    notified = config.on_change.is_some()
                );
                if let Some(on_change) = config.on_change.as_mut() {
                    on_change(new_value);
                }
                ChangeOutcome::Requested(new_value)
            }
            Binding::Uncontrolled { .. } => {
                let from = std::mem::replace(&mut self.value, new_value);
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    message = "boolean_input.change",
                    mode = "uncontrolled",
                    from = ?from,
                    to = ?new_value
                );
                ChangeOutcome::Changed {
                    from,
                    to: new_value,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn initialize_precedence() {
        let cases: [(Option<CheckValue>, Option<CheckValue>, CheckValue); 5] = [
            (None, None, CheckValue::Unchecked),
            (None, Some(CheckValue::Checked), CheckValue::Checked),
            (Some(CheckValue::Unchecked), Some(CheckValue::Checked), CheckValue::Unchecked),
            (Some(CheckValue::Indeterminate), None, CheckValue::Indeterminate),
            (None, Some(CheckValue::Indeterminate), CheckValue::Indeterminate),
        ];
        for (fixed, fallback, expected) in cases {
            let mut config = BooleanInputConfig::new();
            if let Some(v) = fallback {
                config = config.default_value(v);
            }
            if let Some(v) = fixed {
                config = config.controlled(v);
            }
            let state = BooleanInputState::initialize(&config);
            assert_eq!(state.stored(), expected, "fixed={fixed:?} fallback={fallback:?}");
        }
    }

    #[test]
    fn default_ignored_after_creation() {
        let config = BooleanInputConfig::<bool>::new().default_value(true);
        let state = BooleanInputState::initialize(&config);
        let later = BooleanInputConfig::<bool>::new().default_value(false);
        assert!(state.read(&later));
    }

    #[test]
    fn fallback_true_then_toggle_off() {
        let mut config = BooleanInputConfig::<bool>::new().default_value(true);
        let mut state = BooleanInputState::initialize(&config);
        assert!(state.read(&config));
        let outcome = state.handle_user_toggle(&mut config, ToggleRequest::checked(false));
        assert_eq!(outcome, ChangeOutcome::Changed { from: true, to: false });
        assert!(!state.read(&config));
    }

    #[test]
    fn controlled_reports_and_stays() {
        let calls = RefCell::new(Vec::new());
        let mut config = BooleanInputConfig::<bool>::new()
            .controlled(false)
            .on_change(|v| calls.borrow_mut().push(v));
        let mut state = BooleanInputState::initialize(&config);
        let outcome = state.handle_user_toggle(&mut config, ToggleRequest::checked(true));
        assert_eq!(outcome, ChangeOutcome::Requested(true));
        assert!(!state.read(&config));
        drop(config);
        assert_eq!(calls.into_inner(), vec![true]);
    }

    #[test]
    fn controlled_without_callback_is_noop() {
        let mut config = BooleanInputConfig::<CheckValue>::new().controlled(CheckValue::Checked);
        let mut state = BooleanInputState::initialize(&config);
        let outcome = state.handle_user_toggle(&mut config, ToggleRequest::checked(false));
        assert_eq!(outcome, ChangeOutcome::Requested(CheckValue::Unchecked));
        assert_eq!(state.read(&config), CheckValue::Checked);
    }

    #[test]
    fn controlled_read_ignores_stored_value() {
        let mut uncontrolled = BooleanInputConfig::<bool>::new();
        let mut state = BooleanInputState::initialize(&uncontrolled);
        state.handle_user_toggle(&mut uncontrolled, ToggleRequest::checked(true));
        assert!(state.stored());
        let controlled = BooleanInputConfig::<bool>::new().controlled(false);
        assert!(!state.read(&controlled));
    }

    // Uncontrolled inputs do not call `on_change`; only controlled ones do.
    // This mirrors the observed behavior of the widget kit and is kept on
    // purpose until the intended contract is settled.
    #[test]
    fn uncontrolled_change_does_not_notify() {
        let mut called = false;
        {
            let mut config = BooleanInputConfig::<bool>::new().on_change(|_| called = true);
            let mut state = BooleanInputState::initialize(&config);
            let outcome = state.handle_user_toggle(&mut config, ToggleRequest::checked(true));
            assert_eq!(outcome, ChangeOutcome::Changed { from: false, to: true });
            assert!(state.read(&config));
        }
        assert!(!called);
    }

    #[test]
    fn disabled_ignores_everything() {
        let mut called = 0;
        {
            let mut config = BooleanInputConfig::<CheckValue>::new()
                .controlled(CheckValue::Unchecked)
                .on_change(|_| called += 1)
                .disabled(true);
            let mut state = BooleanInputState::initialize(&config);
            assert_eq!(
                state.handle_user_toggle(&mut config, ToggleRequest::checked(true)),
                ChangeOutcome::Ignored
            );
            assert_eq!(state.read(&config), CheckValue::Unchecked);
        }
        assert_eq!(called, 0);

        let mut config = BooleanInputConfig::<bool>::new().disabled(true);
        let mut state = BooleanInputState::initialize(&config);
        assert!(!state.handle_user_toggle(&mut config, ToggleRequest::checked(true)).is_handled());
        assert!(!state.stored());
    }

    #[test]
    fn indeterminate_request_yields_indeterminate() {
        let mut config = BooleanInputConfig::<CheckValue>::new();
        let mut state = BooleanInputState::initialize(&config);
        state.handle_user_toggle(
            &mut config,
            ToggleRequest {
                checked: false,
                indeterminate: true,
            },
        );
        let value = state.read(&config);
        assert_eq!(value, CheckValue::Indeterminate);
        assert!(value.is_checked());
        assert!(value.is_indeterminate());
    }

    #[test]
    fn toggle_domain_has_no_indeterminate() {
        assert!(bool::from_request(ToggleRequest {
            checked: true,
            indeterminate: true
        }));
        assert!(!bool::from_request(ToggleRequest::indeterminate()));
        assert!(!true.is_indeterminate());
    }

    #[test]
    fn flip_from_indeterminate_unchecks() {
        assert_eq!(
            CheckValue::from_request(ToggleRequest::flip(CheckValue::Indeterminate)),
            CheckValue::Unchecked
        );
        assert_eq!(
            CheckValue::from_request(ToggleRequest::flip(CheckValue::Unchecked)),
            CheckValue::Checked
        );
        assert!(!bool::from_request(ToggleRequest::flip(true)));
    }
}
