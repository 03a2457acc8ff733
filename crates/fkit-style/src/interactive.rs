//! Interactive style variants for stateful widgets.
//!
//! [`InteractiveStyle`] holds overlays for the interaction states a widget
//! can be in: normal, hovered, focused, active (pressed), and disabled. The
//! overlay for the current state is patched on top of the base style with
//! [`Style::patch`], the terminal counterpart of `:hover`, `:focus`,
//! `:active`, and `:disabled` pseudo-classes.
//!
//! ```
//! use fkit_style::{InteractionState, InteractiveStyle, PackedRgba, Style};
//!
//! let interactive = InteractiveStyle::new(Style::new().fg(PackedRgba::WHITE))
//!     .focused(Style::new().bold())
//!     .disabled(Style::new().fg(PackedRgba::rgb(96, 96, 96)));
//!
//! let state = InteractionState::from_flags(false, true, false);
//! assert_eq!(state, InteractionState::Focused);
//! let _current = interactive.resolve(state);
//! ```

#![forbid(unsafe_code)]

use crate::style::Style;

/// The interaction state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// No user interaction.
    #[default]
    Normal,
    /// Mouse cursor is over the widget.
    Hovered,
    /// Widget has keyboard focus.
    Focused,
    /// Widget is being pressed.
    Active,
    /// Widget is non-interactive.
    Disabled,
    /// Widget has both focus and hover.
    FocusedHovered,
}

impl InteractionState {
    /// Derive the state from widget flags. Disabled dominates everything.
    #[must_use]
    pub const fn from_flags(disabled: bool, focused: bool, hovered: bool) -> Self {
        match (disabled, focused, hovered) {
            (true, _, _) => Self::Disabled,
            (false, true, true) => Self::FocusedHovered,
            (false, true, false) => Self::Focused,
            (false, false, true) => Self::Hovered,
            (false, false, false) => Self::Normal,
        }
    }
}

/// Style overlays per interaction state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractiveStyle {
    /// Base style applied in all states.
    pub normal: Style,
    pub hover: Option<Style>,
    pub focus: Option<Style>,
    pub active: Option<Style>,
    pub disabled: Option<Style>,
}

impl InteractiveStyle {
    /// Create an interactive style with the given base style.
    pub fn new(normal: Style) -> Self {
        Self {
            normal,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn hover(mut self, style: Style) -> Self {
        self.hover = Some(style);
        self
    }

    #[must_use]
    pub fn focused(mut self, style: Style) -> Self {
        self.focus = Some(style);
        self
    }

    #[must_use]
    pub fn active(mut self, style: Style) -> Self {
        self.active = Some(style);
        self
    }

    #[must_use]
    pub fn disabled(mut self, style: Style) -> Self {
        self.disabled = Some(style);
        self
    }

    /// Resolve the style for the given interaction state.
    ///
    /// `FocusedHovered` applies focus first, then hover, so hover wins on
    /// conflicting properties.
    pub fn resolve(&self, state: InteractionState) -> Style {
        let overlays: [Option<&Style>; 2] = match state {
            InteractionState::Normal => [None, None],
            InteractionState::Hovered => [self.hover.as_ref(), None],
            InteractionState::Focused => [self.focus.as_ref(), None],
            InteractionState::Active => [self.active.as_ref(), None],
            InteractionState::Disabled => [self.disabled.as_ref(), None],
            InteractionState::FocusedHovered => [self.focus.as_ref(), self.hover.as_ref()],
        };
        overlays
            .into_iter()
            .flatten()
            .fold(self.normal, |acc, overlay| acc.patch(overlay))
    }
}

impl From<Style> for InteractiveStyle {
    fn from(style: Style) -> Self {
        Self::new(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fkit_render::cell::PackedRgba;

    const WHITE: PackedRgba = PackedRgba::WHITE;
    const BLACK: PackedRgba = PackedRgba::BLACK;
    const BLUE: PackedRgba = PackedRgba::BLUE;
    const RED: PackedRgba = PackedRgba::RED;
    const GRAY: PackedRgba = PackedRgba::rgb(128, 128, 128);

    #[test]
    fn normal_returns_base_style() {
        let style = InteractiveStyle::new(Style::new().fg(WHITE)).hover(Style::new().fg(RED));
        assert_eq!(style.resolve(InteractionState::Normal).fg, Some(WHITE));
    }

    #[test]
    fn missing_override_falls_back_to_base() {
        let style = InteractiveStyle::new(Style::new().fg(WHITE));
        assert_eq!(style.resolve(InteractionState::Disabled).fg, Some(WHITE));
    }

    #[test]
    fn disabled_patches_over_base() {
        let style = InteractiveStyle::new(Style::new().fg(WHITE).bg(BLACK))
            .disabled(Style::new().fg(GRAY));
        let resolved = style.resolve(InteractionState::Disabled);
        assert_eq!(resolved.fg, Some(GRAY));
        assert_eq!(resolved.bg, Some(BLACK));
    }

    #[test]
    fn focused_hovered_hover_wins_on_conflict() {
        let style = InteractiveStyle::new(Style::new())
            .focused(Style::new().fg(BLUE).bg(BLACK))
            .hover(Style::new().fg(RED));
        let resolved = style.resolve(InteractionState::FocusedHovered);
        assert_eq!(resolved.fg, Some(RED));
        assert_eq!(resolved.bg, Some(BLACK));
    }

    #[test]
    fn from_flags_disabled_dominates() {
        assert_eq!(
            InteractionState::from_flags(true, true, true),
            InteractionState::Disabled
        );
        assert_eq!(
            InteractionState::from_flags(false, true, true),
            InteractionState::FocusedHovered
        );
        assert_eq!(
            InteractionState::from_flags(false, false, true),
            InteractionState::Hovered
        );
        assert_eq!(
            InteractionState::from_flags(false, false, false),
            InteractionState::Normal
        );
    }
}
