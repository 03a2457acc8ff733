#![forbid(unsafe_code)]

use crate::interactive::InteractiveStyle;
use crate::style::Style;
use fkit_render::cell::PackedRgba;

/// Semantic tone used by status-like widgets (badges, notices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// Glyphs widgets draw for their states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub checkbox_checked: String,
    pub checkbox_unchecked: String,
    pub checkbox_indeterminate: String,
    pub toggle_on: String,
    pub toggle_off: String,
    pub dropdown_closed: String,
    pub dropdown_open: String,
    pub nav_expanded: String,
    pub nav_collapsed: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            checkbox_checked: "[x]".into(),
            checkbox_unchecked: "[ ]".into(),
            checkbox_indeterminate: "[-]".into(),
            toggle_on: "[on ]".into(),
            toggle_off: "[off]".into(),
            dropdown_closed: "▾".into(),
            dropdown_open: "▴".into(),
            nav_expanded: "▾".into(),
            nav_collapsed: "▸".into(),
        }
    }
}

/// Semantic color slots plus widget glyphs.
///
/// Widgets never hard-code colors; they ask the theme for the style of a
/// role (`text`, `accent`, `disabled`, a [`Tone`]) so a single theme swap
/// restyles the whole kit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub text: PackedRgba,
    pub muted: PackedRgba,
    pub accent: PackedRgba,
    pub background: PackedRgba,
    pub surface: PackedRgba,
    pub disabled: PackedRgba,
    pub info: PackedRgba,
    pub success: PackedRgba,
    pub warning: PackedRgba,
    pub danger: PackedRgba,
    pub glyphs: Glyphs,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: PackedRgba::rgb(220, 220, 220),
            muted: PackedRgba::rgb(140, 140, 140),
            accent: PackedRgba::rgb(97, 175, 239),
            background: PackedRgba::rgb(24, 24, 27),
            surface: PackedRgba::rgb(39, 39, 42),
            disabled: PackedRgba::rgb(90, 90, 90),
            info: PackedRgba::rgb(86, 182, 194),
            success: PackedRgba::rgb(152, 195, 121),
            warning: PackedRgba::rgb(229, 192, 123),
            danger: PackedRgba::rgb(224, 108, 117),
            glyphs: Glyphs::default(),
        }
    }
}

impl Theme {
    /// Color for a tone.
    #[must_use]
    pub const fn tone(&self, tone: Tone) -> PackedRgba {
        match tone {
            Tone::Neutral => self.muted,
            Tone::Info => self.info,
            Tone::Success => self.success,
            Tone::Warning => self.warning,
            Tone::Danger => self.danger,
        }
    }

    /// Plain body text.
    #[must_use]
    pub const fn text_style(&self) -> Style {
        Style::new().fg(self.text)
    }

    /// Selected/active element (active tab, current nav item).
    #[must_use]
    pub const fn accent_style(&self) -> Style {
        Style::new().fg(self.accent).bold()
    }

    /// Secondary text (descriptions, separators, overflow markers).
    #[must_use]
    pub const fn muted_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    /// Interaction variants shared by every focusable control.
    #[must_use]
    pub fn control_style(&self) -> InteractiveStyle {
        InteractiveStyle::new(self.text_style())
            .focused(Style::new().fg(self.accent).bold())
            .hover(Style::new().bg(self.surface))
            .active(Style::new().reverse())
            .disabled(Style::new().fg(self.disabled).dim())
    }

    /// Badge face for a tone: reversed so the tone color fills the label.
    #[must_use]
    pub const fn badge_style(&self, tone: Tone) -> Style {
        Style::new().fg(self.background).bg(self.tone(tone)).bold()
    }
}
