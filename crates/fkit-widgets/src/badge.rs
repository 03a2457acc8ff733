#![forbid(unsafe_code)]

//! Inline status badge.

use crate::{Widget, draw_text_span};
use fkit_core::geometry::Rect;
use fkit_core::text_width::display_width;
use fkit_render::frame::Frame;
use fkit_style::{Style, Theme, Tone};

/// A short label drawn as ` label ` in its tone's colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    label: String,
    tone: Tone,
    style: Style,
}

impl Badge {
    /// Neutral badge in the default theme.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tone: Tone::Neutral,
            style: Theme::default().badge_style(Tone::Neutral),
        }
    }

    /// Set the tone, resolving its colors through the default theme.
    #[must_use]
    pub fn tone(self, tone: Tone) -> Self {
        self.themed(tone, &Theme::default())
    }

    /// Set the tone, resolving its colors through `theme`.
    #[must_use]
    pub fn themed(mut self, tone: Tone, theme: &Theme) -> Self {
        self.tone = tone;
        self.style = theme.badge_style(tone);
        self
    }

    /// Explicit style, bypassing the theme.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn current_tone(&self) -> Tone {
        self.tone
    }

    /// Columns the badge occupies, padding included.
    #[must_use]
    pub fn width(&self) -> u16 {
        u16::try_from(display_width(&self.label) + 2).unwrap_or(u16::MAX)
    }
}

impl Widget for Badge {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let right = area.x.saturating_add(self.width()).min(area.right());
        let mut x = draw_text_span(frame, area.x, area.y, " ", self.style, right);
        x = draw_text_span(frame, x, area.y, &self.label, self.style, right);
        draw_text_span(frame, x, area.y, " ", self.style, right);
    }
}
