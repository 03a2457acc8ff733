#![forbid(unsafe_code)]

use bitflags::bitflags;
use fkit_render::cell::{Cell, CellFlags, PackedRgba};

bitflags! {
    /// Text attribute flags a [`Style`] can request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u16 {
        const BOLD             = 1 << 0;
        const DIM              = 1 << 1;
        const ITALIC           = 1 << 2;
        const UNDERLINE        = 1 << 3;
        const BLINK            = 1 << 4;
        const REVERSE          = 1 << 5;
        const STRIKETHROUGH    = 1 << 6;
        const HIDDEN           = 1 << 7;
        const DOUBLE_UNDERLINE = 1 << 8;
        const CURLY_UNDERLINE  = 1 << 9;
    }
}

impl From<StyleFlags> for CellFlags {
    fn from(flags: StyleFlags) -> Self {
        let mut out = CellFlags::from_bits_truncate((flags.bits() & 0xff) as u8);
        // Cells have a single underline bit.
        if flags.intersects(StyleFlags::DOUBLE_UNDERLINE | StyleFlags::CURLY_UNDERLINE) {
            out |= CellFlags::UNDERLINE;
        }
        out
    }
}

/// Optional foreground, background, and attributes.
///
/// `None` fields mean "inherit": applying the style to a cell leaves those
/// properties untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Empty style (inherits everything).
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[inline]
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags to whatever this style already requests.
    #[inline]
    #[must_use]
    pub const fn attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(match self.attrs {
            Some(existing) => existing.union(flags),
            None => flags,
        });
        self
    }

    #[inline]
    #[must_use]
    pub const fn bold(self) -> Self {
        self.attrs(StyleFlags::BOLD)
    }

    #[inline]
    #[must_use]
    pub const fn dim(self) -> Self {
        self.attrs(StyleFlags::DIM)
    }

    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        self.attrs(StyleFlags::REVERSE)
    }

    /// True when nothing is set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Overlay `other` on top of `self`: every property `other` sets wins.
    #[must_use]
    pub fn patch(&self, other: &Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: match (self.attrs, other.attrs) {
                (Some(a), Some(b)) => Some(a | b),
                (a, b) => b.or(a),
            },
        }
    }

    /// Fill unset properties of `self` from `fallback`; `self` wins.
    #[must_use]
    pub fn merge(&self, fallback: &Style) -> Style {
        fallback.patch(self)
    }

    /// Write this style into a cell, leaving unset properties alone.
    pub fn apply_to(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs = attrs.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_prefers_other() {
        let base = Style::new().fg(PackedRgba::WHITE).bg(PackedRgba::BLACK);
        let over = Style::new().fg(PackedRgba::RED);
        let out = base.patch(&over);
        assert_eq!(out.fg, Some(PackedRgba::RED));
        assert_eq!(out.bg, Some(PackedRgba::BLACK));
    }

    #[test]
    fn merge_prefers_self() {
        let active = Style::new().fg(PackedRgba::BLUE);
        let base = Style::new().fg(PackedRgba::WHITE).bg(PackedRgba::BLACK);
        let out = active.merge(&base);
        assert_eq!(out.fg, Some(PackedRgba::BLUE));
        assert_eq!(out.bg, Some(PackedRgba::BLACK));
    }

    #[test]
    fn attrs_accumulate() {
        let style = Style::new().bold().reverse();
        assert_eq!(style.attrs, Some(StyleFlags::BOLD | StyleFlags::REVERSE));
        let patched = Style::new().dim().patch(&style);
        assert!(patched.attrs.is_some_and(|a| a.contains(StyleFlags::DIM | StyleFlags::BOLD)));
    }

    #[test]
    fn extended_underlines_map_to_cell_underline() {
        let cell_flags: CellFlags = StyleFlags::CURLY_UNDERLINE.into();
        assert!(cell_flags.contains(CellFlags::UNDERLINE));
        let bold: CellFlags = StyleFlags::BOLD.into();
        assert_eq!(bold, CellFlags::BOLD);
    }

    #[test]
    fn apply_leaves_unset_properties() {
        let mut cell = Cell::from_char('a').with_bg(PackedRgba::BLUE);
        Style::new().fg(PackedRgba::RED).apply_to(&mut cell);
        assert_eq!(cell.fg, PackedRgba::RED);
        assert_eq!(cell.bg, PackedRgba::BLUE);
        assert!(Style::new().is_empty());
    }
}
