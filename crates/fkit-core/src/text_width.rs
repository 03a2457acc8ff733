#![forbid(unsafe_code)]

//! Display width helpers shared by the render kernel and widgets.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width in terminal columns of a single grapheme cluster.
///
/// Zero-width clusters (combining marks on their own) report 0; anything
/// wider than two columns is clamped to 2.
#[inline]
pub fn grapheme_width(grapheme: &str) -> usize {
    UnicodeWidthStr::width(grapheme).min(2)
}

/// Width in terminal columns of a string.
#[inline]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        return text.bytes().filter(|b| !b.is_ascii_control()).count();
    }
    text.graphemes(true).map(grapheme_width).sum()
}

/// Truncate `text` so it occupies at most `max_width` columns.
///
/// Never splits a grapheme cluster.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0usize;
    for (idx, g) in text.grapheme_indices(true) {
        let w = grapheme_width(g);
        if used + w > max_width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_width_counts_printable_bytes() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn wide_glyphs_take_two_columns() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(grapheme_width("●"), 1);
    }

    #[test]
    fn truncate_respects_grapheme_boundaries() {
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
        assert_eq!(truncate_to_width("日本語", 3), "日");
        assert_eq!(truncate_to_width("ab", 10), "ab");
        assert_eq!(truncate_to_width("ab", 0), "");
    }
}
