#![forbid(unsafe_code)]

//! Cell grid.

use crate::cell::{Cell, CellContent};
use crate::grapheme_width;
use fkit_core::geometry::Rect;

#[inline]
fn is_wide(c: char) -> bool {
    grapheme_width(c.encode_utf8(&mut [0u8; 4])) == 2
}

/// A 2D grid of [`Cell`]s in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer filled with empty cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Rectangle covering the whole buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Cell at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a cell. Writes outside the buffer are dropped.
    ///
    /// A wide glyph also claims the cell to its right as a continuation; if
    /// that cell is outside the buffer the glyph is replaced by a space so a
    /// half-drawn glyph never appears. Overwriting either half of an existing
    /// wide glyph blanks the other half.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if self.index(x, y).is_none() {
            return;
        }
        let wide = cell.content.as_char().is_some_and(is_wide);
        let fits = x.checked_add(1).and_then(|nx| self.index(nx, y)).is_some();
        self.detach(x, y);
        if wide && fits {
            self.detach(x + 1, y);
            if let Some(slot) = self.get_mut(x + 1, y) {
                *slot = Cell {
                    content: CellContent::Continuation,
                    ..cell
                };
            }
        }
        let cell = if wide && !fits {
            Cell {
                content: CellContent::Char(' '),
                ..cell
            }
        } else {
            cell
        };
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Break the wide glyph (if any) that covers (x, y).
    fn detach(&mut self, x: u16, y: u16) {
        match self.get(x, y).map(|c| c.content) {
            Some(CellContent::Continuation) if x > 0 => {
                if let Some(head) = self.get_mut(x - 1, y)
                    && head.content.as_char().is_some_and(is_wide)
                {
                    head.content = CellContent::Char(' ');
                }
            }
            Some(CellContent::Char(c)) if is_wide(c) => {
                if let Some(tail) = self.get_mut(x + 1, y)
                    && tail.content == CellContent::Continuation
                {
                    tail.content = CellContent::Empty;
                }
            }
            _ => {}
        }
    }

    /// Apply `f` to every in-bounds cell of `area`.
    pub fn modify_area(&mut self, area: Rect, mut f: impl FnMut(&mut Cell)) {
        let area = area.intersection(&self.bounds());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    f(cell);
                }
            }
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Glyphs of row `y` as a string; empty cells become spaces and
    /// continuation cells are skipped.
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::with_capacity(self.width as usize);
        for x in 0..self.width {
            match self.get(x, y).map(|c| c.content) {
                Some(CellContent::Char(c)) => out.push(c),
                Some(CellContent::Continuation) => {}
                _ => out.push(' '),
            }
        }
        out
    }

    /// Every row as text, trailing spaces trimmed.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| self.row_text(y).trim_end().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::PackedRgba;

    #[test]
    fn set_and_get_in_bounds() {
        let mut buf = Buffer::new(4, 2);
        buf.set(1, 1, Cell::from_char('a'));
        assert_eq!(buf.get(1, 1).and_then(|c| c.content.as_char()), Some('a'));
        assert!(buf.get(4, 0).is_none());
        buf.set(10, 10, Cell::from_char('z'));
        assert_eq!(buf.to_lines(), vec!["".to_string(), " a".to_string()]);
    }

    #[test]
    fn wide_glyph_claims_continuation() {
        let mut buf = Buffer::new(4, 1);
        buf.set(0, 0, Cell::from_char('日'));
        assert_eq!(buf.get(1, 0).map(|c| c.content), Some(CellContent::Continuation));
        assert_eq!(buf.row_text(0), "日  ");
    }

    #[test]
    fn wide_glyph_at_edge_becomes_space() {
        let mut buf = Buffer::new(2, 1);
        buf.set(1, 0, Cell::from_char('日'));
        assert_eq!(buf.get(1, 0).and_then(|c| c.content.as_char()), Some(' '));
    }

    #[test]
    fn overwriting_half_of_wide_glyph_blanks_other_half() {
        let mut buf = Buffer::new(3, 1);
        buf.set(0, 0, Cell::from_char('日'));
        buf.set(1, 0, Cell::from_char('a'));
        assert_eq!(buf.row_text(0), " a ");

        buf.set(1, 0, Cell::from_char('日'));
        buf.set(1, 0, Cell::from_char('b'));
        assert_eq!(buf.row_text(0), " b ");
    }

    #[test]
    fn modify_area_clips_to_bounds() {
        let mut buf = Buffer::new(3, 3);
        buf.modify_area(Rect::new(2, 2, 5, 5), |c| c.bg = PackedRgba::BLUE);
        assert_eq!(buf.get(2, 2).map(|c| c.bg), Some(PackedRgba::BLUE));
        assert_eq!(buf.get(1, 1).map(|c| c.bg), Some(PackedRgba::TRANSPARENT));
    }

    #[test]
    fn clear_resets_cells() {
        let mut buf = Buffer::new(2, 1);
        buf.set(0, 0, Cell::from_char('q'));
        buf.clear();
        assert!(buf.get(0, 0).is_some_and(Cell::is_empty));
    }
}
