#![forbid(unsafe_code)]

//! Frame = Buffer + metadata for a render pass.
//!
//! The `Frame` is the render target widgets write to. It bundles the cell
//! grid ([`Buffer`]) with an optional hit grid for mouse routing and a
//! cursor position.
//!
//! # Usage
//!
//! ```
//! use fkit_render::frame::Frame;
//! use fkit_render::cell::Cell;
//!
//! let mut frame = Frame::new(80, 24);
//! frame.buffer.set(0, 0, Cell::from_char('H'));
//! frame.set_cursor(Some((1, 0)));
//! ```

use crate::buffer::Buffer;
use fkit_core::geometry::Rect;

/// Identifier for a clickable region in the hit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

impl HitId {
    /// Create a new hit ID from a raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Opaque user data for hit callbacks.
pub type HitData = u64;

/// Regions within a widget for mouse interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    /// No interactive region.
    #[default]
    None,
    /// Main content area.
    Content,
    /// Clickable button (dropdown trigger, group header).
    Button,
    /// Overflow/scroll marker.
    Scrollbar,
}

/// A single hit cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitCell {
    pub widget_id: Option<HitId>,
    pub region: HitRegion,
    pub data: HitData,
}

/// Hit testing grid: maps screen positions to the widget that drew there.
#[derive(Debug, Clone)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<HitCell>,
}

impl HitGrid {
    /// Create a new hit grid with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![HitCell::default(); width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Register a clickable region; later registrations win on overlap.
    pub fn register(&mut self, rect: Rect, widget_id: HitId, region: HitRegion, data: HitData) {
        // Use usize to avoid overflow for large coordinates
        let x_end = (rect.x as usize + rect.width as usize).min(self.width as usize) as u16;
        let y_end = (rect.y as usize + rect.height as usize).min(self.height as usize) as u16;

        let hit_cell = HitCell {
            widget_id: Some(widget_id),
            region,
            data,
        };
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                if let Some(i) = self.index(x, y) {
                    self.cells[i] = hit_cell;
                }
            }
        }
    }

    /// Hit test at the given position.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        let cell = self.index(x, y).map(|i| &self.cells[i])?;
        cell.widget_id.map(|id| (id, cell.region, cell.data))
    }

    /// Clear all hit regions.
    pub fn clear(&mut self) {
        self.cells.fill(HitCell::default());
    }
}

/// Buffer plus hit grid and cursor for a single render pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid for this render pass.
    pub buffer: Buffer,

    /// Optional hit grid; when `Some`, widgets register clickable regions.
    pub hit_grid: Option<HitGrid>,

    /// Cursor position, relative to the buffer.
    pub cursor_position: Option<(u16, u16)>,
}

impl Frame {
    /// Create a new frame without hit testing.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: None,
            cursor_position: None,
        }
    }

    /// Create a frame with hit testing enabled.
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        Self {
            hit_grid: Some(HitGrid::new(width, height)),
            ..Self::new(width, height)
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// Reset buffer, hit grid, and cursor for the next render.
    pub fn clear(&mut self) {
        self.buffer.clear();
        if let Some(grid) = self.hit_grid.as_mut() {
            grid.clear();
        }
        self.cursor_position = None;
    }

    #[inline]
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor_position = position;
    }

    /// Register a hit region (if hit grid is enabled).
    ///
    /// Returns `true` if the region was registered, `false` if no hit grid.
    pub fn register_hit(&mut self, rect: Rect, id: HitId, region: HitRegion, data: HitData) -> bool {
        match self.hit_grid.as_mut() {
            Some(grid) => {
                grid.register(rect, id, region, data);
                true
            }
            None => false,
        }
    }

    /// Hit test at the given position (if hit grid is enabled).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.hit_grid.as_ref().and_then(|grid| grid.hit_test(x, y))
    }
}

impl Default for Frame {
    /// Create a 1x1 frame (minimum size).
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn frame_creation() {
        let frame = Frame::new(80, 24);
        assert_eq!(frame.width(), 80);
        assert_eq!(frame.height(), 24);
        assert!(frame.hit_grid.is_none());
        assert!(frame.cursor_position.is_none());
    }

    #[test]
    fn register_without_grid_is_noop() {
        let mut frame = Frame::new(4, 4);
        assert!(!frame.register_hit(Rect::new(0, 0, 2, 2), HitId::new(1), HitRegion::Content, 0));
        assert!(frame.hit_test(0, 0).is_none());
    }

    #[test]
    fn later_registration_wins() {
        let mut frame = Frame::with_hit_grid(6, 1);
        frame.register_hit(Rect::new(0, 0, 6, 1), HitId::new(1), HitRegion::Content, 0);
        frame.register_hit(Rect::new(2, 0, 2, 1), HitId::new(2), HitRegion::Button, 9);
        assert_eq!(frame.hit_test(1, 0), Some((HitId::new(1), HitRegion::Content, 0)));
        assert_eq!(frame.hit_test(3, 0), Some((HitId::new(2), HitRegion::Button, 9)));
        assert!(frame.hit_test(6, 0).is_none());
    }

    #[test]
    fn frame_clear() {
        let mut frame = Frame::with_hit_grid(10, 10);
        frame.buffer.set(5, 5, Cell::from_char('X'));
        frame.register_hit(Rect::new(0, 0, 5, 5), HitId::new(1), HitRegion::Content, 0);
        frame.set_cursor(Some((1, 1)));

        frame.clear();

        assert!(frame.buffer.get(5, 5).is_some_and(Cell::is_empty));
        assert!(frame.hit_test(2, 2).is_none());
        assert!(frame.cursor_position.is_none());
    }
}
