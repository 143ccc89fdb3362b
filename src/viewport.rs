//! Mapping from logical playfield units onto the terminal's cell grid.
//!
//! Sprite glyphs are placed by their logical cell, not by terminal cell, so
//! the drawn footprint covers the same area as the collision rectangle at
//! any terminal size.

use crate::config::{CELL_HEIGHT, CELL_WIDTH};
use crate::geometry::Rect;

/// The terminal grid the playfield is stretched over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    /// Logical playfield size.
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, width: i32, height: i32) -> Self {
        Viewport { cols, rows, width, height }
    }

    /// Terminal cell holding logical point `(x, y)`; may be off-grid.
    pub fn cell(&self, x: i32, y: i32) -> (i64, i64) {
        let col = (x as i64 * self.cols as i64).div_euclid(self.width.max(1) as i64);
        let row = (y as i64 * self.rows as i64).div_euclid(self.height.max(1) as i64);
        (col, row)
    }

    /// Terminal cell for the glyph at `(col, row)` of a sprite whose
    /// rectangle is `rect`.
    pub fn glyph_cell(&self, rect: &Rect, col: usize, row: usize) -> (i64, i64) {
        self.cell(
            rect.x + col as i32 * CELL_WIDTH,
            rect.y + row as i32 * CELL_HEIGHT,
        )
    }

    pub fn contains(&self, col: i64, row: i64) -> bool {
        (0..self.cols as i64).contains(&col) && (0..self.rows as i64).contains(&row)
    }
}
