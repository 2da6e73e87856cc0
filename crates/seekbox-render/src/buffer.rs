#![forbid(unsafe_code)]

//! 2D cell grid.

use crate::cell::{Cell, CellContent, StyleFlags};
use seekbox_core::geometry::Rect;

/// Row-major grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a blank buffer.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Full area of the buffer.
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

    /// Get the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a cell. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Mark (x, y) as the trailing half of a wide grapheme.
    pub fn set_continuation(&mut self, x: u16, y: u16, attrs: StyleFlags) {
        self.set(
            x,
            y,
            Cell {
                content: CellContent::Continuation,
                attrs,
            },
        );
    }

    /// OR `flags` into every cell of `area` (clipped to the buffer).
    pub fn add_flags(&mut self, area: Rect, flags: StyleFlags) {
        let area = area.intersection(&self.bounds());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.attrs |= flags;
                }
            }
        }
    }

    /// Reset every cell in `area` to blank.
    pub fn clear_area(&mut self, area: Rect) {
        let area = area.intersection(&self.bounds());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set(x, y, Cell::default());
            }
        }
    }

    /// Reset the whole buffer.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Visible text of row `y`, trailing blanks trimmed.
    ///
    /// Wide graphemes appear once; their continuation cells are skipped.
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::with_capacity(self.width as usize);
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                cell.content.push_to(&mut out);
            }
        }
        out.truncate(out.trim_end().len());
        out
    }

    /// Columns of each visible grapheme in row `y`, paired with its text.
    ///
    /// Used to map a byte offset in [`Buffer::row_text`] back to a column.
    pub fn row_columns(&self, y: u16) -> Vec<(u16, String)> {
        let mut columns = Vec::with_capacity(self.width as usize);
        for x in 0..self.width {
            let Some(cell) = self.get(x, y) else {
                break;
            };
            if cell.content == CellContent::Continuation {
                continue;
            }
            let mut text = String::new();
            cell.content.push_to(&mut text);
            columns.push((x, text));
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut buf = Buffer::new(4, 2);
        buf.set(1, 1, Cell::from_char('x'));
        assert_eq!(buf.get(1, 1).and_then(|c| c.content.as_char()), Some('x'));
        assert!(buf.get(4, 0).is_none());
        buf.set(9, 9, Cell::from_char('y'));
    }

    #[test]
    fn row_text_skips_continuations_and_trims() {
        let mut buf = Buffer::new(6, 1);
        buf.set(0, 0, Cell::from_char('a'));
        buf.set(1, 0, Cell::from_grapheme("漢"));
        buf.set_continuation(2, 0, StyleFlags::empty());
        buf.set(3, 0, Cell::from_char('b'));
        assert_eq!(buf.row_text(0), "a漢b");

        let cols = buf.row_columns(0);
        assert_eq!(cols[1], (1, "漢".to_string()));
        assert_eq!(cols[2], (3, "b".to_string()));
    }

    #[test]
    fn add_flags_is_clipped() {
        let mut buf = Buffer::new(3, 3);
        buf.add_flags(Rect::new(2, 2, 5, 5), StyleFlags::DIM);
        assert!(buf.get(2, 2).is_some_and(|c| c.attrs.contains(StyleFlags::DIM)));
        assert!(buf.get(1, 1).is_some_and(|c| c.attrs.is_empty()));
    }

    #[test]
    fn clear_area_resets_cells() {
        let mut buf = Buffer::new(3, 1);
        for x in 0..3 {
            buf.set(x, 0, Cell::from_char('z'));
        }
        buf.clear_area(Rect::new(1, 0, 1, 1));
        assert_eq!(buf.row_text(0), "z z");
        buf.clear();
        assert_eq!(buf.row_text(0), "");
    }
}
