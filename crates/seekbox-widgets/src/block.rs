#![forbid(unsafe_code)]

use crate::Widget;
use crate::borders::{BorderSet, Borders};
use seekbox_core::geometry::Rect;
use seekbox_render::buffer::Buffer;
use seekbox_render::cell::Cell;
use seekbox_render::frame::Frame;

/// A box drawn with plain single-line borders; the dropdown's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    borders: Borders,
}

impl Block {
    /// Create a block with all borders enabled.
    pub fn bordered() -> Self {
        Self {
            borders: Borders::ALL,
        }
    }

    /// Compute the inner area inside the block's borders.
    pub fn inner(&self, area: Rect) -> Rect {
        let mut inner = area;

        if self.borders.contains(Borders::LEFT) {
            inner.x = inner.x.saturating_add(1);
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::TOP) {
            inner.y = inner.y.saturating_add(1);
            inner.height = inner.height.saturating_sub(1);
        }
        if self.borders.contains(Borders::RIGHT) {
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::BOTTOM) {
            inner.height = inner.height.saturating_sub(1);
        }

        inner
    }

    /// Rows the borders take out of the area's height.
    pub fn vertical_chrome(&self) -> u16 {
        u16::from(self.borders.contains(Borders::TOP))
            + u16::from(self.borders.contains(Borders::BOTTOM))
    }

    fn border_cell(&self, c: char) -> Cell {
        Cell::from_char(c)
    }

    fn render_borders(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let set = BorderSet::PLAIN;

        if self.borders.contains(Borders::LEFT) {
            for y in area.y..area.bottom() {
                buf.set(area.x, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            let x = area.right() - 1;
            for y in area.y..area.bottom() {
                buf.set(x, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::TOP) {
            for x in area.x..area.right() {
                buf.set(x, area.y, self.border_cell(set.horizontal));
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            let y = area.bottom() - 1;
            for x in area.x..area.right() {
                buf.set(x, y, self.border_cell(set.horizontal));
            }
        }

        // Corners overwrite the edge characters.
        if self.borders.contains(Borders::LEFT | Borders::TOP) {
            buf.set(area.x, area.y, self.border_cell(set.top_left));
        }
        if self.borders.contains(Borders::RIGHT | Borders::TOP) {
            buf.set(area.right() - 1, area.y, self.border_cell(set.top_right));
        }
        if self.borders.contains(Borders::LEFT | Borders::BOTTOM) {
            buf.set(area.x, area.bottom() - 1, self.border_cell(set.bottom_left));
        }
        if self.borders.contains(Borders::RIGHT | Borders::BOTTOM) {
            buf.set(
                area.right() - 1,
                area.bottom() - 1,
                self.border_cell(set.bottom_right),
            );
        }
    }
}

impl Widget for Block {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let area = area.intersection(&frame.bounds());
        frame.buffer.clear_area(area);
        self.render_borders(area, &mut frame.buffer);
    }
}
