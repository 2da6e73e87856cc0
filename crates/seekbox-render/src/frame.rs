#![forbid(unsafe_code)]

//! Frame = Buffer + metadata for a render pass.
//!
//! The `Frame` is the render target widgets write to. It bundles the cell
//! grid ([`Buffer`]) with metadata for cursor placement and mouse hit testing.
//!
//! # Usage
//!
//! ```
//! use seekbox_render::frame::{Frame, HitId, HitRegion};
//! use seekbox_core::geometry::Rect;
//!
//! let mut frame = Frame::with_hit_grid(20, 4);
//! frame.register_hit(Rect::new(0, 0, 20, 1), HitId::new(1), HitRegion::Content, 0);
//! assert_eq!(frame.hit_test(5, 0), Some((HitId::new(1), HitRegion::Content, 0)));
//! ```

use crate::buffer::Buffer;
use seekbox_core::geometry::Rect;

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
    /// Widget border area.
    Border,
    /// Clickable button or list row.
    Button,
}

/// A single hit cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitCell {
    pub widget_id: Option<HitId>,
    pub region: HitRegion,
    pub data: HitData,
}

impl HitCell {
    /// Create a populated hit cell.
    #[inline]
    pub const fn new(widget_id: HitId, region: HitRegion, data: HitData) -> Self {
        Self {
            widget_id: Some(widget_id),
            region,
            data,
        }
    }

    /// Check if the cell is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.widget_id.is_none()
    }
}

/// Hit testing grid for mouse interaction.
///
/// Maps screen positions to widget IDs. Later registrations win where
/// regions overlap.
#[derive(Debug, Clone)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<HitCell>,
}

impl HitGrid {
    /// Create a new hit grid with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![HitCell::default(); size],
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

    /// Get the hit cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&HitCell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Register a clickable region with the given hit metadata.
    ///
    /// The rectangle is clipped to the grid.
    pub fn register(&mut self, rect: Rect, widget_id: HitId, region: HitRegion, data: HitData) {
        let x_end = (rect.x as usize + rect.width as usize).min(self.width as usize) as u16;
        let y_end = (rect.y as usize + rect.height as usize).min(self.height as usize) as u16;

        let hit_cell = HitCell::new(widget_id, region, data);
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
        self.get(x, y)
            .and_then(|cell| cell.widget_id.map(|id| (id, cell.region, cell.data)))
    }

    /// Every distinct registered hit, in row-major order of first appearance.
    pub fn distinct_hits(&self) -> Vec<(HitId, HitRegion, HitData)> {
        let mut seen = Vec::new();
        for cell in &self.cells {
            if let Some(id) = cell.widget_id {
                let hit = (id, cell.region, cell.data);
                if !seen.contains(&hit) {
                    seen.push(hit);
                }
            }
        }
        seen
    }

    /// Clear all hit regions.
    pub fn clear(&mut self) {
        self.cells.fill(HitCell::default());
    }
}

/// Frame = Buffer + metadata for a render pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid for this render pass.
    pub buffer: Buffer,

    /// Optional hit grid for mouse hit testing.
    ///
    /// When `Some`, widgets can register clickable regions.
    pub hit_grid: Option<HitGrid>,

    /// Cursor position (if a focused widget wants to show one).
    pub cursor_position: Option<(u16, u16)>,

    /// Whether cursor should be visible.
    pub cursor_visible: bool,
}

impl Frame {
    /// Create a new frame with no hit grid.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: None,
            cursor_position: None,
            cursor_visible: false,
        }
    }

    /// Create a frame with hit testing enabled.
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        Self {
            hit_grid: Some(HitGrid::new(width, height)),
            ..Self::new(width, height)
        }
    }

    /// Frame width in cells.
    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Frame height in cells.
    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Get the bounding rectangle of the frame.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// Clear frame for next render.
    ///
    /// Resets the buffer, the hit grid (if present) and the cursor.
    pub fn clear(&mut self) {
        self.buffer.clear();
        if let Some(ref mut grid) = self.hit_grid {
            grid.clear();
        }
        self.cursor_position = None;
        self.cursor_visible = false;
    }

    /// Set cursor position.
    #[inline]
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor_position = position;
    }

    /// Set cursor visibility.
    #[inline]
    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    /// Register a hit region (if hit grid is enabled).
    ///
    /// Returns `true` if the region was registered, `false` if no hit grid.
    pub fn register_hit(&mut self, rect: Rect, id: HitId, region: HitRegion, data: HitData) -> bool {
        if let Some(ref mut grid) = self.hit_grid {
            grid.register(rect, id, region, data);
            true
        } else {
            false
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
    use proptest::prelude::*;

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
        let mut frame = Frame::new(10, 10);
        assert!(!frame.register_hit(Rect::new(0, 0, 5, 5), HitId::new(1), HitRegion::Content, 0));
        assert!(frame.hit_test(1, 1).is_none());
    }

    #[test]
    fn frame_clear_resets_everything() {
        let mut frame = Frame::with_hit_grid(10, 10);
        frame.buffer.set(5, 5, Cell::from_char('X'));
        frame.register_hit(Rect::new(0, 0, 5, 5), HitId::new(1), HitRegion::Content, 0);
        frame.set_cursor(Some((1, 1)));

        frame.clear();

        assert!(frame.buffer.get(5, 5).is_some_and(Cell::is_empty));
        assert!(frame.hit_test(2, 2).is_none());
        assert!(frame.cursor_position.is_none());
    }

    #[test]
    fn overlapping_regions_last_wins() {
        let mut frame = Frame::with_hit_grid(20, 20);
        frame.register_hit(Rect::new(0, 0, 10, 10), HitId::new(1), HitRegion::Border, 0);
        frame.register_hit(Rect::new(1, 1, 8, 1), HitId::new(1), HitRegion::Button, 3);

        assert_eq!(frame.hit_test(0, 0), Some((HitId::new(1), HitRegion::Border, 0)));
        assert_eq!(frame.hit_test(4, 1), Some((HitId::new(1), HitRegion::Button, 3)));
    }

    #[test]
    fn distinct_hits_dedupes_in_row_major_order() {
        let mut grid = HitGrid::new(6, 4);
        grid.register(Rect::new(0, 0, 6, 1), HitId::new(2), HitRegion::Content, 0);
        grid.register(Rect::new(0, 1, 6, 3), HitId::new(2), HitRegion::Border, 0);
        grid.register(Rect::new(1, 2, 4, 1), HitId::new(2), HitRegion::Button, 7);

        assert_eq!(
            grid.distinct_hits(),
            vec![
                (HitId::new(2), HitRegion::Content, 0),
                (HitId::new(2), HitRegion::Border, 0),
                (HitId::new(2), HitRegion::Button, 7),
            ]
        );
        grid.clear();
        assert!(grid.distinct_hits().is_empty());
    }

    #[test]
    fn hit_grid_boundary_clipping() {
        let mut grid = HitGrid::new(10, 10);
        grid.register(Rect::new(8, 8, 10, 10), HitId::new(1), HitRegion::Content, 0);
        assert!(grid.hit_test(9, 9).is_some());
        assert!(grid.hit_test(10, 10).is_none());
    }

    proptest! {
        #[test]
        fn registered_rect_is_hit_exactly_inside(
            x in 0u16..30, y in 0u16..30, w in 0u16..30, h in 0u16..30,
            px in 0u16..40, py in 0u16..40,
        ) {
            let mut grid = HitGrid::new(32, 32);
            let rect = Rect::new(x, y, w, h);
            grid.register(rect, HitId::new(9), HitRegion::Button, 1);
            let inside = rect.contains(px, py) && px < 32 && py < 32;
            prop_assert_eq!(grid.hit_test(px, py).is_some(), inside);
        }
    }
}
