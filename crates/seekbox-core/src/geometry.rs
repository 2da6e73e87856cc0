#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangle for layout bounds and hit testing.
///
/// Uses terminal coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// A single row of this rectangle, or an empty rect past the bottom.
    #[must_use]
    pub fn row(&self, offset: u16) -> Rect {
        if offset >= self.height {
            return Rect::new(self.x, self.bottom(), self.width, 0);
        }
        Rect::new(self.x, self.y + offset, self.width, 1)
    }

    /// The part of this rectangle below its first `rows` rows.
    #[must_use]
    pub fn below(&self, rows: u16) -> Rect {
        let rows = rows.min(self.height);
        Rect::new(self.x, self.y + rows, self.width, self.height - rows)
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_and_contains() {
        let r = Rect::new(2, 3, 4, 5);
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 7));
        assert!(!r.contains(5, 8));
    }

    #[test]
    fn empty_rect() {
        assert!(Rect::new(0, 0, 0, 4).is_empty());
        assert!(Rect::new(0, 0, 4, 0).is_empty());
        assert!(!Rect::from_size(1, 1).is_empty());
    }

    #[test]
    fn row_and_below_split() {
        let r = Rect::new(1, 1, 10, 4);
        assert_eq!(r.row(0), Rect::new(1, 1, 10, 1));
        assert_eq!(r.row(3), Rect::new(1, 4, 10, 1));
        assert!(r.row(4).is_empty());
        assert_eq!(r.below(1), Rect::new(1, 2, 10, 3));
        assert!(r.below(9).is_empty());
    }

    #[test]
    fn intersection_disjoint_is_empty() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 10, 2, 2);
        assert!(a.intersection_opt(&b).is_none());
        assert_eq!(a.intersection(&b), Rect::default());
        assert_eq!(
            a.intersection(&Rect::new(3, 3, 5, 5)),
            Rect::new(3, 3, 2, 2)
        );
    }
}
