//! Geometry primitives: [`Point`] and [`Range`].
//!
//! A [`Range`] doubles as the coordinate system of a tile world: every cell
//! inside it has a row-major index, which is how grid-backed graphs turn
//! positions into node identifiers and back.

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A cell position. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cardinal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
        ]
    }

    /// All eight neighbours, clockwise from up.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x + 1, self.y + 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x - 1, self.y - 1),
        ]
    }

    /// Whether `other` differs from `self` on both axes.
    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        self.x != other.x && self.y != other.y
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// Half-open rectangle of cells \[min, max).
///
/// All empty ranges compare equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Range {}

impl Range {
    /// Range spanned by two corners, in either order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Range anchored at the origin with the given dimensions.
    #[inline]
    pub fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major index of `p`, or `None` if `p` lies outside the range.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let y = (p.y - self.min.y) as usize;
        Some(y * self.width() as usize + x)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn point_at(self, idx: usize) -> Option<Point> {
        if idx >= self.len() {
            return None;
        }
        let w = self.width() as usize;
        let x = (idx % w) as i32 + self.min.x;
        let y = (idx / w) as i32 + self.min.y;
        Some(Point::new(x, y))
    }

    /// Cells in row-major order, matching [`index_of`](Self::index_of).
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}
