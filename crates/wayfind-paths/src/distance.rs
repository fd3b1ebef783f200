use wayfind_core::Point;

use crate::connection::Cost;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Straight-line (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> Cost {
    let dx = (a.x - b.x) as Cost;
    let dy = (a.y - b.y) as Cost;
    (dx * dx + dy * dy).sqrt()
}

/// Exact cost of an unobstructed 8-way walk with unit cardinal steps and
/// `SQRT_2` diagonal steps.
#[inline]
pub fn octile(a: Point, b: Point) -> Cost {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    (hi - lo) as Cost + lo as Cost * std::f32::consts::SQRT_2
}
