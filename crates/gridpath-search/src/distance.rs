use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible for 4-directional unit-cost movement: every step changes the
/// row or the column by exactly one.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
