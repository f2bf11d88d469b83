use tactics_core::Point;

/// Manhattan (L1) distance between two points.
///
/// The exact path length on an open grid with 4-directional movement, which
/// makes it an admissible and consistent A* heuristic for any per-tile cost
/// of at least 1.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
