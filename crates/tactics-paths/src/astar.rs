//! A* shortest-path search between two grid coordinates.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use tactics_core::{Grid, Point, Tile};

use crate::distance::manhattan;
use crate::pqueue::PriorityQueue;

/// Compute the shortest path from `start` to `end`.
///
/// `cost_fn` gives the cost of *leaving* a tile (>= 1); the cost charged for
/// a step is that of the tile being departed, which is the convention the
/// unit movement tables are defined against. `passable_fn` decides whether a
/// tile may be entered and also receives the coordinate, so the caller can
/// consult state outside the grid (a unit already standing there, say).
///
/// Returns the full path from `start` to `end` inclusive, or an empty `Vec`
/// when no path exists — absence of a path is an ordinary outcome, not an
/// error. `find_path(g, s, s, ..)` returns `[s]` for any in-bounds `s`;
/// off-grid endpoints always yield no path.
///
/// When several shortest paths exist, the one hugging the straight
/// `start`→`end` line is chosen, so results are reproducible: equal-cost
/// frontier entries are ordered by squared distance to that segment
/// (rounded to thousandths), then by smaller `y`, then smaller `x`.
pub fn find_path<C, P>(
    grid: &Grid,
    start: Point,
    end: Point,
    cost_fn: C,
    passable_fn: P,
) -> Vec<Point>
where
    C: Fn(Tile) -> i32,
    P: Fn(Tile, Point) -> bool,
{
    let mut open = PriorityQueue::with_tie_break(line_bias(start, end));
    let mut visited: HashSet<Point> = HashSet::new();
    let mut g_cost: HashMap<Point, i32> = HashMap::new();
    let mut parent: HashMap<Point, Point> = HashMap::new();

    g_cost.insert(start, 0);
    open.update(start, 0);

    while !visited.contains(&end) {
        let Ok((cur, _)) = open.pop_min() else {
            break;
        };
        // An off-grid coordinate (only ever a seeded endpoint) has no tile
        // and is discarded before the goal test, so searches from or to one
        // exhaust through the normal code path.
        let Some(cur_tile) = grid.tile(cur) else {
            continue;
        };
        visited.insert(cur);
        if cur == end {
            break;
        }
        let Some(&cur_g) = g_cost.get(&cur) else {
            continue;
        };
        let leave = cost_fn(cur_tile);

        for n in grid.neighbors(cur) {
            if visited.contains(&n) {
                continue;
            }
            let Some(n_tile) = grid.tile(n) else {
                continue;
            };
            if !passable_fn(n_tile, n) {
                continue;
            }

            let g = cur_g + leave;
            if g_cost.get(&n).is_some_and(|&old| g >= old) {
                continue;
            }
            g_cost.insert(n, g);
            parent.insert(n, cur);
            open.update(n, g + manhattan(n, end));
        }
    }

    if !visited.contains(&end) {
        return Vec::new();
    }

    // Walk the parent links back from the goal; start has no parent.
    let mut path = vec![end];
    let mut cur = end;
    while let Some(&prev) = parent.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    log::trace!(
        "path {start} -> {end}: {} steps, {} tiles expanded",
        path.len(),
        visited.len()
    );
    path
}

/// Deterministic preference between equal-priority frontier tiles: closer
/// to the straight `start`→`end` segment wins, then smaller `y`, then
/// smaller `x`.
fn line_bias(start: Point, end: Point) -> impl Fn(Point, Point) -> Ordering {
    move |a, b| {
        seg_dist_sq_millis(a, start, end)
            .cmp(&seg_dist_sq_millis(b, start, end))
            .then(a.y.cmp(&b.y))
            .then(a.x.cmp(&b.x))
    }
}

/// Squared distance from `p` to the segment `a..b`, in thousandths.
///
/// Rounding to three decimals before comparing keeps floating-point jitter
/// from flipping equal-distance candidates.
fn seg_dist_sq_millis(p: Point, a: Point, b: Point) -> i64 {
    let (px, py) = (p.x as f64, p.y as f64);
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (abx, aby) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq == 0.0 {
        // Degenerate segment: distance to the point itself.
        0.0
    } else {
        (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0)
    };
    let dx = px - (ax + t * abx);
    let dy = py - (ay + t * aby);
    ((dx * dx + dy * dy) * 1000.0).round() as i64
}
