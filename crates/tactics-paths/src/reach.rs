//! Movement-range search: every tile a unit can reach this turn.

use std::collections::HashSet;

use tactics_core::{Grid, Point, Tile};

use crate::pqueue::PriorityQueue;

/// Collect every coordinate reachable from `start` within `max_cost`.
///
/// Uniform-cost expansion (Dijkstra) — deliberately not A*, since there is
/// no single target to estimate toward. `cost_fn` and `passable_fn` follow
/// the same contract as [`find_path`](crate::find_path): the cost charged
/// per step is that of the tile being *left*, and the passable predicate
/// receives the coordinate for occupancy checks. The result always contains
/// `start`.
///
/// A tile can be discovered before it is known to be affordable: it enters
/// the frontier at whatever cost was found first and joins the reachable
/// set only once some route puts it within budget. Frontier entries popped
/// over budget are not expanded, but cheaper entries behind them still are.
pub fn reachable_tiles<C, P>(
    grid: &Grid,
    start: Point,
    max_cost: i32,
    cost_fn: C,
    passable_fn: P,
) -> HashSet<Point>
where
    C: Fn(Tile) -> i32,
    P: Fn(Tile, Point) -> bool,
{
    let mut open: PriorityQueue<Point> = PriorityQueue::new();
    let mut visited: HashSet<Point> = HashSet::new();
    let mut reachable: HashSet<Point> = HashSet::new();

    reachable.insert(start);
    open.update(start, 0);

    while let Ok((cur, cost)) = open.pop_min() {
        visited.insert(cur);

        // Too expensive to move on from; cheaper frontier entries may
        // remain, so keep draining rather than terminating.
        if cost > max_cost {
            continue;
        }

        let Some(cur_tile) = grid.tile(cur) else {
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

            let n_cost = cost + leave;
            // Confirmed reachable only when the entry is new or improved
            // *and* the route fits the budget; an over-budget discovery
            // stays queued in case a cheaper route turns up.
            if open.update(n, n_cost) && n_cost <= max_cost {
                reachable.insert(n);
            }
        }
    }

    log::trace!(
        "range from {start} (budget {max_cost}): {} tiles",
        reachable.len()
    );
    reachable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use tactics_core::TileKind;

    fn unit_cost(_: Tile) -> i32 {
        1
    }

    fn ground(tile: Tile, _: Point) -> bool {
        tile.passable
    }

    #[test]
    fn open_grid_diamond() {
        let grid = Grid::new(5, 5);
        let center = Point::new(2, 2);
        let reached = reachable_tiles(&grid, center, 2, unit_cost, ground);
        // The Manhattan-distance-<=2 diamond, 13 cells on an open 5x5 map.
        assert_eq!(reached.len(), 13);
        for (p, _) in grid.iter() {
            assert_eq!(reached.contains(&p), manhattan(p, center) <= 2);
        }
    }

    #[test]
    fn diamond_clips_to_bounds() {
        let grid = Grid::new(5, 5);
        let corner = Point::new(0, 0);
        let reached = reachable_tiles(&grid, corner, 2, unit_cost, ground);
        assert_eq!(reached.len(), 6);
        assert!(reached.contains(&Point::new(2, 0)));
        assert!(reached.contains(&Point::new(1, 1)));
        assert!(!reached.contains(&Point::new(2, 1)));
    }

    #[test]
    fn start_always_included() {
        let mut grid = Grid::new(3, 3);
        // Wall the center in completely.
        for p in Point::new(1, 1).neighbors_4() {
            grid.set_kind(p, TileKind::Wall);
        }
        let reached = reachable_tiles(&grid, Point::new(1, 1), 5, unit_cost, ground);
        assert_eq!(reached.len(), 1);
        assert!(reached.contains(&Point::new(1, 1)));
    }

    #[test]
    fn zero_budget_is_singleton() {
        let grid = Grid::new(4, 4);
        let reached = reachable_tiles(&grid, Point::new(2, 2), 0, unit_cost, ground);
        assert_eq!(reached.len(), 1);
    }

    #[test]
    fn cost_charged_for_tile_left_not_entered() {
        // Start on a forest: the forest's cost is paid when stepping off it,
        // so a budget below that cost pins the unit in place.
        let mut grid = Grid::new(5, 5);
        grid.set_kind(Point::new(2, 2), TileKind::Forest);
        let by_kind = |t: Tile| match t.kind {
            TileKind::Forest => 5,
            _ => 1,
        };
        let pinned = reachable_tiles(&grid, Point::new(2, 2), 4, by_kind, ground);
        assert_eq!(pinned.len(), 1);
        // Budget 5 pays for exactly one step off the forest.
        let one_step = reachable_tiles(&grid, Point::new(2, 2), 5, by_kind, ground);
        assert_eq!(one_step.len(), 5);
    }

    #[test]
    fn over_budget_discovery_confirmed_by_cheaper_route() {
        // S F t .      S = start, F = forest (costly to leave)
        // . . . .      t = first discovered over budget through F,
        //              later confirmed through the plains row below.
        let mut grid = Grid::new(4, 2);
        grid.set_kind(Point::new(1, 0), TileKind::Forest);
        let by_kind = |t: Tile| match t.kind {
            TileKind::Forest => 6,
            _ => 1,
        };
        let reached = reachable_tiles(&grid, Point::new(0, 0), 4, by_kind, ground);
        // (2, 0) costs 7 through the forest but 4 around it.
        assert!(reached.contains(&Point::new(2, 0)));
        // (3, 0) costs 5 at best and stays out.
        assert!(!reached.contains(&Point::new(3, 0)));
        assert_eq!(
            reached,
            [(0, 0), (1, 0), (0, 1), (1, 1), (2, 1), (3, 1), (2, 0)]
                .into_iter()
                .map(|(x, y)| Point::new(x, y))
                .collect::<HashSet<_>>()
        );
    }

    #[test]
    fn occupancy_predicate_excludes_tiles() {
        let grid = Grid::new(3, 1);
        let occupied = Point::new(1, 0);
        let free = move |t: Tile, p: Point| t.passable && p != occupied;
        let reached = reachable_tiles(&grid, Point::new(0, 0), 3, unit_cost, free);
        assert_eq!(reached.len(), 1);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let mut grid = Grid::new(6, 6);
        grid.set_kind(Point::new(2, 2), TileKind::Water);
        grid.set_kind(Point::new(3, 2), TileKind::Forest);
        let by_kind = |t: Tile| match t.kind {
            TileKind::Forest => 3,
            _ => 1,
        };
        let a = reachable_tiles(&grid, Point::new(2, 3), 4, by_kind, ground);
        let b = reachable_tiles(&grid, Point::new(2, 3), 4, by_kind, ground);
        assert_eq!(a, b);
    }
}
