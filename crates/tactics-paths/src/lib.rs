//! Pathfinding and movement-range search over terrain grids.
//!
//! Two entry points, both driven by caller-supplied capability functions so
//! that unit-specific movement rules (a tank cannot enter forest, aircraft
//! ignore ground units, ...) stay outside the engine:
//!
//! - [`find_path`] — A* shortest path between two coordinates
//! - [`reachable_tiles`] — every tile reachable within a movement budget
//!
//! Both are built on [`PriorityQueue`], a decrease-key binary min-heap with
//! a pluggable tie-break comparator that makes path choice deterministic
//! when several equal-cost paths exist.

mod astar;
mod distance;
mod pqueue;
mod reach;

pub use astar::find_path;
pub use distance::manhattan;
pub use pqueue::{EmptyQueueError, PriorityQueue};
pub use reach::reachable_tiles;
