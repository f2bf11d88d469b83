//! Core data model for a turn-based tactics game.
//!
//! This crate holds the types the search algorithms in `tactics-paths`
//! operate on:
//!
//! - [`Point`] — 2D integer grid coordinates
//! - [`TileKind`] / [`Tile`] — static terrain records
//! - [`Grid`] — a dense, row-major map of tiles
//!
//! Rendering, unit stats and turn logic live in the embedding game layer;
//! nothing here knows about them.

mod geom;
mod grid;
mod tile;

pub use geom::Point;
pub use grid::{Grid, GridError};
pub use tile::{Tile, TileKind};
