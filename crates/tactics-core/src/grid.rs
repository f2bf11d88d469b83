//! The [`Grid`] type — a dense, row-major 2D map of [`Tile`]s.

use std::fmt;

use crate::geom::Point;
use crate::tile::{Tile, TileKind};

/// Errors raised by [`Grid`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Bulk tile data does not match the grid's declared dimensions.
    DimensionMismatch { expected: usize, got: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(f, "grid: expected {expected} tiles, got {got}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A fixed-size 2D grid of terrain tiles.
///
/// Storage is a single row-major `Vec<Tile>`; `index(p) = p.y * width + p.x`
/// is the only mapping between coordinates and slots. A coordinate is valid
/// iff `0 <= x < width` and `0 <= y < height`.
#[derive(Debug, Clone)]
pub struct Grid {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with plains.
    /// Negative dimensions clamp to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            tiles: vec![Tile::default(); (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }

    /// Width in tiles.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` is a valid coordinate of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Convert a coordinate to its storage slot. `None` if out of bounds.
    #[inline]
    pub fn tile_index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// Convert a storage slot back to its coordinate. `None` if the slot
    /// does not exist, which also covers zero-area grids.
    ///
    /// Inverse of [`tile_index`](Self::tile_index) for every valid
    /// coordinate.
    #[inline]
    pub fn tile_position(&self, idx: usize) -> Option<Point> {
        if idx >= self.tiles.len() {
            return None;
        }
        let w = self.width as usize;
        Some(Point::new((idx % w) as i32, (idx / w) as i32))
    }

    /// The tile at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.tile_index(p).map(|i| self.tiles[i])
    }

    /// Replace the whole map with `kinds`, in row-major order.
    ///
    /// Fails without mutating anything if the slice length disagrees with
    /// `width * height`.
    pub fn load_kinds(&mut self, kinds: &[TileKind]) -> Result<(), GridError> {
        if kinds.len() != self.tiles.len() {
            return Err(GridError::DimensionMismatch {
                expected: self.tiles.len(),
                got: kinds.len(),
            });
        }
        for (slot, &kind) in self.tiles.iter_mut().zip(kinds) {
            *slot = Tile::of(kind);
        }
        Ok(())
    }

    /// Set a single tile's kind. Does nothing if `p` is out of bounds.
    pub fn set_kind(&mut self, p: Point, kind: TileKind) {
        if let Some(i) = self.tile_index(p) {
            self.tiles[i] = Tile::of(kind);
        }
    }

    /// The valid cardinal neighbours of `p`.
    ///
    /// Off-grid coordinates are never yielded, so search frontiers stay
    /// within bounds by construction.
    #[inline]
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(move |&n| self.contains(n))
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(move |(i, &t)| Some((self.tile_position(i)?, t)))
    }
}
