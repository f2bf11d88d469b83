//! Static terrain data: [`TileKind`] and [`Tile`].
//!
//! A tile's combat modifiers (defense, attack range) are fixed per kind and
//! consumed by the combat layer; movement *cost* is deliberately not stored
//! here — each unit type supplies its own cost function to the search
//! algorithms, so a tank and an aircraft can price the same forest
//! differently.

use std::fmt;

/// The closed set of terrain kinds.
///
/// Each kind has a stable integer id (its discriminant) used by map loaders,
/// which store maps as flat arrays of ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum TileKind {
    #[default]
    Plains = 0,
    Road = 1,
    Sand = 2,
    Forest = 3,
    Mountain = 4,
    Water = 5,
    Wall = 6,
}

impl TileKind {
    /// Look up a kind by its stable id. Returns `None` for unknown ids.
    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Self::Plains),
            1 => Some(Self::Road),
            2 => Some(Self::Sand),
            3 => Some(Self::Forest),
            4 => Some(Self::Mountain),
            5 => Some(Self::Water),
            6 => Some(Self::Wall),
            _ => None,
        }
    }

    /// The stable id of this kind.
    pub const fn id(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plains => "plains",
            Self::Road => "road",
            Self::Sand => "sand",
            Self::Forest => "forest",
            Self::Mountain => "mountain",
            Self::Water => "water",
            Self::Wall => "wall",
        };
        f.write_str(name)
    }
}

/// A single grid cell's terrain record.
///
/// Immutable by convention: tiles are built from their kind via [`Tile::of`]
/// and looked up, never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub kind: TileKind,
    pub passable: bool,
    pub defense_bonus: i32,
    pub range_bonus: i32,
}

impl Tile {
    /// The terrain record for a given kind.
    pub const fn of(kind: TileKind) -> Self {
        use TileKind::*;
        let (passable, defense_bonus, range_bonus) = match kind {
            Plains => (true, 0, 0),
            Road => (true, 0, 0),
            Sand => (true, 0, 0),
            Forest => (true, 2, 0),
            Mountain => (true, 3, 1),
            Water => (false, 0, 0),
            Wall => (false, 0, 0),
        };
        Self {
            kind,
            passable,
            defense_bonus,
            range_bonus,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::of(TileKind::Plains)
    }
}

impl From<TileKind> for Tile {
    fn from(kind: TileKind) -> Self {
        Self::of(kind)
    }
}
