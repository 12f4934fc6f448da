//! Board tiles and tile sets.

use derive_more::{Display, Error};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A tile on the 3x3 board, named by column letter and row number.
///
/// Codes are exactly two characters: `A1` is the top-left tile and
/// `C3` the bottom-right one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum Tile {
    /// Column A, row 1.
    A1,
    /// Column B, row 1.
    B1,
    /// Column C, row 1.
    C1,
    /// Column A, row 2.
    A2,
    /// Column B, row 2.
    B2,
    /// Column C, row 2.
    C2,
    /// Column A, row 3.
    A3,
    /// Column B, row 3.
    B3,
    /// Column C, row 3.
    C3,
}

impl Tile {
    /// All 9 tiles in row-major order.
    pub const ALL: [Tile; 9] = [
        Tile::A1,
        Tile::B1,
        Tile::C1,
        Tile::A2,
        Tile::B2,
        Tile::C2,
        Tile::A3,
        Tile::B3,
        Tile::C3,
    ];

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a tile from its row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Column letter (`'A'`, `'B'` or `'C'`).
    pub fn column(self) -> char {
        match self.index() % 3 {
            0 => 'A',
            1 => 'B',
            _ => 'C',
        }
    }

    /// Row number (1-3).
    pub fn row(self) -> u8 {
        (self.index() / 3) as u8 + 1
    }

    /// Two-character code as used in move strings.
    pub fn code(self) -> &'static str {
        self.into()
    }
}

/// A chunk of a move string that does not name a tile.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown tile code {:?}", code)]
pub struct UnknownTile {
    /// The offending chunk.
    pub code: String,
}

impl FromStr for Tile {
    type Err = UnknownTile;

    /// Parses an exact, case-sensitive tile code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tile| tile.code() == s)
            .ok_or_else(|| UnknownTile {
                code: s.to_string(),
            })
    }
}

/// A set of tiles stored as a 9-bit mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TileSet(u16);

impl TileSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Adds a tile. Returns `false` if it was already present.
    pub fn insert(&mut self, tile: Tile) -> bool {
        let bit = 1 << tile.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Checks whether the tile is in the set.
    pub fn contains(&self, tile: Tile) -> bool {
        self.0 & (1 << tile.index()) != 0
    }

    /// Number of tiles in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks whether every tile of `other` is also in `self`.
    pub fn is_superset_of(&self, other: &TileSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Iterates the tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        Tile::ALL.into_iter().filter(|tile| self.contains(*tile))
    }
}

impl FromIterator<Tile> for TileSet {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut set = TileSet::new();
        for tile in iter {
            set.insert(tile);
        }
        set
    }
}
