//! Winning lines.

use super::{Tile, TileSet};
use tracing::instrument;

/// Three tiles in a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line([Tile; 3]);

/// All winning lines, in the order they are checked.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Tile::A1, Tile::B1, Tile::C1]),
    Line([Tile::A2, Tile::B2, Tile::C2]),
    Line([Tile::A3, Tile::B3, Tile::C3]),
    // Columns
    Line([Tile::A1, Tile::A2, Tile::A3]),
    Line([Tile::B1, Tile::B2, Tile::B3]),
    Line([Tile::C1, Tile::C2, Tile::C3]),
    // Diagonals
    Line([Tile::A1, Tile::B2, Tile::C3]),
    Line([Tile::A3, Tile::B2, Tile::C1]),
];

impl Line {
    /// Member tiles, in reporting order.
    pub fn tiles(&self) -> [Tile; 3] {
        self.0
    }

    /// Checks whether all three tiles belong to `owned`.
    pub fn is_completed_by(&self, owned: &TileSet) -> bool {
        owned.is_superset_of(&self.0.into_iter().collect())
    }

    /// Returns the first line, in check order, completed by `owned`.
    #[instrument(level = "trace")]
    pub fn first_completed(owned: &TileSet) -> Option<Line> {
        LINES.into_iter().find(|line| line.is_completed_by(owned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tiles: &[Tile]) -> TileSet {
        tiles.iter().copied().collect()
    }

    #[test]
    fn test_no_line_on_empty_set() {
        assert_eq!(Line::first_completed(&TileSet::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            assert_eq!(Line::first_completed(&owned(&line.tiles())), Some(line));
        }
    }

    #[test]
    fn test_incomplete_line() {
        assert_eq!(Line::first_completed(&owned(&[Tile::A1, Tile::B1])), None);
        assert_eq!(
            Line::first_completed(&owned(&[Tile::A1, Tile::C1, Tile::A3, Tile::C3])),
            None
        );
    }

    #[test]
    fn test_first_match_wins() {
        // Top row and left column both complete: rows are checked first.
        let tiles = owned(&[Tile::A1, Tile::B1, Tile::C1, Tile::A2, Tile::A3]);
        assert_eq!(
            Line::first_completed(&tiles).map(|line| line.tiles()),
            Some([Tile::A1, Tile::B1, Tile::C1])
        );
    }

    #[test]
    fn test_anti_diagonal_order() {
        let tiles = owned(&[Tile::C1, Tile::B2, Tile::A3]);
        assert_eq!(
            Line::first_completed(&tiles).map(|line| line.tiles()),
            Some([Tile::A3, Tile::B2, Tile::C1])
        );
    }
}
