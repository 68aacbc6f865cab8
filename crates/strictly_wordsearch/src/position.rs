//! Grid coordinates for word-search cells.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the puzzle grid, as `(row, col)`, 0-indexed.
///
/// Serialized as a two-element array (`[row, col]`) to match the
/// placement paths the puzzle generator emits. Equality is structural.
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
    derive_more::Display,
)]
#[display("({}, {})", _0, _1)]
pub struct Position(pub usize, pub usize);

impl Position {
    /// Creates a position from row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self(row, col)
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.0
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.1
    }

    /// Returns true if `other` touches this cell horizontally, vertically
    /// or diagonally. A cell is never adjacent to itself.
    pub fn is_adjacent(self, other: Position) -> bool {
        let row_diff = self.0.abs_diff(other.0);
        let col_diff = self.1.abs_diff(other.1);
        row_diff <= 1 && col_diff <= 1 && !(row_diff == 0 && col_diff == 0)
    }

    /// Steps one cell in `direction`, or `None` if that leaves the
    /// `rows` x `cols` grid.
    pub fn step(self, direction: Direction, rows: usize, cols: usize) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        (row < rows && col < cols).then_some(Position(row, col))
    }

    /// All in-bounds neighbours of this cell.
    #[instrument]
    pub fn neighbors(self, rows: usize, cols: usize) -> Vec<Position> {
        Direction::iter()
            .filter_map(|direction| self.step(direction, rows, cols))
            .collect()
    }

    /// Canonical `"row,col"` fragment used in path keys.
    pub fn key(self) -> String {
        format!("{},{}", self.0, self.1)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self(row, col)
    }
}

/// The eight compass directions a path can step in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Direction {
    /// Up and to the left.
    NorthWest,
    /// Up.
    North,
    /// Up and to the right.
    NorthEast,
    /// Left.
    West,
    /// Right.
    East,
    /// Down and to the left.
    SouthWest,
    /// Down.
    South,
    /// Down and to the right.
    SouthEast,
}

impl Direction {
    /// `(row, col)` delta for one step.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_includes_diagonals() {
        let center = Position::new(1, 1);
        for neighbor in center.neighbors(3, 3) {
            assert!(center.is_adjacent(neighbor), "{neighbor} should touch {center}");
        }
        assert_eq!(center.neighbors(3, 3).len(), 8);
    }

    #[test]
    fn test_not_adjacent_to_self() {
        let pos = Position::new(2, 2);
        assert!(!pos.is_adjacent(pos));
    }

    #[test]
    fn test_not_adjacent_two_apart() {
        assert!(!Position::new(0, 0).is_adjacent(Position::new(0, 2)));
        assert!(!Position::new(0, 0).is_adjacent(Position::new(2, 1)));
    }

    #[test]
    fn test_corner_neighbors_clipped() {
        let corner = Position::new(0, 0);
        let mut neighbors = corner.neighbors(2, 2);
        neighbors.sort();
        assert_eq!(
            neighbors,
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&Position::new(3, 4)).unwrap();
        assert_eq!(json, "[3,4]");
        let back: Position = serde_json::from_str("[3,4]").unwrap();
        assert_eq!(back, Position::new(3, 4));
    }
}
