//! Core domain types for word-search puzzles.

use crate::{PayloadError, Position};
use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Rectangular letter grid.
///
/// Cells are single-character strings, exactly as the generator sends them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Creates a grid from rows of letters.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Builds a grid from one string per row, one letter per char.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.as_ref().chars().map(String::from).collect())
                .collect(),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the first row (0 for an empty grid).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Letter at `pos`, if on the board.
    pub fn get(&self, pos: Position) -> Option<&str> {
        self.rows
            .get(pos.row())
            .and_then(|row| row.get(pos.col()))
            .map(String::as_str)
    }

    /// Returns true if `pos` lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Returns the rows as slices.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Formats the grid as space-separated letters, one row per line.
    pub fn display(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Whether a placement is the special word or an ordinary target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum PlacementKind {
    /// The distinguished special word.
    #[strum(serialize = "special")]
    Special,
    /// Any other target word.
    #[strum(serialize = "ordinary")]
    Ordinary,
}

/// The correct cell path for one target word.
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema, derive_new::new,
)]
pub struct WordPlacement {
    /// Target word text.
    word: String,
    /// Cells spelling the word, first letter first.
    path: Vec<Position>,
}

/// Placements for every target word in a puzzle.
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema, derive_new::new,
)]
pub struct PlacementInfo {
    /// Placement of the special word.
    #[serde(alias = "spangram")]
    special_word: WordPlacement,
    /// Placements of the ordinary words, in word-list order.
    words: Vec<WordPlacement>,
}

impl PlacementInfo {
    /// All placements in search order: the special word first, then the
    /// ordinary words as listed.
    pub fn iter(&self) -> impl Iterator<Item = (PlacementKind, &WordPlacement)> {
        std::iter::once((PlacementKind::Special, &self.special_word))
            .chain(self.words.iter().map(|p| (PlacementKind::Ordinary, p)))
    }

    /// Total number of placements (ordinary words plus the special word).
    pub fn len(&self) -> usize {
        self.words.len() + 1
    }

    /// Always false: a puzzle has at least the special word.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A finished puzzle as delivered by the generation service.
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema, derive_new::new,
)]
pub struct PuzzlePayload {
    /// Puzzle theme.
    theme: String,
    /// Text of the special word.
    #[serde(alias = "spangram")]
    special_word: String,
    /// Ordinary target words, in display order.
    words: Vec<String>,
    /// Letter grid.
    board: Grid,
    /// Ground-truth placements for every target word.
    placement_info: PlacementInfo,
}

impl PuzzlePayload {
    /// Parses a payload from the generator's JSON.
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        let payload: Self = serde_json::from_str(json)?;
        debug!(
            theme = %payload.theme,
            words = payload.words.len(),
            rows = payload.board.height(),
            cols = payload.board.width(),
            "Parsed puzzle payload"
        );
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATOR_JSON: &str = r#"{
        "theme": "Pets",
        "spangram": "CAT",
        "words": ["DOG"],
        "board": [["C","A","D"],["X","T","O"],["X","X","G"]],
        "placement_info": {
            "spangram": {"word": "CAT", "path": [[0,0],[0,1],[1,1]]},
            "words": [{"word": "DOG", "path": [[0,2],[1,2],[2,2]]}]
        }
    }"#;

    #[test]
    fn test_accepts_spangram_aliases() {
        let payload = PuzzlePayload::from_json(GENERATOR_JSON).expect("valid payload");
        assert_eq!(payload.special_word(), "CAT");
        assert_eq!(payload.placement_info().special_word().word(), "CAT");
        assert_eq!(payload.placement_info().len(), 2);
    }

    #[test]
    fn test_special_word_searched_first() {
        let payload = PuzzlePayload::from_json(GENERATOR_JSON).expect("valid payload");
        let kinds: Vec<_> = payload.placement_info().iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![PlacementKind::Special, PlacementKind::Ordinary]);
    }

    #[test]
    fn test_rejects_garbage() {
        let err = PuzzlePayload::from_json("{\"theme\": 3}").unwrap_err();
        assert!(matches!(err.kind, crate::PayloadErrorKind::Json(_)));
    }

    #[test]
    fn test_grid_lookup() {
        let grid = Grid::from_rows(&["CA", "XT"]);
        assert_eq!(grid.get(Position::new(1, 1)), Some("T"));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.display(), "C A\nX T");
    }
}
