//! Puzzle payload error types.

use crate::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// What was wrong with a puzzle payload.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PayloadErrorKind {
    /// The payload was not valid JSON for the puzzle contract.
    #[display("Malformed payload JSON: {}", _0)]
    Json(String),

    /// The board has no rows or no columns.
    #[display("Board is empty")]
    EmptyBoard,

    /// A board row differs in length from the first row.
    #[display("Board row {} has {} cells, expected {}", row, found, expected)]
    RaggedBoard {
        /// Offending row index.
        row: usize,
        /// Cells in that row.
        found: usize,
        /// Cells in row 0.
        expected: usize,
    },

    /// The top-level special word disagrees with its placement.
    #[display("Special word {:?} does not match its placement {:?}", listed, placed)]
    SpecialWordMismatch {
        /// Text from the word list.
        listed: String,
        /// Text from the placement table.
        placed: String,
    },

    /// A listed word has no placement.
    #[display("Word {:?} has no placement", _0)]
    MissingPlacement(String),

    /// A placement path length differs from its word length.
    #[display("Placement for {:?} has {} cells, expected {}", word, path_len, word_len)]
    PathLength {
        /// Placement word.
        word: String,
        /// Cells in the path.
        path_len: usize,
        /// Letters in the word.
        word_len: usize,
    },

    /// A placement path leaves the board.
    #[display("Placement for {:?} leaves the board at {}", word, position)]
    OutOfBounds {
        /// Placement word.
        word: String,
        /// First position outside the board.
        position: Position,
    },

    /// Two consecutive placement cells do not touch.
    #[display("Placement for {:?} jumps from {} to {}", word, from, to)]
    Disconnected {
        /// Placement word.
        word: String,
        /// Cell before the gap.
        from: Position,
        /// Cell after the gap.
        to: Position,
    },

    /// The board letters along a path spell something else.
    #[display("Placement for {:?} spells {:?} on the board", word, spelled)]
    Misspelled {
        /// Placement word.
        word: String,
        /// Letters found along the path.
        spelled: String,
    },
}

/// Puzzle payload error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Payload error: {} at {}:{}", kind, file, line)]
pub struct PayloadError {
    /// What went wrong.
    pub kind: PayloadErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PayloadError {
    /// Creates a new payload error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: PayloadErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for PayloadError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(PayloadErrorKind::Json(err.to_string()))
    }
}
