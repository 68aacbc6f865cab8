//! Solved words and the cells they cover.

use crate::Position;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Progress for the current puzzle.
///
/// Words are keyed by their placement text. Cells are the union of every
/// solved selection; overlap between words is tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FoundState {
    words: BTreeSet<String>,
    cells: BTreeSet<Position>,
}

impl FoundState {
    /// Creates empty progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `word` as solved on `path`.
    ///
    /// Returns false and changes nothing if the word was already solved.
    #[instrument(skip(self, path), fields(cells = path.len()))]
    pub fn record(&mut self, word: &str, path: &[Position]) -> bool {
        if self.words.contains(word) {
            debug!(word, "Word already solved");
            return false;
        }
        self.words.insert(word.to_string());
        self.cells.extend(path.iter().copied());
        true
    }

    /// Returns true if `word` has been solved.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns true if `pos` belongs to a solved word.
    pub fn contains_cell(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Number of solved words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Solved words in sorted order.
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    /// Solved cells in row-major order.
    pub fn cells(&self) -> &BTreeSet<Position> {
        &self.cells
    }

    /// Forgets all progress.
    pub fn clear(&mut self) {
        self.words.clear();
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_idempotent() {
        let mut found = FoundState::new();
        let path = [Position::new(0, 0), Position::new(0, 1)];
        assert!(found.record("AB", &path));
        assert!(!found.record("AB", &[Position::new(5, 5)]));
        assert_eq!(found.word_count(), 1);
        assert!(!found.contains_cell(Position::new(5, 5)));
    }

    #[test]
    fn test_cells_union_across_words() {
        let mut found = FoundState::new();
        found.record("AB", &[Position::new(0, 0), Position::new(0, 1)]);
        found.record("BC", &[Position::new(0, 1), Position::new(0, 2)]);
        assert_eq!(found.cells().len(), 3);
        assert!(found.contains_word("BC"));
    }

    #[test]
    fn test_clear() {
        let mut found = FoundState::new();
        found.record("AB", &[Position::new(0, 0)]);
        found.clear();
        assert_eq!(found, FoundState::new());
    }
}
