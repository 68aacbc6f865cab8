//! Opt-in consistency checks for puzzle payloads.
//!
//! The session never calls these; play trusts the payload. Front ends that
//! load puzzles from disk can run them first to fail fast.

use crate::rules::matching::candidate_word;
use crate::{PayloadError, PayloadErrorKind, PuzzlePayload, WordPlacement};
use tracing::{info, instrument, warn};

impl PuzzlePayload {
    /// Checks the payload's internal consistency.
    ///
    /// Returns the first problem found.
    #[instrument(skip(self), fields(theme = %self.theme()))]
    pub fn validate(&self) -> Result<(), PayloadError> {
        let board = self.board();
        if board.height() == 0 || board.width() == 0 {
            return Err(PayloadError::new(PayloadErrorKind::EmptyBoard));
        }

        let expected = board.width();
        if let Some((row, cells)) = board
            .rows()
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(PayloadError::new(PayloadErrorKind::RaggedBoard {
                row,
                found: cells.len(),
                expected,
            }));
        }

        let special = self.placement_info().special_word();
        if special.word() != self.special_word() {
            return Err(PayloadError::new(PayloadErrorKind::SpecialWordMismatch {
                listed: self.special_word().clone(),
                placed: special.word().clone(),
            }));
        }

        for word in self.words() {
            let placed = self
                .placement_info()
                .words()
                .iter()
                .any(|p| p.word() == word);
            if !placed {
                warn!(%word, "Listed word has no placement");
                return Err(PayloadError::new(PayloadErrorKind::MissingPlacement(
                    word.clone(),
                )));
            }
        }

        for (_, placement) in self.placement_info().iter() {
            self.validate_placement(placement)?;
        }

        info!(placements = self.placement_info().len(), "Payload is consistent");
        Ok(())
    }

    fn validate_placement(&self, placement: &WordPlacement) -> Result<(), PayloadError> {
        let word = placement.word();
        let path = placement.path();

        let word_len = word.chars().count();
        if path.len() != word_len {
            return Err(PayloadError::new(PayloadErrorKind::PathLength {
                word: word.clone(),
                path_len: path.len(),
                word_len,
            }));
        }

        if let Some(&position) = path.iter().find(|pos| !self.board().contains(**pos)) {
            return Err(PayloadError::new(PayloadErrorKind::OutOfBounds {
                word: word.clone(),
                position,
            }));
        }

        if let Some(pair) = path.windows(2).find(|pair| !pair[0].is_adjacent(pair[1])) {
            return Err(PayloadError::new(PayloadErrorKind::Disconnected {
                word: word.clone(),
                from: pair[0],
                to: pair[1],
            }));
        }

        // Every cell is in bounds by now, so the candidate always renders.
        let spelled = candidate_word(self.board(), path).unwrap_or_default();
        if spelled.to_lowercase() != word.to_lowercase() {
            return Err(PayloadError::new(PayloadErrorKind::Misspelled {
                word: word.clone(),
                spelled,
            }));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Grid, PayloadErrorKind, PlacementInfo, Position, PuzzlePayload, WordPlacement};

    fn payload(board: &[&str], special: WordPlacement, words: Vec<WordPlacement>) -> PuzzlePayload {
        PuzzlePayload::new(
            "Test".to_string(),
            special.word().clone(),
            words.iter().map(|w| w.word().clone()).collect(),
            Grid::from_rows(board),
            PlacementInfo::new(special, words),
        )
    }

    fn placement(word: &str, path: &[(usize, usize)]) -> WordPlacement {
        WordPlacement::new(word.to_string(), path.iter().map(|&p| Position::from(p)).collect())
    }

    #[test]
    fn test_consistent_payload_passes() {
        let p = payload(
            &["CAD", "XTO", "XXG"],
            placement("CAT", &[(0, 0), (0, 1), (1, 1)]),
            vec![placement("dog", &[(0, 2), (1, 2), (2, 2)])],
        );
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_empty_board_rejected() {
        let p = payload(&[], placement("A", &[(0, 0)]), vec![]);
        assert_eq!(p.validate().unwrap_err().kind, PayloadErrorKind::EmptyBoard);
    }

    #[test]
    fn test_ragged_board_rejected() {
        let p = payload(&["CA", "X"], placement("C", &[(0, 0)]), vec![]);
        assert!(matches!(
            p.validate().unwrap_err().kind,
            PayloadErrorKind::RaggedBoard { row: 1, found: 1, expected: 2 }
        ));
    }

    #[test]
    fn test_gap_in_path_rejected() {
        let p = payload(&["CXA", "XXT"], placement("CAT", &[(0, 0), (0, 2), (1, 2)]), vec![]);
        assert!(matches!(
            p.validate().unwrap_err().kind,
            PayloadErrorKind::Disconnected { .. }
        ));
    }

    #[test]
    fn test_wrong_letters_rejected() {
        let p = payload(&["CA", "XT"], placement("CAT", &[(0, 0), (0, 1), (1, 0)]), vec![]);
        assert!(matches!(
            p.validate().unwrap_err().kind,
            PayloadErrorKind::Misspelled { .. }
        ));
    }

    #[test]
    fn test_path_off_board_rejected() {
        let p = payload(&["CA", "XT"], placement("CAT", &[(0, 0), (0, 1), (1, 2)]), vec![]);
        assert!(matches!(
            p.validate().unwrap_err().kind,
            PayloadErrorKind::OutOfBounds { .. }
        ));
    }

    #[test]
    fn test_short_path_rejected() {
        let p = payload(&["CA", "XT"], placement("CAT", &[(0, 0), (0, 1)]), vec![]);
        assert!(matches!(
            p.validate().unwrap_err().kind,
            PayloadErrorKind::PathLength { path_len: 2, word_len: 3, .. }
        ));
    }
}
