//! Solved cells invariant: found cells are exactly the cells of found words.

use super::Invariant;
use crate::PuzzleSession;
use std::collections::BTreeSet;

/// Invariant: every solved cell lies on a solved word's placement, and
/// every solved word has a placement fully covered by solved cells.
pub struct SolvedCellsCoveredInvariant;

impl Invariant<PuzzleSession> for SolvedCellsCoveredInvariant {
    fn holds(session: &PuzzleSession) -> bool {
        let found = session.found();
        let placements = session.payload().placement_info();

        let covered: BTreeSet<_> = placements
            .iter()
            .filter(|(_, placement)| found.contains_word(placement.word()))
            .flat_map(|(_, placement)| placement.path().iter().copied())
            .collect();

        if !found.cells().is_subset(&covered) {
            return false;
        }

        found.words().iter().all(|word| {
            placements.iter().any(|(_, placement)| {
                placement.word() == word
                    && placement.path().iter().all(|pos| found.contains_cell(*pos))
            })
        })
    }

    fn description() -> &'static str {
        "Solved cells match the placements of solved words"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cat_dog_session, p};

    #[test]
    fn test_holds_after_solving() {
        let mut session = cat_dog_session();
        for pos in [p(0, 0), p(0, 1), p(1, 1), p(1, 1)] {
            session.click(pos);
        }
        assert_eq!(session.found().word_count(), 1);
        assert!(SolvedCellsCoveredInvariant::holds(&session));
    }

    #[test]
    fn test_stray_cell_violates() {
        let mut session = cat_dog_session();
        session.record_solved("CAT", &[p(0, 0), p(0, 1), p(1, 1), p(2, 0)]);
        assert!(!SolvedCellsCoveredInvariant::holds(&session));
    }

    #[test]
    fn test_partial_cover_violates() {
        let mut session = cat_dog_session();
        session.record_solved("CAT", &[p(0, 0), p(0, 1)]);
        assert!(!SolvedCellsCoveredInvariant::holds(&session));
    }
}
