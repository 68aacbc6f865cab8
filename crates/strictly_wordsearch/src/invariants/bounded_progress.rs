//! Bounded progress invariant: only real target words can be solved.

use super::Invariant;
use crate::PuzzleSession;

/// Invariant: every solved word names a placement, so the solved count
/// never exceeds the number of placements.
pub struct BoundedProgressInvariant;

impl Invariant<PuzzleSession> for BoundedProgressInvariant {
    fn holds(session: &PuzzleSession) -> bool {
        let placements = session.payload().placement_info();
        let found = session.found();

        found.word_count() <= placements.len()
            && found
                .words()
                .iter()
                .all(|word| placements.iter().any(|(_, p)| p.word() == word))
    }

    fn description() -> &'static str {
        "Solved words are a subset of the puzzle's placements"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cat_dog_session, p};

    #[test]
    fn test_fresh_session_holds() {
        assert!(BoundedProgressInvariant::holds(&cat_dog_session()));
    }

    #[test]
    fn test_unknown_word_violates() {
        let mut session = cat_dog_session();
        session.record_solved("BIRD", &[p(2, 0)]);
        assert!(!BoundedProgressInvariant::holds(&session));
    }
}
