//! Contiguous selection invariant: each selected cell touches the previous one.

use super::Invariant;
use crate::rules::is_contiguous;
use crate::{PuzzleSession, Selection};

/// Invariant: the in-progress selection is a non-empty, 8-adjacent path
/// (or idle).
pub struct ContiguousSelectionInvariant;

impl Invariant<PuzzleSession> for ContiguousSelectionInvariant {
    fn holds(session: &PuzzleSession) -> bool {
        match session.selection() {
            Selection::Idle => true,
            Selection::Selecting(path) => !path.is_empty() && is_contiguous(path),
        }
    }

    fn description() -> &'static str {
        "Selection is a contiguous path of adjacent cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cat_dog_session, p};

    #[test]
    fn test_idle_holds() {
        let session = cat_dog_session();
        assert!(ContiguousSelectionInvariant::holds(&session));
    }

    #[test]
    fn test_extended_selection_holds() {
        let mut session = cat_dog_session();
        session.click(p(0, 0));
        session.click(p(1, 1));
        session.click(p(2, 1));
        assert!(ContiguousSelectionInvariant::holds(&session));
    }

    #[test]
    fn test_gap_violates() {
        let mut session = cat_dog_session();
        session.selection = Selection::Selecting(vec![p(0, 0), p(2, 2)]);
        assert!(!ContiguousSelectionInvariant::holds(&session));
    }

    #[test]
    fn test_empty_selecting_violates() {
        let mut session = cat_dog_session();
        session.selection = Selection::Selecting(Vec::new());
        assert!(!ContiguousSelectionInvariant::holds(&session));
    }
}
