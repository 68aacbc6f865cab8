//! Contract-based validation for cell clicks.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} click {Q}
//!
//! A failed precondition is not an error for the caller. The session turns
//! it into an ignored or aborted click.

use crate::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use crate::rules::is_extension;
use crate::{Position, PuzzleSession, Rejection};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Click Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the clicked cell is on the board.
pub struct OnBoard;

impl OnBoard {
    /// Rejects positions outside the grid.
    #[instrument(skip(session))]
    pub fn check(pos: Position, session: &PuzzleSession) -> Result<(), Rejection> {
        if session.payload().board().contains(pos) {
            Ok(())
        } else {
            Err(Rejection::OutOfBounds(pos))
        }
    }
}

/// Precondition: the clicked cell is not part of a found word.
pub struct CellIsOpen;

impl CellIsOpen {
    /// Rejects solved cells.
    #[instrument(skip(session))]
    pub fn check(pos: Position, session: &PuzzleSession) -> Result<(), Rejection> {
        if session.is_solved_cell(pos) {
            Err(Rejection::SolvedCell(pos))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the clicked cell touches the selection head (if any).
pub struct TouchesHead;

impl TouchesHead {
    /// Rejects cells that are not 8-adjacent to the current head.
    #[instrument(skip(session))]
    pub fn check(pos: Position, session: &PuzzleSession) -> Result<(), Rejection> {
        match session.selection().head() {
            Some(head) if !is_extension(head, pos) => {
                Err(Rejection::NotAdjacent { head, target: pos })
            }
            _ => Ok(()),
        }
    }
}

/// Composite precondition: a click may start or extend the selection.
pub struct LegalExtension;

impl LegalExtension {
    /// Validates all preconditions for growing the selection.
    #[instrument(skip(session))]
    pub fn check(pos: Position, session: &PuzzleSession) -> Result<(), Rejection> {
        OnBoard::check(pos, session)?;
        CellIsOpen::check(pos, session)?;
        TouchesHead::check(pos, session)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Click Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for clicks that grow the selection.
///
/// Preconditions:
/// - Cell is on the board
/// - Cell is not solved
/// - Cell touches the selection head
///
/// Postconditions:
/// - Selection stays contiguous
/// - Solved cells match solved placements
/// - Progress stays within the placement count
pub struct ClickContract;

impl Contract<PuzzleSession, Position> for ClickContract {
    fn pre(session: &PuzzleSession, pos: &Position) -> Result<(), Rejection> {
        LegalExtension::check(*pos, session)
    }

    fn post(before: &PuzzleSession, after: &PuzzleSession) -> Result<(), Vec<InvariantViolation>> {
        if after.found().word_count() < before.found().word_count() {
            warn!("Solved word count decreased during a click");
            return Err(vec![InvariantViolation::new(
                "Solved words are never forgotten mid-puzzle",
            )]);
        }
        SessionInvariants::check_all(after)
    }
}
