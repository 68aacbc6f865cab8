//! First-class click outcomes and result events.
//!
//! Clicks never fail. Every click produces a [`ClickOutcome`] describing the
//! transition it caused, and commits carry the [`SelectionEvent`]s the UI
//! should announce.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Result event emitted when a selection is committed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum SelectionEvent {
    /// The selection spelled an unsolved target word on its own cells.
    #[display("Found {:?}", word)]
    Matched {
        /// Word text as written in the placement.
        word: String,
        /// True for the special word.
        is_special: bool,
    },

    /// The last missing word was just found.
    #[display("All words found")]
    AllFound,

    /// The committed selection matched nothing new.
    #[display("No match")]
    NoMatch,
}

/// Why a click did not start or extend a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The cell already belongs to a solved word.
    #[display("Cell {} is already part of a found word", _0)]
    SolvedCell(Position),

    /// The cell does not touch the head of the selection.
    #[display("Cell {} is not adjacent to {}", target, head)]
    NotAdjacent {
        /// Current last cell of the selection.
        head: Position,
        /// The clicked cell.
        target: Position,
    },

    /// The cell is not on the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(Position),
}

/// Transition caused by one click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored(Rejection),
    /// A new selection began at the clicked cell.
    Started,
    /// The clicked cell was appended to the selection.
    Extended,
    /// The selection was discarded without matching.
    Aborted(Rejection),
    /// The head was clicked again and the selection was matched.
    Committed(Vec<SelectionEvent>),
}

impl ClickOutcome {
    /// Events produced by this click (empty unless committed).
    pub fn events(&self) -> &[SelectionEvent] {
        match self {
            ClickOutcome::Committed(events) => events,
            _ => &[],
        }
    }

    /// Returns true if the click committed a selection.
    pub fn is_commit(&self) -> bool {
        matches!(self, ClickOutcome::Committed(_))
    }
}

impl std::fmt::Display for ClickOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClickOutcome::Ignored(reason) => write!(f, "Ignored: {}", reason),
            ClickOutcome::Started => write!(f, "Selection started"),
            ClickOutcome::Extended => write!(f, "Selection extended"),
            ClickOutcome::Aborted(reason) => write!(f, "Selection cleared: {}", reason),
            ClickOutcome::Committed(events) => {
                let events = events
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Committed: {}", events)
            }
        }
    }
}
