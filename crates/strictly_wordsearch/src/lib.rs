//! Strictly Wordsearch - path selection and word matching for word-search puzzles
//!
//! A puzzle arrives as a finished [`PuzzlePayload`] (grid, word list, special
//! word and the ground-truth path of every word). A [`PuzzleSession`] owns it
//! and turns cell clicks into selection transitions and match results.
//!
//! # Example
//!
//! ```
//! use strictly_wordsearch::{
//!     ClickOutcome, Grid, PlacementInfo, Position, PuzzlePayload, PuzzleSession,
//!     SelectionEvent, WordPlacement,
//! };
//!
//! let cat = WordPlacement::new(
//!     "CAT".to_string(),
//!     vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)],
//! );
//! let payload = PuzzlePayload::new(
//!     "Pets".to_string(),
//!     "CAT".to_string(),
//!     Vec::new(),
//!     Grid::from_rows(&["CA", "XT"]),
//!     PlacementInfo::new(cat, Vec::new()),
//! );
//!
//! let mut session = PuzzleSession::new(payload);
//! session.click(Position::new(0, 0));
//! session.click(Position::new(0, 1));
//! session.click(Position::new(1, 1));
//! let outcome = session.click(Position::new(1, 1));
//!
//! assert_eq!(
//!     outcome.events(),
//!     &[
//!         SelectionEvent::Matched { word: "CAT".to_string(), is_special: true },
//!         SelectionEvent::AllFound,
//!     ]
//! );
//! assert!(session.is_complete());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod found;
mod position;
mod selection;
mod session;
mod types;
mod validate;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{ClickOutcome, Rejection, SelectionEvent};
pub use error::{PayloadError, PayloadErrorKind};
pub use found::FoundState;
pub use position::{Direction, Position};
pub use selection::Selection;
pub use session::{CellStatus, Progress, PuzzleSession, WordStatus};
pub use types::{Grid, PlacementInfo, PlacementKind, PuzzlePayload, WordPlacement};
