//! Puzzle session: the single owner of payload, selection and progress.

use crate::contracts::{ClickContract, Contract};
use crate::rules::{candidate_word, find_placement, is_complete};
use crate::{
    ClickOutcome, FoundState, PlacementKind, Position, PuzzlePayload, Rejection, Selection,
    SelectionEvent,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Solved words out of total target words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("Words Found: {}/{}", found, total)]
pub struct Progress {
    /// Words solved so far.
    pub found: usize,
    /// Ordinary words plus the special word.
    pub total: usize,
}

/// One entry of the displayed word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStatus {
    /// Word text.
    pub word: String,
    /// True for the special word.
    pub is_special: bool,
    /// True once solved.
    pub found: bool,
}

/// How a cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum CellStatus {
    /// Part of a solved word; not clickable.
    Found,
    /// Part of the in-progress selection.
    Selected,
    /// Available.
    Open,
}

/// A single-player word-search game.
///
/// Owns the puzzle payload and all mutable progress. Every mutation goes
/// through `&mut self`, one click at a time; callers re-render from the
/// returned [`ClickOutcome`] and the query methods.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    payload: PuzzlePayload,
    pub(crate) selection: Selection,
    pub(crate) found: FoundState,
}

impl PuzzleSession {
    /// Starts a session on `payload` with no progress.
    #[instrument(skip(payload), fields(theme = %payload.theme()))]
    pub fn new(payload: PuzzlePayload) -> Self {
        info!("Creating puzzle session");
        Self {
            payload,
            selection: Selection::Idle,
            found: FoundState::new(),
        }
    }

    /// Replaces the puzzle wholesale, dropping any selection and progress.
    #[instrument(skip(self, payload), fields(theme = %payload.theme()))]
    pub fn install_puzzle(&mut self, payload: PuzzlePayload) {
        info!(
            previous_theme = %self.payload.theme(),
            solved = self.found.word_count(),
            "Installing new puzzle"
        );
        self.payload = payload;
        self.selection.clear();
        self.found.clear();
    }

    /// Marks `word` solved and its path cells as taken.
    ///
    /// Idempotent: returns false and changes nothing if `word` was already
    /// solved.
    #[instrument(skip(self, path))]
    pub fn record_solved(&mut self, word: &str, path: &[Position]) -> bool {
        self.found.record(word, path)
    }

    /// Returns true if `pos` belongs to a solved word.
    pub fn is_solved_cell(&self, pos: Position) -> bool {
        self.found.contains_cell(pos)
    }

    /// Returns true once every placement has been solved.
    pub fn is_complete(&self) -> bool {
        is_complete(self.found.word_count(), self.payload.placement_info().len())
    }

    /// Handles one cell click.
    ///
    /// - Idle: an open cell starts a selection; a solved cell is ignored.
    /// - Selecting: the head cell commits; an open neighbour of the head
    ///   extends; anything else clears the selection without matching.
    ///
    /// Off-board clicks are ignored, except that one not touching the head
    /// aborts a selection like any other non-adjacent click.
    #[instrument(skip(self), fields(theme = %self.payload.theme()))]
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        #[cfg(debug_assertions)]
        let before = self.clone();

        let outcome = self.apply_click(pos);
        debug!(%outcome, selected = self.selection.path().len(), "Click handled");

        // `record_solved` accepts progress no placement backs; log only.
        #[cfg(debug_assertions)]
        if let Err(violations) = ClickContract::post(&before, self) {
            warn!(?violations, "Click postcondition failed");
        }

        outcome
    }

    fn apply_click(&mut self, pos: Position) -> ClickOutcome {
        if self.selection.head() == Some(pos) {
            return ClickOutcome::Committed(self.commit());
        }

        match ClickContract::pre(self, &pos) {
            Ok(()) => {
                let started = self.selection.is_idle();
                self.selection.extend(pos);
                if started {
                    ClickOutcome::Started
                } else {
                    ClickOutcome::Extended
                }
            }
            Err(rejection @ Rejection::OutOfBounds(_)) => match self.selection.head() {
                Some(head) if !head.is_adjacent(pos) => {
                    debug!(%rejection, "Aborting selection");
                    self.selection.clear();
                    ClickOutcome::Aborted(Rejection::NotAdjacent { head, target: pos })
                }
                _ => {
                    warn!(%rejection, "Click outside the board");
                    ClickOutcome::Ignored(rejection)
                }
            },
            Err(rejection) if self.selection.is_idle() => ClickOutcome::Ignored(rejection),
            Err(rejection) => {
                debug!(%rejection, "Aborting selection");
                self.selection.clear();
                ClickOutcome::Aborted(rejection)
            }
        }
    }

    /// Matches the current selection and returns to idle, win or lose.
    #[instrument(skip(self), fields(cells = self.selection.path().len()))]
    fn commit(&mut self) -> Vec<SelectionEvent> {
        let path = self.selection.take();
        let mut events = Vec::new();

        let matched = find_placement(
            self.payload.board(),
            self.payload.placement_info(),
            &path,
        )
        .filter(|m| !self.found.contains_word(m.placement.word()))
        .map(|m| (m.placement.word().clone(), m.kind));

        match matched {
            Some((word, kind)) => {
                self.record_solved(&word, &path);
                info!(%word, %kind, "Word found");
                events.push(SelectionEvent::Matched {
                    word,
                    is_special: kind == PlacementKind::Special,
                });

                if self.is_complete() {
                    info!("All words found");
                    events.push(SelectionEvent::AllFound);
                }
            }
            None if !path.is_empty() => {
                debug!("Selection matched nothing new");
                events.push(SelectionEvent::NoMatch);
            }
            None => {}
        }

        events
    }

    /// The installed puzzle.
    pub fn payload(&self) -> &PuzzlePayload {
        &self.payload
    }

    /// The in-progress selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Solved words and cells.
    pub fn found(&self) -> &FoundState {
        &self.found
    }

    /// Letters under the current selection.
    pub fn selected_word(&self) -> String {
        candidate_word(self.payload.board(), self.selection.path()).unwrap_or_default()
    }

    /// Solved count against total placements.
    pub fn progress(&self) -> Progress {
        Progress {
            found: self.found.word_count(),
            total: self.payload.placement_info().len(),
        }
    }

    /// Ordinary words in payload order, then the special word.
    ///
    /// Found flags follow the placement text, which is what solving records.
    pub fn word_list(&self) -> Vec<WordStatus> {
        let info = self.payload.placement_info();
        let ordinary = self.payload.words().iter().map(|word| {
            let found = info
                .words()
                .iter()
                .filter(|placement| placement.word().eq_ignore_ascii_case(word))
                .any(|placement| self.found.contains_word(placement.word()));
            (word, false, found || self.found.contains_word(word))
        });
        let special = self.payload.special_word();
        let special_found = self.found.contains_word(info.special_word().word());

        ordinary
            .chain(std::iter::once((special, true, special_found)))
            .map(|(word, is_special, found)| WordStatus {
                word: word.clone(),
                is_special,
                found,
            })
            .collect()
    }

    /// Rendering status of `pos`; solved cells win over selected ones.
    pub fn cell_status(&self, pos: Position) -> CellStatus {
        if self.found.contains_cell(pos) {
            CellStatus::Found
        } else if self.selection.contains(pos) {
            CellStatus::Selected
        } else {
            CellStatus::Open
        }
    }
}
