//! In-progress selection state.
//!
//! A selection is either idle or a non-empty path of cells. The path is
//! only built through [`Selection::start`] and [`Selection::extend`], so
//! `Selecting` never holds an empty vector.

use crate::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Phase of the player's current selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    /// No cells selected.
    #[default]
    Idle,
    /// Cells chosen so far, first click first.
    Selecting(Vec<Position>),
}

impl Selection {
    /// Begins a selection at `pos`.
    #[instrument]
    pub fn start(pos: Position) -> Self {
        Selection::Selecting(vec![pos])
    }

    /// Appends `pos` to the path. Starts a new path if idle.
    #[instrument(skip(self))]
    pub fn extend(&mut self, pos: Position) {
        match self {
            Selection::Idle => *self = Selection::start(pos),
            Selection::Selecting(path) => path.push(pos),
        }
    }

    /// Returns the selected path and resets to idle.
    pub fn take(&mut self) -> Vec<Position> {
        match std::mem::take(self) {
            Selection::Idle => Vec::new(),
            Selection::Selecting(path) => path,
        }
    }

    /// Drops the selection.
    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }

    /// Selected cells in click order (empty when idle).
    pub fn path(&self) -> &[Position] {
        match self {
            Selection::Idle => &[],
            Selection::Selecting(path) => path,
        }
    }

    /// Most recently added cell.
    pub fn head(&self) -> Option<Position> {
        self.path().last().copied()
    }

    /// Returns true when nothing is selected.
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// Returns true if `pos` is anywhere in the path.
    pub fn contains(&self, pos: Position) -> bool {
        self.path().contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let selection = Selection::default();
        assert!(selection.is_idle());
        assert_eq!(selection.head(), None);
        assert!(selection.path().is_empty());
    }

    #[test]
    fn test_extend_tracks_head() {
        let mut selection = Selection::start(Position::new(0, 0));
        selection.extend(Position::new(0, 1));
        assert_eq!(selection.head(), Some(Position::new(0, 1)));
        assert_eq!(selection.path().len(), 2);
    }

    #[test]
    fn test_take_resets() {
        let mut selection = Selection::start(Position::new(2, 2));
        let path = selection.take();
        assert_eq!(path, vec![Position::new(2, 2)]);
        assert!(selection.is_idle());
        assert!(selection.take().is_empty());
    }
}
