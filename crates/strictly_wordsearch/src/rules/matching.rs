//! Commit-time matching of a selection against word placements.

use crate::{Grid, PlacementInfo, PlacementKind, Position, WordPlacement};
use tracing::{debug, instrument};

/// Renders the letters under `path`, in path order.
///
/// Returns `None` if any cell lies off the board.
pub fn candidate_word(grid: &Grid, path: &[Position]) -> Option<String> {
    path.iter().map(|&pos| grid.get(pos)).collect()
}

/// Canonical key for a path: `"r,c"` per cell joined with `|`.
pub fn path_key(path: &[Position]) -> String {
    path.iter()
        .map(|pos| pos.key())
        .collect::<Vec<_>>()
        .join("|")
}

/// Canonical key for `path` traced end to start.
pub fn reversed_path_key(path: &[Position]) -> String {
    path.iter()
        .rev()
        .map(|pos| pos.key())
        .collect::<Vec<_>>()
        .join("|")
}

/// A placement matched by a committed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementMatch<'a> {
    /// Whether the special word or an ordinary word matched.
    pub kind: PlacementKind,
    /// The matched placement.
    pub placement: &'a WordPlacement,
}

/// Finds the placement spelled by `path`, traced in either direction.
///
/// A placement matches when its path key equals the selection's forward or
/// reverse key and its word equals the letters read in selection order or
/// read back to front. Word comparison ignores case. When several
/// placements qualify the first in search order wins (see
/// [`PlacementInfo::iter`]).
#[instrument(skip(grid, placements))]
pub fn find_placement<'a>(
    grid: &Grid,
    placements: &'a PlacementInfo,
    path: &[Position],
) -> Option<PlacementMatch<'a>> {
    let candidate = candidate_word(grid, path)?.to_lowercase();
    let reversed: Vec<Position> = path.iter().rev().copied().collect();
    let reversed_candidate = candidate_word(grid, &reversed)?.to_lowercase();
    let forward = path_key(path);
    let reverse = reversed_path_key(path);
    debug!(%candidate, %forward, "Matching selection");

    placements
        .iter()
        .find(|(_, placement)| {
            let word = placement.word().to_lowercase();
            if word != candidate && word != reversed_candidate {
                return false;
            }
            let key = path_key(placement.path());
            key == forward || key == reverse
        })
        .map(|(kind, placement)| PlacementMatch { kind, placement })
}
