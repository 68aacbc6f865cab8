//! Puzzle completion rule.

use tracing::instrument;

/// A puzzle is complete once every placement (ordinary words plus the
/// special word) has been solved.
#[instrument]
pub fn is_complete(solved: usize, total_placements: usize) -> bool {
    solved == total_placements
}
