//! Path adjacency rules.

use crate::Position;
use tracing::instrument;

/// Returns true if `next` may extend a selection whose head is `head`.
pub fn is_extension(head: Position, next: Position) -> bool {
    head.is_adjacent(next)
}

/// Returns true if every consecutive pair in `path` is 8-adjacent.
///
/// Empty and single-cell paths are trivially contiguous.
#[instrument]
pub fn is_contiguous(path: &[Position]) -> bool {
    path.windows(2).all(|pair| is_extension(pair[0], pair[1]))
}
