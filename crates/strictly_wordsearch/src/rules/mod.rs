//! Word-search rules.
//!
//! Pure functions over grids, paths and placements. Kept apart from the
//! session so contracts and invariants can reuse them.

pub mod adjacency;
pub mod completion;
pub mod matching;

pub use adjacency::{is_contiguous, is_extension};
pub use completion::is_complete;
pub use matching::{PlacementMatch, candidate_word, find_placement, path_key, reversed_path_key};
