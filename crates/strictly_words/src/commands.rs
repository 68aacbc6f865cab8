//! One-shot commands that inspect a payload without playing it.

use crate::load_puzzle;
use anyhow::{Context, Result};
use std::path::Path;
use strictly_wordsearch::PuzzlePayload;
use tracing::{info, instrument};

/// Validates the payload at `path` and returns a one-line summary.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn check_puzzle(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let payload = load_puzzle(path, false)?;
    payload
        .validate()
        .with_context(|| format!("{} failed validation", path.display()))?;

    info!("Puzzle passed validation");
    Ok(format!(
        "{}: OK ({} words + special word {:?}, {}x{} board)",
        path.display(),
        payload.words().len(),
        payload.special_word(),
        payload.board().height(),
        payload.board().width(),
    ))
}

/// JSON schema of [`PuzzlePayload`], pretty-printed.
pub fn payload_schema() -> Result<String> {
    let schema = schemars::schema_for!(PuzzlePayload);
    serde_json::to_string_pretty(&schema).context("Failed to serialize schema")
}
