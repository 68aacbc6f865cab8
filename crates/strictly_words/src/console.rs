//! Line-based terminal front end for a puzzle session.
//!
//! Reads one command per line, feeds clicks to the session and redraws the
//! board after every command.

use crate::WordsConfig;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use strictly_wordsearch::{
    CellStatus, ClickOutcome, Position, PuzzlePayload, PuzzleSession, Rejection, SelectionEvent,
};
use tracing::{debug, info, instrument, warn};

/// Help text shown on `help` and after unrecognized input.
pub const HELP: &str = "Commands: <row> <col> | new <file> | words | help | quit";

/// One parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Click the cell at row, column.
    Click(Position),
    /// Load and install another puzzle.
    New(PathBuf),
    /// Show or hide the word list.
    ToggleWords,
    /// Print the command summary.
    Help,
    /// Leave the game.
    Quit,
}

impl Input {
    /// Parses a command line. Returns `None` for blank or unknown input.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let first = parts.next()?;
        match first.to_lowercase().as_str() {
            "quit" | "exit" | "q" => Some(Input::Quit),
            "words" | "w" => Some(Input::ToggleWords),
            "help" | "h" | "?" => Some(Input::Help),
            "new" | "n" => parts.next().map(|path| Input::New(PathBuf::from(path))),
            _ => {
                let row = first.trim_end_matches(',').parse().ok()?;
                let col = parts.next()?.parse().ok()?;
                if parts.next().is_some() {
                    return None;
                }
                Some(Input::Click(Position::new(row, col)))
            }
        }
    }
}

/// Reads a payload from disk, validating it first when `strict` is set.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_puzzle(path: impl AsRef<Path>, strict: bool) -> Result<PuzzlePayload> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read puzzle {}", path.display()))?;
    let payload = PuzzlePayload::from_json(&json)
        .with_context(|| format!("Failed to parse puzzle {}", path.display()))?;
    if strict {
        payload
            .validate()
            .with_context(|| format!("Puzzle {} is inconsistent", path.display()))?;
    }
    info!(theme = %payload.theme(), "Puzzle loaded");
    Ok(payload)
}

/// Draws the board, selection, progress and (optionally) the word list.
///
/// Open cells are padded, selected cells bracketed, found cells starred.
pub fn render(session: &PuzzleSession, show_word_list: bool) -> String {
    let payload = session.payload();
    let board = payload.board();
    let mut out = format!("Theme: {}\n", payload.theme());

    out.push_str("    ");
    for col in 0..board.width() {
        out.push_str(&format!("{:^3}", col));
    }
    out.push('\n');

    for (row, cells) in board.rows().iter().enumerate() {
        out.push_str(&format!("{:>3} ", row));
        for (col, letter) in cells.iter().enumerate() {
            let cell = match session.cell_status(Position::new(row, col)) {
                CellStatus::Open => format!(" {} ", letter),
                CellStatus::Selected => format!("[{}]", letter),
                CellStatus::Found => format!("*{}*", letter),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    if !session.selection().is_idle() {
        out.push_str(&format!("Selected: {}\n", session.selected_word()));
    }

    out.push_str(&session.progress().to_string());
    out.push('\n');

    if show_word_list {
        for entry in session.word_list() {
            let mark = if entry.found { "x" } else { " " };
            let special = if entry.is_special { " (special word)" } else { "" };
            out.push_str(&format!("  [{}] {}{}\n", mark, entry.word, special));
        }
    }

    out
}

/// Player-facing messages for a click.
///
/// Only commits announce anything; a silently cleared selection is its own
/// feedback. Off-board clicks get a hint since they are typing mistakes.
pub fn announce(outcome: &ClickOutcome) -> Vec<String> {
    if let ClickOutcome::Ignored(rejection @ Rejection::OutOfBounds(_)) = outcome {
        return vec![rejection.to_string()];
    }

    outcome
        .events()
        .iter()
        .map(|event| match event {
            SelectionEvent::Matched {
                is_special: true, ..
            } => "Word Found! Congratulations! You found the special word!".to_string(),
            SelectionEvent::Matched { word, .. } => format!("Word Found! You found \"{}\"!", word),
            SelectionEvent::AllFound => "Congratulations! You found all the words!".to_string(),
            SelectionEvent::NoMatch => "Try again!".to_string(),
        })
        .collect()
}

/// Interactive game loop around a [`PuzzleSession`].
#[derive(Debug)]
pub struct Console {
    session: PuzzleSession,
    show_word_list: bool,
    strict: bool,
}

impl Console {
    /// Creates a console playing `payload`.
    #[instrument(skip(payload, config))]
    pub fn new(payload: PuzzlePayload, config: &WordsConfig) -> Self {
        Self {
            session: PuzzleSession::new(payload),
            show_word_list: *config.show_word_list(),
            strict: *config.strict(),
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        write!(output, "{}", render(&self.session, self.show_word_list))?;
        writeln!(output, "{}", HELP)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }

            let Some(command) = Input::parse(&line) else {
                debug!(%line, "Unrecognized input");
                writeln!(output, "Unrecognized command: {}", line.trim())?;
                writeln!(output, "{}", HELP)?;
                continue;
            };

            match command {
                Input::Quit => break,
                Input::Help => {
                    writeln!(output, "{}", HELP)?;
                    continue;
                }
                Input::ToggleWords => self.show_word_list = !self.show_word_list,
                Input::New(path) => match load_puzzle(&path, self.strict) {
                    Ok(payload) => self.session.install_puzzle(payload),
                    Err(e) => {
                        warn!(error = %e, "Could not load new puzzle");
                        writeln!(output, "Error: {:#}", e)?;
                        continue;
                    }
                },
                Input::Click(pos) => {
                    let outcome = self.session.click(pos);
                    for message in announce(&outcome) {
                        writeln!(output, "{}", message)?;
                    }
                }
            }

            write!(output, "{}", render(&self.session, self.show_word_list))?;
        }

        info!(
            progress = %self.session.progress(),
            complete = self.session.is_complete(),
            "Leaving game"
        );
        Ok(())
    }
}
