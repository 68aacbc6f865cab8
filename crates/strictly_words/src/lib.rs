//! Strictly Words library - terminal front end for word-search puzzles
//!
//! Wraps a [`strictly_wordsearch::PuzzleSession`] in a line-based console
//! and loads settings from TOML.
//!
//! # Example
//!
//! ```no_run
//! use strictly_words::{Console, WordsConfig, load_puzzle};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = WordsConfig::load(None)?;
//! let payload = load_puzzle("puzzle.json", *config.strict())?;
//! let mut console = Console::new(payload, &config);
//! console.run(std::io::stdin().lock(), std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod commands;
mod config;
mod console;

pub use commands::{check_puzzle, payload_schema};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, WordsConfig};
pub use console::{Console, HELP, Input, announce, load_puzzle, render};
