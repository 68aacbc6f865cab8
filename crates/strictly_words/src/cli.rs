//! Command-line interface for strictly_words.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Words - word-search puzzles in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_words")]
#[command(about = "Play generated word-search puzzles in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a puzzle interactively
    Play {
        /// Puzzle payload (JSON) to load
        #[arg(short, long)]
        puzzle: PathBuf,

        /// Validate the puzzle before playing
        #[arg(long)]
        strict: bool,
    },

    /// Check a puzzle payload for consistency
    Check {
        /// Puzzle payload (JSON) to check
        #[arg(short, long)]
        puzzle: PathBuf,
    },

    /// Print the JSON schema of the puzzle payload
    Schema,
}
