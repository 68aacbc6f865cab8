//! Strictly Words - Unified CLI
//!
//! Plays, checks and describes word-search puzzle payloads.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_words::{Console, WordsConfig, check_puzzle, load_puzzle, payload_schema};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The config picks the log filter, so it loads before the subscriber
    // exists; its outcome is logged once tracing is up.
    let config = WordsConfig::load(cli.config.as_deref())?;

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        path = ?cli.config,
        log_filter = %config.log_filter(),
        show_word_list = *config.show_word_list(),
        strict = *config.strict(),
        "Config loaded"
    );

    match cli.command {
        Command::Play { puzzle, strict } => run_play(&puzzle, config.with_strict(strict)),
        Command::Check { puzzle } => run_check(&puzzle),
        Command::Schema => run_schema(),
    }
}

/// Play a puzzle on stdin/stdout
#[instrument(skip(config))]
fn run_play(puzzle: &Path, config: WordsConfig) -> Result<()> {
    let payload = load_puzzle(puzzle, *config.strict())?;
    info!(theme = %payload.theme(), "Starting game");

    let mut console = Console::new(payload, &config);
    console.run(std::io::stdin().lock(), std::io::stdout().lock())
}

/// Validate a puzzle payload and report
#[instrument]
fn run_check(puzzle: &Path) -> Result<()> {
    println!("{}", check_puzzle(puzzle)?);
    Ok(())
}

/// Print the payload JSON schema
#[instrument]
fn run_schema() -> Result<()> {
    println!("{}", payload_schema()?);
    Ok(())
}
