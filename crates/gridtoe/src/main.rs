//! Gridtoe - console tic-tac-toe on an N×N board.

use anyhow::{Context, Result};
use clap::Parser;
use gridtoe::cli::{Cli, Command};
use gridtoe::{ConsolePlayer, GameConfig, init_tracing, score_position, setup_match};
use gridtoe_core::{Grid, Marker};
use std::io;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = GameConfig::load_or_default(&cli.config)?.merge(cli.command.overrides())?;
    init_tracing(config.log_file().as_deref())?;

    match cli.command {
        Command::Play { .. } => run_play(&config),
        Command::Score {
            board,
            marker,
            json,
        } => run_score(&board, marker, json),
    }
}

/// Play one console match against the opponent.
#[instrument]
fn run_play(config: &GameConfig) -> Result<()> {
    info!("Starting gridtoe");
    println!(
        "You play {} on a {}x{} board. Enter q to quit.",
        config.human_marker(),
        config.board_size(),
        config.board_size()
    );

    let human = ConsolePlayer::new("Human", io::stdin().lock(), io::stdout());
    let mut game = setup_match(config, Box::new(human), io::stdout())?;
    let report = game.run()?;

    info!(status = %report.status, abandoned = report.abandoned, "Game over");
    Ok(())
}

/// Print the opponent's view of a position.
#[instrument(skip(board))]
fn run_score(board: &Grid, marker: Marker, json: bool) -> Result<()> {
    let report = score_position(board, marker);
    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize scores")?;
        println!("{text}");
    } else {
        print!("{board}");
        print!("{report}");
    }
    Ok(())
}
