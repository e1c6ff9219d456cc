//! Command-line interface for gridtoe.

use crate::config::{FirstPlayer, Overrides};
use clap::{Parser, Subcommand};
use gridtoe_core::{Grid, Marker};
use std::path::PathBuf;

/// Gridtoe - N×N tic-tac-toe against a heuristic opponent
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "N×N tic-tac-toe against a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "gridtoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a console match against the opponent
    Play {
        /// Board dimension
        #[arg(short, long)]
        size: Option<usize>,

        /// Marker the opponent plays (x or o)
        #[arg(short, long)]
        opponent: Option<Marker>,

        /// Who moves first
        #[arg(short, long, value_enum)]
        first: Option<FirstPlayer>,

        /// Seed for the first-player coin flip
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the opponent's scores for a position
    Score {
        /// Position as rows separated by '/', with '.' for empty cells (e.g. "x.o/.../o.x")
        #[arg(short, long)]
        board: Grid,

        /// Marker to score for
        #[arg(short, long, default_value = "o")]
        marker: Marker,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Config overrides carried by this command.
    pub fn overrides(&self) -> Overrides {
        match self {
            Self::Play {
                size,
                opponent,
                first,
                seed,
            } => Overrides {
                board_size: *size,
                opponent_marker: *opponent,
                first_player: *first,
                seed: *seed,
            },
            Self::Score { .. } => Overrides::default(),
        }
    }
}
