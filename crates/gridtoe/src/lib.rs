//! Console front end for `gridtoe_core`.
//!
//! Wires a [`ConsolePlayer`] and a [`HeuristicPlayer`] into an
//! [`Orchestrator`] configured from TOML and the command line, plus a
//! one-shot position scorer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod logging;
mod orchestrator;
pub mod players;
mod score;

pub use config::{ConfigError, FirstPlayer, GameConfig, Overrides};
pub use logging::{DEFAULT_FILTER, init_tracing};
pub use orchestrator::{MatchReport, Orchestrator, setup_match};
pub use players::{ConsolePlayer, HeuristicPlayer, Player};
pub use score::{ScoreReport, score_position};
