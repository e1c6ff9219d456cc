//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use gridtoe_core::{DEFAULT_SIZE, MAX_SIZE, Marker};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Who takes the first move in a new match.
///
/// Defaults to [`FirstPlayer::Random`], a coin flip made by the driver.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstPlayer {
    /// Flip a coin.
    #[default]
    Random,
    /// The console player moves first.
    Human,
    /// The heuristic opponent moves first.
    Opponent,
}

impl FirstPlayer {
    /// Resolves to the marker that moves first.
    ///
    /// The coin flip draws from `rng`, so a seeded generator makes the
    /// choice reproducible.
    #[instrument(skip(rng))]
    pub fn resolve<R: Rng>(self, opponent: Marker, rng: &mut R) -> Marker {
        let first = match self {
            Self::Human => opponent.other(),
            Self::Opponent => opponent,
            Self::Random => {
                if rng.gen_bool(0.5) {
                    opponent
                } else {
                    opponent.other()
                }
            }
        };
        debug!(%first, "Starting marker resolved");
        first
    }
}

/// Values given on the command line, overriding the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Board dimension.
    pub board_size: Option<usize>,
    /// Marker played by the opponent.
    pub opponent_marker: Option<Marker>,
    /// Who starts.
    pub first_player: Option<FirstPlayer>,
    /// RNG seed for the coin flip.
    pub seed: Option<u64>,
}

/// Settings for a console match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board dimension (N for an N×N board).
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Marker played by the heuristic opponent.
    #[serde(default = "default_opponent_marker")]
    opponent_marker: Marker,

    /// Who takes the first move.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Seed for the starting-player coin flip.
    #[serde(default)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr.
    #[serde(default)]
    log_file: Option<PathBuf>,
}

#[instrument]
fn default_board_size() -> usize {
    DEFAULT_SIZE
}

#[instrument]
fn default_opponent_marker() -> Marker {
    Marker::O
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            opponent_marker: default_opponent_marker(),
            first_player: FirstPlayer::default(),
            seed: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Marker played from the console.
    pub fn human_marker(&self) -> Marker {
        self.opponent_marker.other()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn merge(self, overrides: Overrides) -> Result<Self, ConfigError> {
        let mut config = self;
        if let Some(size) = overrides.board_size {
            config = config.with_board_size(size);
        }
        if let Some(marker) = overrides.opponent_marker {
            config = config.with_opponent_marker(marker);
        }
        if let Some(first) = overrides.first_player {
            config = config.with_first_player(first);
        }
        if overrides.seed.is_some() {
            config = config.with_seed(overrides.seed);
        }
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1".to_string()));
        }
        if self.board_size > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "board_size must be at most {}",
                MAX_SIZE
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.board_size(), 3);
        assert_eq!(*config.opponent_marker(), Marker::O);
        assert_eq!(config.human_marker(), Marker::X);
        assert_eq!(*config.first_player(), FirstPlayer::Random);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("board_size = 4").unwrap();
        assert_eq!(*config.board_size(), 4);
        assert_eq!(*config.opponent_marker(), Marker::O);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_full_toml() {
        let config: GameConfig = toml::from_str(
            r#"
            board_size = 5
            opponent_marker = "x"
            first_player = "opponent"
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(*config.opponent_marker(), Marker::X);
        assert_eq!(*config.first_player(), FirstPlayer::Opponent);
        assert_eq!(*config.seed(), Some(42));
    }

    #[test]
    fn test_merge_overrides_and_validates() {
        let overrides = Overrides {
            board_size: Some(6),
            first_player: Some(FirstPlayer::Human),
            ..Overrides::default()
        };
        let config = GameConfig::default().merge(overrides).unwrap();
        assert_eq!(*config.board_size(), 6);
        assert_eq!(*config.first_player(), FirstPlayer::Human);
        assert_eq!(*config.opponent_marker(), Marker::O);

        let bad = Overrides {
            board_size: Some(0),
            ..Overrides::default()
        };
        assert!(GameConfig::default().merge(bad).is_err());
    }

    #[test]
    fn test_oversized_board_rejected() {
        let huge = Overrides {
            board_size: Some(4_294_967_296),
            ..Overrides::default()
        };
        let err = GameConfig::default().merge(huge).unwrap_err();
        assert_eq!(err.message, format!("board_size must be at most {}", MAX_SIZE));

        let largest = Overrides {
            board_size: Some(MAX_SIZE),
            ..Overrides::default()
        };
        assert!(GameConfig::default().merge(largest).is_ok());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::new("board_size must be at least 1".to_string());
        assert!(err.to_string().starts_with("Config error: board_size must be at least 1 at "));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_first_player_resolution() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(FirstPlayer::Human.resolve(Marker::O, &mut rng), Marker::X);
        assert_eq!(FirstPlayer::Opponent.resolve(Marker::O, &mut rng), Marker::O);
    }

    #[test]
    fn test_random_first_player_is_reproducible() {
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..16).map(|_| FirstPlayer::Random.resolve(Marker::O, &mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..16).map(|_| FirstPlayer::Random.resolve(Marker::O, &mut rng)).collect()
        };
        assert_eq!(a, b);
        assert!(a.contains(&Marker::X) && a.contains(&Marker::O));
    }
}
