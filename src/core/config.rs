//! Game configuration types.
//!
//! A game is configured by:
//! - `BoardConfig`: board dimensions
//! - `PlayerConfig`: one entry per seat, in turn order
//! - `GameConfig`: combines the above with the RNG seed and retry limit
//!
//! Configuration is validated when it is built, so the board and game loop
//! can rely on the dimensions and player count.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::tokens::TokenScheme;

/// Number of same-player tokens that must line up to win.
pub const WIN_LENGTH: usize = 4;

/// Board dimensions. Both must be at least `WIN_LENGTH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardDims", into = "BoardDims")]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct BoardDims {
    rows: usize,
    cols: usize,
}

impl BoardConfig {
    /// Validate and create board dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows < WIN_LENGTH || cols < WIN_LENGTH {
            return Err(ConfigError::BoardTooSmall {
                rows,
                cols,
                min: WIN_LENGTH,
            });
        }
        Ok(Self { rows, cols })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells on the board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { rows: 8, cols: 8 }
    }
}

impl TryFrom<BoardDims> for BoardConfig {
    type Error = ConfigError;

    fn try_from(dims: BoardDims) -> Result<Self, Self::Error> {
        Self::new(dims.rows, dims.cols)
    }
}

impl From<BoardConfig> for BoardDims {
    fn from(config: BoardConfig) -> Self {
        Self {
            rows: config.rows,
            cols: config.cols,
        }
    }
}

/// Which move source drives a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Prompted on the console for each move.
    Human,
    /// Picks uniformly among non-full columns.
    Random,
}

/// Configuration for a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    pub name: String,

    /// Move source for this seat.
    pub kind: PlayerKind,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    pub fn random(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Random)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimensions.
    pub board: BoardConfig,

    /// Seats in turn order. Seat `i` becomes `PlayerId(i)`.
    pub players: Vec<PlayerConfig>,

    /// Seed for the random move sources.
    pub seed: u64,

    /// How many full-column picks a player gets before the game aborts.
    pub max_attempts_per_turn: u32,
}

impl GameConfig {
    /// Default retry limit for a single turn.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 64;

    /// Create a configuration with no players yet.
    #[must_use]
    pub fn new(board: BoardConfig) -> Self {
        Self {
            board,
            players: Vec::new(),
            seed: 0,
            max_attempts_per_turn: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Add a seat.
    #[must_use]
    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.players.push(player);
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-turn retry limit.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts_per_turn = attempts;
        self
    }

    /// Check player count and retry limit.
    ///
    /// The board dimensions are already validated by `BoardConfig`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.players.len();
        if count < 2 {
            return Err(ConfigError::NotEnoughPlayers(count));
        }
        let max = TokenScheme::CAPACITY;
        if count > max {
            return Err(ConfigError::TooManyPlayers { count, max });
        }
        if self.max_attempts_per_turn == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
