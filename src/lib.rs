//! # connect-grid
//!
//! Connect Four on a board of any size, for any number of players.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Nothing assumes two players. Every registered
//!    player gets its own token and win key.
//!
//! 2. **One Detection Routine**: Win detection slides a 4×4 window over the
//!    board and compares its diagonal trace and row sums against win keys.
//!    Rotating the window 90° turns columns into rows and the anti-diagonal
//!    into the diagonal, so the same check covers all four directions.
//!
//! 3. **Collision-Free Tokens**: Tokens are powers of 5, so a window sum
//!    can only equal a win key when all four cells hold that player's token.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration, error types
//! - `tokens`: Token scheme and the player registry
//! - `board`: Gravity drops, win detection, snapshots
//! - `players`: Move sources (interactive and random)
//! - `game`: The turn loop

pub mod board;
pub mod core;
pub mod game;
pub mod players;
pub mod tokens;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, GameConfig, PlayerConfig, PlayerKind, WIN_LENGTH,
    PlayerId, PlayerMap,
    GameRng,
    ConfigError, GameError, MoveError, RegistryError, SourceError,
};

pub use crate::tokens::{PlayerEntry, Token, TokenRegistry, TokenScheme, WinKey};

pub use crate::board::{
    Board, BoardSnapshot, BoardStatus, Coord, LegalColumns, LineKind, MoveOutcome, WinningLine,
};

pub use crate::players::{InteractiveMoveSource, MoveSource, RandomMoveSource};

pub use crate::game::{Game, GameBuilder, GameResult, MoveRecord, Sources, TurnOutcome};
