//! Structured error types.
//!
//! Each layer owns one enum; the game loop wraps the lower ones with
//! `#[from]`. A full column and a full board are not errors: the board
//! reports them through `MoveOutcome`.

use super::player::PlayerId;
use crate::tokens::Token;

/// Errors returned by `Board::apply_move`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("the game is already won; the board accepts no more moves")]
    GameOver,

    #[error("token {0} was not issued by this board's registry")]
    UnknownToken(Token),
}

/// Errors raised while registering players.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{0} is already registered")]
    DuplicatePlayer(PlayerId),

    #[error("token space exhausted: at most {capacity} players can hold a token")]
    CapacityExhausted { capacity: usize },

    #[error("no free player id left")]
    TooManyPlayers,

    #[error("{0} is not registered")]
    UnknownPlayer(PlayerId),
}

/// Errors raised when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must be at least {min}x{min}, got {rows}x{cols}")]
    BoardTooSmall { rows: usize, cols: usize, min: usize },

    #[error("a game needs at least 2 players, got {0}")]
    NotEnoughPlayers(usize),

    #[error("at most {max} players supported, got {count}")]
    TooManyPlayers { count: usize, max: usize },

    #[error("max_attempts_per_turn must be > 0")]
    ZeroAttempts,
}

/// Errors raised by a move source while choosing a column.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("no column can take another token")]
    NoLegalColumns,

    #[error("input closed before a column was chosen")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that end a game early.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid move: {0}")]
    Move(#[from] MoveError),

    #[error("move source failed: {0}")]
    Source(#[from] SourceError),

    #[error("registration failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{player} picked a full column {attempts} times in a row")]
    TooManyAttempts { player: PlayerId, attempts: u32 },

    #[error("{sources} move sources for {players} registered players")]
    SeatMismatch { sources: usize, players: usize },
}
