//! Core engine types: players, RNG, configuration, errors.
//!
//! Everything here is independent of the board; the other modules build on
//! these types.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{BoardConfig, GameConfig, PlayerConfig, PlayerKind, WIN_LENGTH};
pub use error::{ConfigError, GameError, MoveError, RegistryError, SourceError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
