//! Fluent construction of a validated `GameConfig`.

use crate::core::{BoardConfig, ConfigError, GameConfig, PlayerConfig};

/// Builder for a validated `GameConfig`.
///
/// ```
/// use connect_grid::game::GameBuilder;
///
/// let config = GameBuilder::new()
///     .rows(6)
///     .cols(7)
///     .random_player("north")
///     .random_player("south")
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(config.players.len(), 2);
/// assert_eq!(config.board.cols(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    rows: usize,
    cols: usize,
    players: Vec<PlayerConfig>,
    seed: u64,
    max_attempts_per_turn: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        let board = BoardConfig::default();
        Self {
            rows: board.rows(),
            cols: board.cols(),
            players: Vec::new(),
            seed: 0,
            max_attempts_per_turn: GameConfig::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Add a seat. Seats move in the order they are added.
    pub fn player(mut self, player: PlayerConfig) -> Self {
        self.players.push(player);
        self
    }

    pub fn human_player(self, name: impl Into<String>) -> Self {
        self.player(PlayerConfig::human(name))
    }

    pub fn random_player(self, name: impl Into<String>) -> Self {
        self.player(PlayerConfig::random(name))
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn max_attempts_per_turn(mut self, attempts: u32) -> Self {
        self.max_attempts_per_turn = attempts;
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        let board = BoardConfig::new(self.rows, self.cols)?;
        let config = GameConfig {
            board,
            players: self.players,
            seed: self.seed,
            max_attempts_per_turn: self.max_attempts_per_turn,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerKind;

    #[test]
    fn test_defaults() {
        let config = GameBuilder::new()
            .human_player("a")
            .random_player("b")
            .build()
            .unwrap();

        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(config.players[0].kind, PlayerKind::Human);
        assert_eq!(config.max_attempts_per_turn, GameConfig::DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_rejects_small_board() {
        let err = GameBuilder::new()
            .rows(3)
            .random_player("a")
            .random_player("b")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::BoardTooSmall { rows: 3, .. }));
    }

    #[test]
    fn test_rejects_single_player() {
        let err = GameBuilder::new().random_player("a").build().unwrap_err();
        assert_eq!(err, ConfigError::NotEnoughPlayers(1));
    }
}
