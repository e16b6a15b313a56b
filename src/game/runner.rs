//! The turn loop.
//!
//! `Game` asks the active seat's move source for a column, applies it and
//! rescans for a winner. The turn only advances when a token lands.

use im::Vector;
use tracing::{debug, info, warn};

use super::record::{GameResult, MoveRecord};
use crate::board::{Board, BoardStatus, MoveOutcome};
use crate::core::{
    GameConfig, GameError, GameRng, PlayerId, PlayerKind, PlayerMap, RegistryError,
};
use crate::players::{MoveSource, RandomMoveSource};
use crate::tokens::{Token, TokenRegistry};

/// One move source per seat.
pub type Sources<'r> = PlayerMap<Box<dyn MoveSource + 'r>>;

/// What a single call to `Game::step` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A token was placed; `status` is the board status after detection.
    Placed { record: MoveRecord, status: BoardStatus },
    /// The board had no room left; the game is a draw.
    BoardFull,
    /// The game had already finished; nothing happened.
    AlreadyOver,
}

/// A game in progress.
///
/// Borrows the registry that issued its players' tokens and owns the board
/// and move sources.
pub struct Game<'r> {
    board: Board<'r>,
    sources: Sources<'r>,
    tokens: PlayerMap<Token>,
    turn: u32,
    max_attempts: u32,
    history: Vector<MoveRecord>,
}

impl<'r> Game<'r> {
    /// Create a game from explicit move sources.
    ///
    /// Seat `i` of `sources` plays as `PlayerId(i)`, which must be registered.
    pub fn new(
        config: &GameConfig,
        registry: &'r TokenRegistry,
        sources: Sources<'r>,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let seats = sources.player_count();
        if seats != registry.len() {
            return Err(GameError::SeatMismatch {
                sources: seats,
                players: registry.len(),
            });
        }

        let tokens = sources
            .player_ids()
            .map(|p| registry.token_of(p).ok_or(RegistryError::UnknownPlayer(p)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            board: Board::new(config.board, registry),
            sources,
            tokens: PlayerMap::from_vec(tokens),
            turn: 0,
            max_attempts: config.max_attempts_per_turn,
            history: Vector::new(),
        })
    }

    /// Create a game whose random seats are driven by forks of one RNG
    /// seeded from `config.seed`, and whose human seats come from `human`.
    pub fn from_config<F>(
        config: &GameConfig,
        registry: &'r TokenRegistry,
        mut human: F,
    ) -> Result<Self, GameError>
    where
        F: FnMut(PlayerId, &str) -> Box<dyn MoveSource + 'r>,
    {
        config.validate()?;

        let mut rng = GameRng::new(config.seed);
        let sources: Vec<Box<dyn MoveSource + 'r>> = config
            .players
            .iter()
            .zip(PlayerId::all(config.players.len()))
            .map(|(seat, id)| match seat.kind {
                PlayerKind::Random => {
                    let source = RandomMoveSource::new(seat.name.clone(), rng.fork());
                    Box::new(source) as Box<dyn MoveSource + 'r>
                }
                PlayerKind::Human => human(id, &seat.name),
            })
            .collect();

        Self::new(config, registry, PlayerMap::from_vec(sources))
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        let seats = self.tokens.player_count() as u32;
        PlayerId::new((self.turn % seats) as u8)
    }

    /// Play one turn.
    ///
    /// A full column sends the same player back to their source, up to the
    /// configured number of attempts.
    pub fn step(&mut self) -> Result<TurnOutcome, GameError> {
        if self.board.is_complete() {
            return Ok(TurnOutcome::AlreadyOver);
        }

        let player = self.active_player();
        let token = self.tokens[player];

        for attempt in 1..=self.max_attempts {
            let column = self.sources.get_mut(player).choose_column(&self.board)?;

            match self.board.apply_move(column, token)? {
                MoveOutcome::Filled { row, column } => {
                    let record = MoveRecord {
                        player,
                        column,
                        row,
                        turn: self.turn,
                    };
                    self.history.push_back(record);
                    self.turn += 1;

                    let status = self.board.detect_win();
                    debug!(%player, row, column, ?status, "turn played");
                    return Ok(TurnOutcome::Placed { record, status });
                }
                MoveOutcome::ColumnFull => {
                    warn!(%player, column, attempt, "column full, asking again");
                }
                MoveOutcome::BoardFull => return Ok(TurnOutcome::BoardFull),
            }
        }

        Err(GameError::TooManyAttempts {
            player,
            attempts: self.max_attempts,
        })
    }

    /// Play until the board is complete.
    pub fn play(&mut self) -> Result<GameResult, GameError> {
        self.play_observed(|_, _| {})
    }

    /// Play until the board is complete, calling `observe` after every turn.
    pub fn play_observed<F>(&mut self, mut observe: F) -> Result<GameResult, GameError>
    where
        F: FnMut(&Self, &TurnOutcome),
    {
        loop {
            if let Some(result) = self.result() {
                info!(?result, turns = self.turn, "game over");
                return Ok(result);
            }
            let outcome = self.step()?;
            observe(self, &outcome);
        }
    }

    /// The final result, once the board is complete.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.board.status() {
            BoardStatus::InProgress => None,
            BoardStatus::Won { winner, line } => Some(GameResult::Winner {
                player: winner,
                line,
            }),
            BoardStatus::Draw => Some(GameResult::Draw),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board<'r> {
        &self.board
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of turns played.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Display name of a seat's move source.
    #[must_use]
    pub fn source_name(&self, player: PlayerId) -> &str {
        self.sources[player].name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, PlayerConfig, SourceError};

    /// Plays a fixed list of columns, then fails.
    struct Scripted {
        columns: Vec<usize>,
        next: usize,
    }

    impl Scripted {
        fn boxed(columns: &[usize]) -> Box<dyn MoveSource> {
            Box::new(Self {
                columns: columns.to_vec(),
                next: 0,
            })
        }
    }

    impl MoveSource for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_column(&mut self, _board: &Board<'_>) -> Result<usize, SourceError> {
            let col = self.columns.get(self.next).copied().ok_or(SourceError::InputClosed)?;
            self.next += 1;
            Ok(col)
        }
    }

    fn config(rows: usize, cols: usize) -> GameConfig {
        GameConfig::new(BoardConfig::new(rows, cols).unwrap())
            .with_player(PlayerConfig::human("a"))
            .with_player(PlayerConfig::human("b"))
    }

    fn registry_for(config: &GameConfig) -> TokenRegistry {
        TokenRegistry::from_config(config).unwrap()
    }

    #[test]
    fn test_turns_alternate() {
        let config = config(6, 7);
        let registry = registry_for(&config);
        let sources = PlayerMap::from_vec(vec![Scripted::boxed(&[0, 0]), Scripted::boxed(&[1])]);
        let mut game = Game::new(&config, &registry, sources).unwrap();

        assert_eq!(game.active_player(), PlayerId::new(0));
        game.step().unwrap();
        assert_eq!(game.active_player(), PlayerId::new(1));
        game.step().unwrap();
        assert_eq!(game.active_player(), PlayerId::new(0));

        let players: Vec<_> = game.history().iter().map(|r| r.player).collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    }

    #[test]
    fn test_column_full_keeps_the_turn() {
        let config = config(4, 4);
        let registry = registry_for(&config);
        // Column 0 fills after four moves; a's fifth pick is retried.
        let sources = PlayerMap::from_vec(vec![
            Scripted::boxed(&[0, 0, 0, 1]),
            Scripted::boxed(&[0, 0, 2]),
        ]);
        let mut game = Game::new(&config, &registry, sources).unwrap();

        for _ in 0..4 {
            game.step().unwrap();
        }
        assert_eq!(game.active_player(), PlayerId::new(0));
        let outcome = game.step().unwrap();

        match outcome {
            TurnOutcome::Placed { record, .. } => {
                assert_eq!(record.player, PlayerId::new(0));
                assert_eq!(record.column, 1);
            }
            other => panic!("expected a placement, got {other:?}"),
        }
        assert_eq!(game.turn(), 5);
    }

    #[test]
    fn test_too_many_attempts() {
        let config = config(4, 4).with_max_attempts(2);
        let registry = registry_for(&config);
        let sources = PlayerMap::from_vec(vec![
            Scripted::boxed(&[0, 0, 0, 0]),
            Scripted::boxed(&[0, 0]),
        ]);
        let mut game = Game::new(&config, &registry, sources).unwrap();
        for _ in 0..4 {
            game.step().unwrap();
        }

        let err = game.step().unwrap_err();
        assert!(matches!(
            err,
            GameError::TooManyAttempts { player, attempts: 2 } if player == PlayerId::new(0)
        ));
    }

    #[test]
    fn test_invalid_column_is_fatal() {
        let config = config(4, 4);
        let registry = registry_for(&config);
        let sources = PlayerMap::from_vec(vec![Scripted::boxed(&[9]), Scripted::boxed(&[])]);
        let mut game = Game::new(&config, &registry, sources).unwrap();

        assert!(matches!(
            game.step(),
            Err(GameError::Move(crate::core::MoveError::InvalidColumn { column: 9, cols: 4 }))
        ));
        assert_eq!(game.board().filled_count(), 0);
    }

    #[test]
    fn test_vertical_win_ends_game() {
        let config = config(6, 7);
        let registry = registry_for(&config);
        let sources = PlayerMap::from_vec(vec![
            Scripted::boxed(&[3, 3, 3, 3]),
            Scripted::boxed(&[0, 1, 2]),
        ]);
        let mut game = Game::new(&config, &registry, sources).unwrap();

        let result = game.play().unwrap();
        assert!(result.is_winner(PlayerId::new(0)));
        assert_eq!(game.turn(), 7);
        assert_eq!(game.step().unwrap(), TurnOutcome::AlreadyOver);
    }

    #[test]
    fn test_seat_mismatch() {
        let config = config(4, 4);
        let registry = registry_for(&config);
        let sources = PlayerMap::from_vec(vec![Scripted::boxed(&[0])]);

        assert!(matches!(
            Game::new(&config, &registry, sources),
            Err(GameError::SeatMismatch { sources: 1, players: 2 })
        ));
    }

    #[test]
    fn test_unregistered_seat() {
        let config = config(4, 4);
        let mut registry = TokenRegistry::new();
        registry.register(PlayerId::new(0), "a").unwrap();
        registry.register(PlayerId::new(5), "f").unwrap();
        let sources = PlayerMap::from_vec(vec![Scripted::boxed(&[0]), Scripted::boxed(&[0])]);

        assert!(matches!(
            Game::new(&config, &registry, sources),
            Err(GameError::Registry(RegistryError::UnknownPlayer(p))) if p == PlayerId::new(1)
        ));
    }

    #[test]
    fn test_from_config_random_game_is_reproducible() {
        let config = GameConfig::new(BoardConfig::new(6, 7).unwrap())
            .with_player(PlayerConfig::random("x"))
            .with_player(PlayerConfig::random("y"))
            .with_seed(2024);
        let registry = registry_for(&config);

        let run = || {
            let mut game = Game::from_config(&config, &registry, |_, _| {
                unreachable!("no human seats")
            })
            .unwrap();
            let result = game.play().unwrap();
            (result, game.history().clone())
        };

        let (first_result, first_history) = run();
        let (second_result, second_history) = run();
        assert_eq!(first_result, second_result);
        assert_eq!(first_history, second_history);
    }
}
