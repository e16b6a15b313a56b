//! The board state machine.
//!
//! ```text
//!                apply_move + detect_win
//! InProgress ─────────────────────────────┬──> Won { winner, line }
//!     │                                   └──> Draw (full, no line)
//!     └── apply_move on a full board ────────> Draw
//! ```
//!
//! The grid only changes through `apply_move` returning `Filled`, and never
//! once the board is complete.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::detect::{find_winning_line, WinningLine};
use super::grid::{Coord, Grid};
use super::snapshot::BoardSnapshot;
use crate::core::{BoardConfig, MoveError, PlayerId};
use crate::tokens::{Token, TokenRegistry};

/// Result of a move that did not violate the board's contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The token landed at `row` of `column`.
    Filled { row: usize, column: usize },
    /// The column has no empty cell. Retry with another column.
    ColumnFull,
    /// No empty cell is left anywhere. The game is a draw.
    BoardFull,
}

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardStatus {
    InProgress,
    Won { winner: PlayerId, line: WinningLine },
    Draw,
}

impl BoardStatus {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !matches!(self, BoardStatus::InProgress)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            BoardStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    #[must_use]
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            BoardStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Columns that can still take a token.
pub type LegalColumns = SmallVec<[usize; 16]>;

/// A Connect Four board of any size.
///
/// Borrows the registry that issued the players' tokens; win detection asks
/// it which player, if any, a window sum belongs to.
///
/// ## Example
///
/// ```
/// use connect_grid::board::{Board, BoardStatus, MoveOutcome};
/// use connect_grid::core::{BoardConfig, PlayerId};
/// use connect_grid::tokens::TokenRegistry;
///
/// let mut registry = TokenRegistry::new();
/// let red = registry.register(PlayerId::new(0), "red").unwrap();
///
/// let mut board = Board::new(BoardConfig::new(6, 7).unwrap(), &registry);
/// for _ in 0..4 {
///     assert!(matches!(board.apply_move(3, red), Ok(MoveOutcome::Filled { .. })));
/// }
/// assert_eq!(board.detect_win().winner(), Some(PlayerId::new(0)));
/// ```
#[derive(Clone, Debug)]
pub struct Board<'r> {
    grid: Grid,
    registry: &'r TokenRegistry,
    status: BoardStatus,
    filled: usize,
}

impl<'r> Board<'r> {
    /// Create an empty board.
    #[must_use]
    pub fn new(config: BoardConfig, registry: &'r TokenRegistry) -> Self {
        Self {
            grid: Grid::new(config),
            registry,
            status: BoardStatus::InProgress,
            filled: 0,
        }
    }

    /// Drop `token` into `column`.
    ///
    /// Checks run in order: a won board rejects the move, a full board
    /// becomes a draw, the column must be in range, the token must belong to
    /// a registered player, the column must have room. Only `Filled` changes
    /// the grid.
    pub fn apply_move(&mut self, column: usize, token: Token) -> Result<MoveOutcome, MoveError> {
        if matches!(self.status, BoardStatus::Won { .. }) {
            return Err(MoveError::GameOver);
        }

        if self.is_full() {
            if self.status != BoardStatus::Draw {
                info!("board full, game drawn");
                self.status = BoardStatus::Draw;
            }
            return Ok(MoveOutcome::BoardFull);
        }

        let cols = self.cols();
        if column >= cols {
            return Err(MoveError::InvalidColumn { column, cols });
        }

        // Window sums only stay unambiguous for tokens the registry issued.
        if self.registry.player_for_token(token).is_none() {
            return Err(MoveError::UnknownToken(token));
        }

        let Some(row) = self.grid.landing_row(column) else {
            debug!(column, "column full");
            return Ok(MoveOutcome::ColumnFull);
        };

        self.grid.fill(row, column, token);
        self.filled += 1;
        debug!(row, column, %token, "token placed");

        Ok(MoveOutcome::Filled { row, column })
    }

    /// Rescan the whole board for a winning line.
    ///
    /// Call after every `Filled` move. A complete board keeps its recorded
    /// result, so repeated calls agree.
    pub fn detect_win(&mut self) -> BoardStatus {
        if self.status.is_complete() {
            return self.status;
        }

        if let Some((winner, line)) = find_winning_line(&self.grid, self.registry) {
            info!(
                %winner,
                start = %line.start,
                end = %line.end,
                kind = ?line.kind,
                "winning line found"
            );
            self.status = BoardStatus::Won { winner, line };
        } else if self.is_full() {
            info!("board full with no line, game drawn");
            self.status = BoardStatus::Draw;
        }

        self.status
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Token at a position, `None` if empty or out of range.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Token> {
        self.grid.get(row, col)
    }

    /// Player whose token sits at `at`.
    #[must_use]
    pub fn owner_at(&self, at: Coord) -> Option<PlayerId> {
        self.cell(at.row, at.col)
            .and_then(|token| self.registry.player_for_token(token))
    }

    #[must_use]
    pub fn status(&self) -> BoardStatus {
        self.status
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    #[must_use]
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status.winning_line()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.filled
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled == self.rows() * self.cols()
    }

    /// Out-of-range columns count as full.
    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= self.cols() || self.grid.is_column_full(column)
    }

    /// Columns with at least one empty cell, ascending.
    #[must_use]
    pub fn legal_columns(&self) -> LegalColumns {
        (0..self.cols())
            .filter(|&col| !self.grid.is_column_full(col))
            .collect()
    }

    /// Owned, serializable copy of the board for renderers.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(
            self.grid.row_slices().map(<[Option<Token>]>::to_vec).collect(),
            self.status,
        )
    }
}

impl std::fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.snapshot().render(self.registry))
    }
}
