//! Move history entries and final game results.

use serde::{Deserialize, Serialize};

use crate::board::WinningLine;
use crate::core::PlayerId;

/// An accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,
    pub column: usize,
    /// Row the token landed in.
    pub row: usize,
    /// Turn number, starting at 0.
    pub turn: u32,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner, with the line that won.
    Winner { player: PlayerId, line: WinningLine },
    /// Board filled with no line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner { player: p, .. } if *p == player)
    }
}
