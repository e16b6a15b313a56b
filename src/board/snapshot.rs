//! Read-only copies of the board for renderers.

use serde::{Deserialize, Serialize};

use super::detect::WinningLine;
use super::state::BoardStatus;
use crate::core::PlayerId;
use crate::tokens::{Token, TokenRegistry};

/// Owned copy of a board: cells top row first, plus the game status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<Option<Token>>>,
    pub status: BoardStatus,
}

impl BoardSnapshot {
    pub(crate) fn new(cells: Vec<Vec<Option<Token>>>, status: BoardStatus) -> Self {
        Self {
            rows: cells.len(),
            cols: cells.first().map_or(0, Vec::len),
            cells,
            status,
        }
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

    /// Grid of player ids, with tokens translated through `registry`.
    ///
    /// Tokens the registry does not know read as empty.
    #[must_use]
    pub fn players(&self, registry: &TokenRegistry) -> Vec<Vec<Option<PlayerId>>> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.and_then(|t| registry.player_for_token(t)))
                    .collect()
            })
            .collect()
    }

    /// Plain-text rendering: a header of column indices, then one line per
    /// row with the owning player's index, or `.` for an empty cell.
    #[must_use]
    pub fn render(&self, registry: &TokenRegistry) -> String {
        let players = self.players(registry);
        let width = players
            .iter()
            .flatten()
            .flatten()
            .map(|p| p.0.to_string().len())
            .chain((0..self.cols).map(|c| c.to_string().len()))
            .max()
            .unwrap_or(1);

        let header: Vec<String> = (0..self.cols).map(|c| format!("{c:>width$}")).collect();
        let mut lines = vec![header.join(" ")];
        for row in &players {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(p) => format!("{:>width$}", p.0),
                    None => format!("{:>width$}", "."),
                })
                .collect();
            lines.push(cells.join(" "));
        }
        lines.join("\n")
    }
}
