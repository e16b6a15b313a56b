//! Row-major cell storage.
//!
//! Row 0 is the top of the board; tokens fall towards `rows - 1`.

use serde::{Deserialize, Serialize};

use crate::core::BoardConfig;
use crate::tokens::Token;

/// A board position. Row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Token>>,
}

impl Grid {
    pub(crate) fn new(config: BoardConfig) -> Self {
        Self {
            rows: config.rows(),
            cols: config.cols(),
            cells: vec![None; config.cell_count()],
        }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    /// Cell contents; out-of-range positions read as empty.
    pub(crate) fn get(&self, row: usize, col: usize) -> Option<Token> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Lowest empty row in `col`, if any. `col` must be in range.
    pub(crate) fn landing_row(&self, col: usize) -> Option<usize> {
        (0..self.rows).rev().find(|&row| self.get(row, col).is_none())
    }

    pub(crate) fn is_column_full(&self, col: usize) -> bool {
        self.get(0, col).is_some()
    }

    /// Write into an empty cell. Filled cells are never overwritten.
    pub(crate) fn fill(&mut self, row: usize, col: usize, token: Token) {
        let cell = &mut self.cells[row * self.cols + col];
        debug_assert!(cell.is_none(), "cell ({row}, {col}) already filled");
        *cell = Some(token);
    }

    /// Rows top to bottom.
    pub(crate) fn row_slices(&self) -> impl Iterator<Item = &[Option<Token>]> {
        self.cells.chunks(self.cols)
    }
}
