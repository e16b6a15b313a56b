//! Sliding-window win detection.
//!
//! Every `WIN_LENGTH`-square window of the board is checked twice: once as
//! it lies and once rotated 90° clockwise. In each orientation only the
//! main-diagonal trace and the row sums are compared against the registry's
//! win keys. Upright, that covers rows and the `\` diagonal; rotated, the
//! rows are the board's columns and the trace is the board's `/`
//! diagonal. One routine covers all four directions.
//!
//! Scan order decides which line is reported when several exist: window
//! offsets row-major, upright before rotated, trace before rows.

use serde::{Deserialize, Serialize};

use super::grid::{Coord, Grid};
use crate::core::{PlayerId, WIN_LENGTH};
use crate::tokens::{cell_sum, TokenRegistry, WinKey};

/// Direction of a winning line on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Left to right.
    Row,
    /// Bottom to top.
    Column,
    /// Top-left to bottom-right.
    Diagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

/// The first and last cell of a winning line, in board coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    pub start: Coord,
    pub end: Coord,
    pub kind: LineKind,
}

impl WinningLine {
    /// All `WIN_LENGTH` cells from `start` to `end`.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let step =
            |from: usize, to: usize| (to as isize - from as isize) / (WIN_LENGTH as isize - 1);
        let d_row = step(self.start.row, self.end.row);
        let d_col = step(self.start.col, self.end.col);
        let start = self.start;

        (0..WIN_LENGTH as isize).map(move |k| {
            Coord::new(
                (start.row as isize + k * d_row) as usize,
                (start.col as isize + k * d_col) as usize,
            )
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Orientation {
    Upright,
    Rotated,
}

impl Orientation {
    const SCAN_ORDER: [Orientation; 2] = [Orientation::Upright, Orientation::Rotated];

    /// Map a window-local cell in this orientation to the unrotated window.
    ///
    /// Rotated row `r` is unrotated column `r` read from the bottom up.
    fn source(self, r: usize, c: usize) -> (usize, usize) {
        match self {
            Orientation::Upright => (r, c),
            Orientation::Rotated => (WIN_LENGTH - 1 - c, r),
        }
    }

    fn line_kind(self, hit: Hit) -> LineKind {
        match (self, hit) {
            (Orientation::Upright, Hit::Trace) => LineKind::Diagonal,
            (Orientation::Upright, Hit::Row(_)) => LineKind::Row,
            (Orientation::Rotated, Hit::Trace) => LineKind::AntiDiagonal,
            (Orientation::Rotated, Hit::Row(_)) => LineKind::Column,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Hit {
    Trace,
    Row(usize),
}

#[derive(Clone, Copy, Debug)]
struct Window {
    top: usize,
    left: usize,
    orientation: Orientation,
}

impl Window {
    fn to_board(self, r: usize, c: usize) -> Coord {
        let (sr, sc) = self.orientation.source(r, c);
        Coord::new(self.top + sr, self.left + sc)
    }

    fn sum(self, grid: &Grid, cells: impl Iterator<Item = (usize, usize)>) -> WinKey {
        WinKey(cell_sum(cells.map(|(r, c)| {
            let at = self.to_board(r, c);
            grid.get(at.row, at.col)
        })))
    }

    fn line(self, hit: Hit) -> WinningLine {
        let last = WIN_LENGTH - 1;
        let (start, end) = match hit {
            Hit::Trace => ((0, 0), (last, last)),
            Hit::Row(r) => ((r, 0), (r, last)),
        };
        WinningLine {
            start: self.to_board(start.0, start.1),
            end: self.to_board(end.0, end.1),
            kind: self.orientation.line_kind(hit),
        }
    }

    /// Trace first, then rows top to bottom.
    fn check(self, grid: &Grid, registry: &TokenRegistry) -> Option<(PlayerId, WinningLine)> {
        let trace = (Hit::Trace, self.sum(grid, (0..WIN_LENGTH).map(|k| (k, k))));
        let rows = (0..WIN_LENGTH)
            .map(|r| (Hit::Row(r), self.sum(grid, (0..WIN_LENGTH).map(move |c| (r, c)))));

        std::iter::once(trace)
            .chain(rows)
            .find_map(|(hit, key)| registry.winner_for(key).map(|p| (p, self.line(hit))))
    }
}

/// Scan the whole grid and return the first winning line found.
pub(crate) fn find_winning_line(
    grid: &Grid,
    registry: &TokenRegistry,
) -> Option<(PlayerId, WinningLine)> {
    let tops = 0..=grid.rows() - WIN_LENGTH;
    tops.flat_map(|top| (0..=grid.cols() - WIN_LENGTH).map(move |left| (top, left)))
        .flat_map(|(top, left)| {
            Orientation::SCAN_ORDER.into_iter().map(move |orientation| Window {
                top,
                left,
                orientation,
            })
        })
        .find_map(|window| window.check(grid, registry))
}
