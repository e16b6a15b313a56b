//! The board: gravity drops, win detection, and read-only snapshots.

mod detect;
mod grid;
mod snapshot;
mod state;

pub use detect::{LineKind, WinningLine};
pub use grid::Coord;
pub use snapshot::BoardSnapshot;
pub use state::{Board, BoardStatus, LegalColumns, MoveOutcome};
