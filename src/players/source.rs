//! The `MoveSource` trait, the seam between the game loop and whoever picks
//! columns.

use crate::board::Board;
use crate::core::SourceError;

/// Supplies a column for the active player.
///
/// Sources only read the board. Returning a full column is allowed; the
/// game loop asks again. Returning an out-of-range column is a contract
/// violation that ends the game.
pub trait MoveSource {
    /// Name shown in prompts and logs.
    fn name(&self) -> &str;

    /// Pick a column on `board`.
    fn choose_column(&mut self, board: &Board<'_>) -> Result<usize, SourceError>;
}
