//! Uniform random move source for automated seats.

use super::MoveSource;
use crate::board::Board;
use crate::core::{GameRng, SourceError};

/// Picks uniformly among the columns that still have room.
#[derive(Clone, Debug)]
pub struct RandomMoveSource {
    name: String,
    rng: GameRng,
}

impl RandomMoveSource {
    pub fn new(name: impl Into<String>, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    /// Convenience constructor from a bare seed.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self::new(name, GameRng::new(seed))
    }
}

impl MoveSource for RandomMoveSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_column(&mut self, board: &Board<'_>) -> Result<usize, SourceError> {
        let legal = board.legal_columns();
        self.rng
            .choose(&legal)
            .copied()
            .ok_or(SourceError::NoLegalColumns)
    }
}
