//! Turn loop: asks each player's move source for a column, applies it, and
//! checks for a winner until the board is complete.
//!
//! Players move in seat order, `PlayerId(0)` first. A full column does not
//! use up the turn; the same player is asked again.

mod builder;
mod record;
mod runner;

pub use builder::GameBuilder;
pub use record::{GameResult, MoveRecord};
pub use runner::{Game, Sources, TurnOutcome};
