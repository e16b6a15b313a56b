//! Move sources: where each player's column choice comes from.
//!
//! - `MoveSource`: the capability the game loop calls once per attempt
//! - `RandomMoveSource`: uniform choice among non-full columns
//! - `InteractiveMoveSource`: prompts on a writer, reads from a reader

mod interactive;
mod random;
mod source;

pub use interactive::InteractiveMoveSource;
pub use random::RandomMoveSource;
pub use source::MoveSource;
