//! Token assignment and win-key lookup.
//!
//! `TokenScheme` decides token values; `TokenRegistry` binds them to
//! players and answers "whose line is this?" for the board.

mod registry;
mod scheme;

pub(crate) use scheme::cell_sum;
pub use registry::{PlayerEntry, TokenRegistry};
pub use scheme::{Token, TokenScheme, WinKey};
