//! Token values and the base-5 scheme that keeps win keys collision-free.
//!
//! ## Why base 5
//!
//! A window never covers more than `WIN_LENGTH` (4) cells. The k-th
//! registered player gets token `5^k`, so a window sum written in base 5 has
//! one digit per player, and that digit counts the player's cells in the
//! window. A digit can reach at most 4, so no carry ever happens. The sum
//! equals `4 * 5^k` exactly when digit k is 4 and every other digit is 0,
//! that is, when all four cells hold player k's token. Empty cells add 0.

use serde::{Deserialize, Serialize};

use crate::core::WIN_LENGTH;

/// A non-zero value written into a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Token(u128);

impl Token {
    /// Wrap a raw value. Zero is reserved for empty cells.
    #[must_use]
    pub const fn from_raw(value: u128) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// The raw numeric value, as summed by win detection.
    #[must_use]
    pub const fn value(self) -> u128 {
        self.0
    }

    /// The sum a line of `WIN_LENGTH` copies of this token produces.
    #[must_use]
    pub const fn win_key(self) -> WinKey {
        WinKey(self.0.saturating_mul(WIN_LENGTH as u128))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A window sum that identifies a winning line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinKey(pub u128);

/// Assigns tokens by registration ordinal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenScheme;

impl TokenScheme {
    /// Digit base: one more than the largest per-window count.
    pub const BASE: u128 = WIN_LENGTH as u128 + 1;

    /// Number of ordinals whose token and win key both fit in a `u128`.
    pub const CAPACITY: usize = capacity();

    /// Token for the `ordinal`-th registered player (0-based).
    ///
    /// ```
    /// use connect_grid::tokens::TokenScheme;
    ///
    /// assert_eq!(TokenScheme.token_for(0).map(|t| t.value()), Some(1));
    /// assert_eq!(TokenScheme.token_for(2).map(|t| t.value()), Some(25));
    /// assert_eq!(TokenScheme.token_for(TokenScheme::CAPACITY), None);
    /// ```
    #[must_use]
    pub fn token_for(self, ordinal: usize) -> Option<Token> {
        if ordinal >= Self::CAPACITY {
            return None;
        }
        Token::from_raw(Self::BASE.pow(ordinal as u32))
    }
}

const fn capacity() -> usize {
    let limit = u128::MAX / WIN_LENGTH as u128;
    let mut count = 0;
    let mut token: u128 = 1;
    while token <= limit {
        count += 1;
        token = match token.checked_mul(TokenScheme::BASE) {
            Some(next) => next,
            None => break,
        };
    }
    count
}

/// Sum cell values the way win detection does.
///
/// Saturates instead of wrapping so a sum of arbitrary caller-made tokens
/// can never wrap around onto a real win key.
pub(crate) fn cell_sum(cells: impl IntoIterator<Item = Option<Token>>) -> u128 {
    cells
        .into_iter()
        .fold(0u128, |acc, cell| acc.saturating_add(cell.map_or(0, Token::value)))
}
