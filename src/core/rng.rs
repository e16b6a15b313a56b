//! Deterministic random number generation for automated players.
//!
//! Every random move source owns its own `GameRng`, forked from one
//! game-level seed, so a game replays identically from the same seed no
//! matter how many random players take part.
//!
//! ```
//! use connect_grid::core::GameRng;
//!
//! let columns: Vec<usize> = (0..1000).collect();
//! let mut master = GameRng::new(42);
//! let mut first = master.fork();
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(first.choose(&columns), again.fork().choose(&columns));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for independent per-player streams.
///
/// Uses ChaCha8 for speed while keeping the sequence reproducible
/// across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Choose a random element from a slice, uniformly.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
