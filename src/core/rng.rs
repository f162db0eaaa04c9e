//! Deterministic random number generation with forking.
//!
//! A batch of games is driven from one seed: the driver forks a child RNG
//! per game so every game gets its own reproducible shuffle.
//!
//! ```
//! use blacksin::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut deck);
//!
//! let mut again = GameRng::new(42);
//! let mut other = vec![1, 2, 3, 4, 5];
//! again.shuffle(&mut other);
//! assert_eq!(deck, other);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent, deterministic child.
    ///
    /// The n-th fork of a given seed always yields the same child.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
