//! Deterministic random number generation for dice and question draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: the same seed produces an identical sequence, so a
//!   whole match can be replayed from its seed.
//! - **Seedable or entropy-backed**: tests and replays pin a seed; live
//!   matches draw one from the OS.
//!
//! Uses ChaCha8 for speed while keeping high-quality randomness.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for die rolls and uniform question selection.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll a die: uniform in `1..=sides`.
    pub fn roll(&mut self, sides: u8) -> u8 {
        debug_assert!(sides >= 1, "a die needs at least one side");
        self.inner.gen_range(1..=sides)
    }

    /// Generate a random index in `0..len`.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
