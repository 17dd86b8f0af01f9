//! RNG module - random sources for birth tie-breaks
//!
//! A dead cell born from three neighbours with three different identities
//! takes one of them at random. The engine never touches a global generator;
//! it asks a [`TieBreaker`] to pick, so runs can be reproduced from a seed and
//! tests can substitute a fixed or enumerating source.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Picks one of three candidates.
pub trait TieBreaker {
    /// Return an index in `0..3`.
    fn pick_of_three(&mut self) -> usize;
}

impl<T: TieBreaker + ?Sized> TieBreaker for &mut T {
    fn pick_of_three(&mut self) -> usize {
        (**self).pick_of_three()
    }
}

/// Uniform tie-breaks from a ChaCha8 stream.
#[derive(Debug, Clone)]
pub struct SeededTieBreaker {
    rng: ChaCha8Rng,
}

impl SeededTieBreaker {
    /// Reproducible source: the same seed yields the same picks.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl TieBreaker for SeededTieBreaker {
    fn pick_of_three(&mut self) -> usize {
        self.rng.gen_range(0..3)
    }
}

/// Always picks the first candidate. Makes every birth deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstTieBreaker;

impl TieBreaker for FirstTieBreaker {
    fn pick_of_three(&mut self) -> usize {
        0
    }
}

/// Cycles 0, 1, 2, 0, ... so every outcome is visited in turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclingTieBreaker {
    next: usize,
}

impl TieBreaker for CyclingTieBreaker {
    fn pick_of_three(&mut self) -> usize {
        let pick = self.next;
        self.next = (self.next + 1) % 3;
        pick
    }
}
