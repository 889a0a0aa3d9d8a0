//! Seedable RNG for route sampling.
//!
//! Sampling is single-threaded, so one generator drives the whole run.  A
//! fixed seed reproduces the same origin/destination sequence on the same
//! network; no seed draws the initial state from OS entropy.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Sampling RNG wrapper around `SmallRng`.
pub struct SampleRng(SmallRng);

impl SampleRng {
    /// Deterministic generator for reproducible runs.
    pub fn new(seed: u64) -> Self {
        SampleRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-deterministic generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        SampleRng(SmallRng::from_entropy())
    }

    /// `Some(seed)` → [`new`](Self::new), `None` → [`from_entropy`](Self::from_entropy).
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a uniformly random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
