//! Fisher-Yates pass sampler.
//!
//! Items are handed out one pass at a time. The first pass follows insertion
//! order; every later pass is a fresh uniform permutation produced in place by
//! a Fisher-Yates shuffle, which costs exactly `n - 1` bounded draws from the
//! RNG per pass (O(n)), rather than one per `draw`.
//!
//! ## References
//!
//! - Fisher & Yates (1938), in the in-place form of Durstenfeld (1964),
//!   Knuth TAOCP Vol. 2, Algorithm P.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Result, SamplerError};
use crate::sampler::{PassCache, PassPhase, RandomSampler};

/// Shuffle `slice` in place with the Fisher-Yates algorithm.
///
/// For `i` from `len - 1` down to `1`, swaps position `i` with a position `j`
/// drawn uniformly from `0..=i`. Every permutation is equally likely.
pub fn fisher_yates_shuffle<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// A sampler that returns every item exactly once per pass, reshuffling
/// between passes with Fisher-Yates.
#[derive(Debug, Clone)]
pub struct PermutationShuffleSampler<T, R = StdRng> {
    items: Vec<T>,
    pass: PassCache,
    rng: R,
}

impl<T> PermutationShuffleSampler<T> {
    /// Create an empty sampler backed by an OS-seeded [`StdRng`].
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an empty sampler with a deterministic [`StdRng`].
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a sampler holding `items`.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from_items_with_rng(items, StdRng::from_os_rng())
    }
}

impl<T> Default for PermutationShuffleSampler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Rng> PermutationShuffleSampler<T, R> {
    /// Create an empty sampler using a caller-supplied RNG.
    ///
    /// This exists primarily for deterministic testing/benchmarking.
    pub fn with_rng(rng: R) -> Self {
        Self {
            items: Vec::new(),
            pass: PassCache::new(),
            rng,
        }
    }

    /// Create a sampler holding `items`, using a caller-supplied RNG.
    pub fn from_items_with_rng<I: IntoIterator<Item = T>>(items: I, rng: R) -> Self {
        let mut s = Self::with_rng(rng);
        s.items.extend(items);
        s
    }

    /// Current phase of the pass state machine.
    pub fn phase(&self) -> PassPhase {
        self.pass.phase()
    }

    /// Draws left before the permutation is regenerated.
    pub fn remaining_in_pass(&self) -> usize {
        self.pass.remaining(self.items.len())
    }

    /// Consume the sampler, returning its items in insertion order.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T, R: Rng> RandomSampler<T> for PermutationShuffleSampler<T, R> {
    fn add_item(&mut self, item: T) {
        self.items.push(item);
        self.pass.invalidate();
    }

    fn clear(&mut self) {
        self.items.clear();
        self.pass.invalidate();
    }

    fn draw(&mut self) -> Result<&T> {
        if self.items.is_empty() {
            return Err(SamplerError::EmptyCollection);
        }

        let rng = &mut self.rng;
        let idx = self.pass.next_index(self.items.len(), |order| {
            debug!(len = order.len(), "refreshing pass (fisher-yates)");
            fisher_yates_shuffle(order, rng);
        });
        Ok(&self.items[idx])
    }

    fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T, R: Rng> Extend<T> for PermutationShuffleSampler<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
        self.pass.invalidate();
    }
}
