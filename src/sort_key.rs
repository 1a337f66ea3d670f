//! Random-key sort pass sampler.
//!
//! Same pass contract as [`crate::permutation`], but the permutation is
//! regenerated by tagging every index with a fresh 128-bit random key and
//! sorting by key: O(n) key draws plus an O(n log n) sort per pass.
//!
//! The result is a permutation no matter what, so "each item once per pass"
//! always holds. Uniformity over orderings is exact only when no two keys
//! collide; with 128-bit keys that is negligible, but this strategy is kept
//! as the slower, approximate comparison point and should not be swapped for
//! Fisher-Yates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Result, SamplerError};
use crate::sampler::{PassCache, PassPhase, RandomSampler};

/// Reorder `slice` by ascending random sort keys, one fresh `u128` per element.
pub fn sort_key_shuffle<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    slice.sort_by_cached_key(|_| rng.random::<u128>());
}

/// A sampler that returns every item exactly once per pass, reshuffling
/// between passes by sorting on random keys.
#[derive(Debug, Clone)]
pub struct SortKeyShuffleSampler<T, R = StdRng> {
    items: Vec<T>,
    pass: PassCache,
    rng: R,
}

impl<T> SortKeyShuffleSampler<T> {
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

impl<T> Default for SortKeyShuffleSampler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Rng> SortKeyShuffleSampler<T, R> {
    /// Create an empty sampler using a caller-supplied RNG.
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

    /// Draws left before the keys are regenerated.
    pub fn remaining_in_pass(&self) -> usize {
        self.pass.remaining(self.items.len())
    }

    /// Consume the sampler, returning its items in insertion order.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T, R: Rng> RandomSampler<T> for SortKeyShuffleSampler<T, R> {
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
            debug!(len = order.len(), "refreshing pass (sort-key)");
            sort_key_shuffle(order, rng);
        });
        Ok(&self.items[idx])
    }

    fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T, R: Rng> Extend<T> for SortKeyShuffleSampler<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
        self.pass.invalidate();
    }
}
