//! Direct sampler: one uniform index per draw, no pass cache.
//!
//! Cheapest per call, but draws are independent, so the same item can come
//! out twice in a row (probability about `1/n`).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SamplerError};
use crate::sampler::RandomSampler;

/// Uniform sampling with replacement over the current items.
#[derive(Debug, Clone)]
pub struct DirectRandomSampler<T, R = StdRng> {
    items: Vec<T>,
    rng: R,
}

impl<T> DirectRandomSampler<T> {
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

impl<T> Default for DirectRandomSampler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Rng> DirectRandomSampler<T, R> {
    /// Create an empty sampler using a caller-supplied RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            items: Vec::new(),
            rng,
        }
    }

    /// Create a sampler holding `items`, using a caller-supplied RNG.
    pub fn from_items_with_rng<I: IntoIterator<Item = T>>(items: I, rng: R) -> Self {
        Self {
            items: items.into_iter().collect(),
            rng,
        }
    }

    /// Consume the sampler, returning its items in insertion order.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T, R: Rng> RandomSampler<T> for DirectRandomSampler<T, R> {
    fn add_item(&mut self, item: T) {
        self.items.push(item);
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn draw(&mut self) -> Result<&T> {
        if self.items.is_empty() {
            return Err(SamplerError::EmptyCollection);
        }
        let idx = self.rng.random_range(0..self.items.len());
        Ok(&self.items[idx])
    }

    fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T, R: Rng> Extend<T> for DirectRandomSampler<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
