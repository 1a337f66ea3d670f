//! Draw frequency counting.
//!
//! Used by the measurement driver (benches, demos) and by tests to judge how
//! far a sampler's output is from uniform.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts how often each key was drawn.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    counts: HashMap<K, usize>,
    total: usize,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`.
    pub fn record(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `key` (0 if never recorded).
    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Total number of recorded draws.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }

    /// Expected count per category if draws were uniform over `categories`.
    pub fn expected_uniform(&self, categories: usize) -> f64 {
        if categories == 0 {
            return 0.0;
        }
        self.total as f64 / categories as f64
    }

    /// Pearson chi-squared statistic against a uniform distribution over
    /// `categories` outcomes. Categories never recorded count as zero.
    ///
    /// Degrees of freedom are `categories - 1`.
    pub fn chi_squared(&self, categories: usize) -> f64 {
        let expected = self.expected_uniform(categories);
        if expected == 0.0 {
            return 0.0;
        }
        let observed: f64 = self
            .counts
            .values()
            .map(|&c| {
                let diff = c as f64 - expected;
                (diff * diff) / expected
            })
            .sum();
        // Each unseen category contributes (0 - e)^2 / e = e.
        let unseen = categories.saturating_sub(self.counts.len());
        observed + unseen as f64 * expected
    }

    /// Largest `|count - expected| / expected` over `categories` outcomes.
    pub fn max_relative_deviation(&self, categories: usize) -> f64 {
        let expected = self.expected_uniform(categories);
        if expected == 0.0 {
            return 0.0;
        }
        let worst_seen = self
            .counts
            .values()
            .map(|&c| (c as f64 - expected).abs() / expected)
            .fold(0.0_f64, f64::max);
        if self.counts.len() < categories {
            // An unseen category is off by exactly 100%.
            worst_seen.max(1.0)
        } else {
            worst_seen
        }
    }
}

impl<K: Eq + Hash> Extend<K> for Tally<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for k in iter {
            self.record(k);
        }
    }
}

impl<K: Eq + Hash> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut t = Self::new();
        t.extend(iter);
        t
    }
}
