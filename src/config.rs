//! Strategy selection.
//!
//! [`SamplerConfig`] picks one of the three strategies by name and builds it
//! behind the [`RandomSampler`] trait, so a driver can run the same workload
//! against each of them.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::direct::DirectRandomSampler;
use crate::error::SamplerError;
use crate::permutation::PermutationShuffleSampler;
use crate::sampler::RandomSampler;
use crate::sort_key::SortKeyShuffleSampler;

/// Which sampling strategy to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SamplerKind {
    /// Fisher-Yates passes ([`PermutationShuffleSampler`]).
    Permutation,
    /// Random-key sort passes ([`SortKeyShuffleSampler`]).
    SortKey,
    /// Independent uniform draws ([`DirectRandomSampler`]).
    Direct,
}

impl SamplerKind {
    pub const ALL: [SamplerKind; 3] = [Self::Permutation, Self::SortKey, Self::Direct];

    /// Whether this strategy guarantees each item once per pass.
    pub fn caches_passes(self) -> bool {
        !matches!(self, Self::Direct)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Permutation => "permutation",
            Self::SortKey => "sort-key",
            Self::Direct => "direct",
        }
    }
}

impl fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SamplerKind {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permutation" | "fisher-yates" | "fisheryates" => Ok(Self::Permutation),
            "sort-key" | "sortkey" | "sort_key" => Ok(Self::SortKey),
            "direct" => Ok(Self::Direct),
            _ => Err(SamplerError::UnknownStrategy(s.to_string())),
        }
    }
}

/// How to build a sampler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    pub kind: SamplerKind,
    /// Seed for a deterministic [`StdRng`]; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl SamplerConfig {
    pub fn new(kind: SamplerKind) -> Self {
        Self { kind, seed: None }
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        }
    }

    /// Build an empty sampler of the configured kind.
    pub fn build<T: 'static>(&self) -> Box<dyn RandomSampler<T>> {
        debug!(kind = %self.kind, seed = ?self.seed, "building sampler");
        let rng = self.rng();
        match self.kind {
            SamplerKind::Permutation => Box::new(PermutationShuffleSampler::<T, _>::with_rng(rng)),
            SamplerKind::SortKey => Box::new(SortKeyShuffleSampler::<T, _>::with_rng(rng)),
            SamplerKind::Direct => Box::new(DirectRandomSampler::<T, _>::with_rng(rng)),
        }
    }

    /// Build a sampler of the configured kind holding `items`.
    pub fn build_with_items<T: 'static, I: IntoIterator<Item = T>>(
        &self,
        items: I,
    ) -> Box<dyn RandomSampler<T>> {
        let mut sampler = self.build();
        for item in items {
            sampler.add_item(item);
        }
        sampler
    }
}

impl From<SamplerKind> for SamplerConfig {
    fn from(kind: SamplerKind) -> Self {
        Self::new(kind)
    }
}
