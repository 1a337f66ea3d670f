//! `redraw`: repeated random draws from a fixed collection.
//!
//! Three interchangeable strategies behind one trait, [`RandomSampler`],
//! trading randomness quality against cost:
//!
//! - `permutation`: [`PermutationShuffleSampler`], every item once per pass,
//!   passes regenerated with Fisher-Yates (O(n) per pass).
//! - `sort_key`: [`SortKeyShuffleSampler`], same pass contract, passes
//!   regenerated by sorting on random 128-bit keys (O(n log n) per pass).
//! - `direct`: [`DirectRandomSampler`], one uniform index per draw, repeats
//!   allowed.
//!
//! Supporting modules:
//! - `config`: pick and build a strategy by name.
//! - `tally`: frequency counting and uniformity statistics.
//!
//! Samplers own their RNG and take `&mut self` on every call; they are not
//! meant for shared concurrent use.

#![forbid(unsafe_code)]

pub mod config;
pub mod direct;
pub mod error;
pub mod permutation;
pub mod sampler;
pub mod sort_key;
pub mod tally;

pub use config::{SamplerConfig, SamplerKind};
pub use direct::DirectRandomSampler;
pub use error::{Result, SamplerError};
pub use permutation::{fisher_yates_shuffle, PermutationShuffleSampler};
pub use sampler::{PassPhase, RandomSampler};
pub use sort_key::{sort_key_shuffle, SortKeyShuffleSampler};
pub use tally::Tally;
