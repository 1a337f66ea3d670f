//! Sampler errors.
use thiserror::Error;

/// An error a sampler can produce.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SamplerError {
    /// `draw` was called while the sampler held no items.
    ///
    /// The caller has to populate the sampler first; samplers never retry or
    /// hide this.
    #[error("cannot draw from an empty collection")]
    EmptyCollection,
    /// A strategy name that did not match any known sampler.
    #[error("unknown sampling strategy `{0}` (expected one of: permutation, sort-key, direct)")]
    UnknownStrategy(String),
}

/// Result type returned by sampler operations.
pub type Result<T> = std::result::Result<T, SamplerError>;
