//! The sampler interface and the pass bookkeeping shared by caching samplers.
//!
//! A caching sampler hands out items in "passes": it keeps a permutation of
//! the item indices and walks it with a cursor, so within one pass every item
//! comes out exactly once. When the cursor reaches the end, the permutation is
//! regenerated by the sampler's strategy and a new pass begins.
//!
//! The bookkeeping lives in [`PassCache`], an explicit state machine:
//!
//! ```text
//! Uninitialized --first draw--> InPass --last draw of pass--> Exhausted
//!                                  ^                              |
//!                                  +-----next draw (refresh)------+
//! ```
//!
//! Any mutation of the item sequence sends every state back to
//! `Uninitialized`.

use crate::error::Result;

/// Repeatedly draw items from an owned, bounded collection.
///
/// All operations take `&mut self`; a sampler is not meant to be shared
/// between threads without external synchronisation.
pub trait RandomSampler<T> {
    /// Append an item. Invalidates any cached pass.
    fn add_item(&mut self, item: T);

    /// Remove every item. Invalidates any cached pass.
    fn clear(&mut self);

    /// Draw the next item.
    ///
    /// Returns [`crate::SamplerError::EmptyCollection`] if there are no items.
    fn draw(&mut self) -> Result<&T>;

    /// The items currently held, in insertion order.
    fn items(&self) -> &[T];

    /// Number of items held.
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Whether the sampler holds no items.
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Observable phase of a caching sampler's pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassPhase {
    /// No permutation yet, or the items changed since the last draw.
    Uninitialized,
    /// A pass is in progress and has items left.
    InPass,
    /// The pass is complete; the next draw regenerates the permutation.
    Exhausted,
}

#[derive(Debug, Clone, Default)]
enum PassState {
    #[default]
    Uninitialized,
    InPass {
        order: Vec<usize>,
        cursor: usize,
    },
    Exhausted {
        order: Vec<usize>,
    },
}

/// Permutation and cursor of a caching sampler.
#[derive(Debug, Clone, Default)]
pub(crate) struct PassCache {
    state: PassState,
}

impl PassCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Drop the cached permutation.
    pub(crate) fn invalidate(&mut self) {
        if !matches!(self.state, PassState::Uninitialized) {
            tracing::trace!("invalidating cached pass");
        }
        self.state = PassState::Uninitialized;
    }

    pub(crate) fn phase(&self) -> PassPhase {
        match self.state {
            PassState::Uninitialized => PassPhase::Uninitialized,
            PassState::InPass { .. } => PassPhase::InPass,
            PassState::Exhausted { .. } => PassPhase::Exhausted,
        }
    }

    /// Draws left before the next refresh.
    ///
    /// An uninitialised or exhausted cache reports `len`: the next draw starts
    /// a full pass.
    pub(crate) fn remaining(&self, len: usize) -> usize {
        match &self.state {
            PassState::InPass { order, cursor } => order.len() - cursor,
            PassState::Uninitialized | PassState::Exhausted { .. } => len,
        }
    }

    /// Advance the cursor and return the next item index.
    ///
    /// The first pass uses the identity order. Later passes are produced by
    /// `refresh`, which must permute the slice in place.
    ///
    /// `len` must be non-zero and equal to the item count the cache was built
    /// for; callers check emptiness and invalidate on every mutation.
    pub(crate) fn next_index<F>(&mut self, len: usize, refresh: F) -> usize
    where
        F: FnOnce(&mut [usize]),
    {
        debug_assert!(len > 0, "next_index on an empty collection");

        let (order, cursor) = match std::mem::take(&mut self.state) {
            PassState::Uninitialized => ((0..len).collect::<Vec<_>>(), 0),
            PassState::InPass { order, cursor } => (order, cursor),
            PassState::Exhausted { mut order } => {
                refresh(&mut order);
                (order, 0)
            }
        };
        debug_assert_eq!(order.len(), len, "stale pass cache");

        let idx = order[cursor];
        let cursor = cursor + 1;
        self.state = if cursor == order.len() {
            PassState::Exhausted { order }
        } else {
            PassState::InPass { order, cursor }
        };
        idx
    }
}
