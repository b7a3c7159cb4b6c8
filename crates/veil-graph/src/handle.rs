//! Atomic publication of whole visibility indices.

use crate::index::VisibilityIndex;
use std::sync::{Arc, RwLock};
use veil_core::MapGenerationId;

/// Shared slot holding the currently published [`VisibilityIndex`].
///
/// Single writer (the map-load path calling [`publish`](Self::publish)),
/// many concurrent lock-free-in-spirit readers: [`load`](Self::load)
/// clones the `Arc` under a read lock held only for the clone, and the
/// returned index is immutable, so a reader always observes either the
/// complete prior index or the complete new one — never a mix. Readers
/// keep their `Arc` alive across an entire query, so a publish mid-query
/// cannot pull the structure out from under them.
///
/// Starts out holding [`VisibilityIndex::empty`], which sends every
/// query down the conservative out-of-range path until the first build
/// is published.
#[derive(Debug)]
pub struct IndexHandle {
    current: RwLock<Arc<VisibilityIndex>>,
}

// Compile-time assertion: IndexHandle must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<IndexHandle>();
};

impl IndexHandle {
    /// Create a handle holding the empty index.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(VisibilityIndex::empty())),
        }
    }

    /// Swap in a freshly built index, replacing the old one whole.
    ///
    /// Returns the displaced index, still alive for any readers that
    /// loaded it before the swap.
    pub fn publish(&self, index: VisibilityIndex) -> Arc<VisibilityIndex> {
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *slot, Arc::new(index))
    }

    /// The currently published index.
    pub fn load(&self) -> Arc<VisibilityIndex> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Generation tag of the currently published index.
    pub fn generation(&self) -> MapGenerationId {
        self.load().generation()
    }
}

impl Default for IndexHandle {
    fn default() -> Self {
        Self::new()
    }
}
