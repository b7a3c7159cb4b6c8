//! Gate evaluation counters.
//!
//! Counters are additive diagnostics, not part of the functional
//! contract: the gate's only functional output is the returned flags.

use std::sync::atomic::{AtomicU64, Ordering};

/// Internal atomic counters, shared across concurrent evaluations.
#[derive(Debug, Default)]
pub(crate) struct GateCounters {
    pub(crate) evaluations: AtomicU64,
    pub(crate) exception_hits: AtomicU64,
    pub(crate) forced_hits: AtomicU64,
    pub(crate) graph_rejections: AtomicU64,
    pub(crate) raycast_rejections: AtomicU64,
    pub(crate) oracle_fallbacks: AtomicU64,
}

impl GateCounters {
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> GateMetrics {
        GateMetrics {
            evaluations: self.evaluations.load(Ordering::Relaxed),
            exception_hits: self.exception_hits.load(Ordering::Relaxed),
            forced_hits: self.forced_hits.load(Ordering::Relaxed),
            graph_rejections: self.graph_rejections.load(Ordering::Relaxed),
            raycast_rejections: self.raycast_rejections.load(Ordering::Relaxed),
            oracle_fallbacks: self.oracle_fallbacks.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of the gate's cumulative counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateMetrics {
    /// Evaluations that entered the decision sequence (gate enabled,
    /// base flags not already out-of-range).
    pub evaluations: u64,
    /// Evaluations short-circuited by an exception rule.
    pub exception_hits: u64,
    /// Evaluations short-circuited by the forced-visibility radius.
    pub forced_hits: u64,
    /// Evaluations rejected by the room-graph check (missing index
    /// entry or non-member target room).
    pub graph_rejections: u64,
    /// Evaluations rejected by the raycast fallback tier.
    pub raycast_rejections: u64,
    /// Oracle failures mapped to the conservative outcome.
    pub oracle_fallbacks: u64,
}
