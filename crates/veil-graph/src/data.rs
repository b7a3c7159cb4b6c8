//! Frozen per-room reachability sets.

use indexmap::IndexSet;
use veil_core::RoomCoord;

/// The set of other rooms' anchors reachable from one room.
///
/// Built once by [`VisibilityBuilder`](crate::VisibilityBuilder) and
/// never mutated afterwards. Membership is O(1); iteration order is
/// the deterministic insertion order of the build walk. Never contains
/// the owning room's own anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityData {
    anchors: IndexSet<RoomCoord>,
}

impl VisibilityData {
    pub(crate) fn new(anchors: IndexSet<RoomCoord>) -> Self {
        Self { anchors }
    }

    /// Whether `coord` is a reachable room anchor.
    pub fn contains(&self, coord: RoomCoord) -> bool {
        self.anchors.contains(&coord)
    }

    /// Number of reachable rooms.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Whether no room is reachable.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Reachable anchors in build order.
    pub fn iter(&self) -> impl Iterator<Item = RoomCoord> + '_ {
        self.anchors.iter().copied()
    }
}
