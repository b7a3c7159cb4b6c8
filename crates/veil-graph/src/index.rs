//! The frozen coordinate-to-reachability mapping queried at runtime.

use crate::data::VisibilityData;
use indexmap::IndexMap;
use veil_core::{MapGenerationId, RoomCoord};

/// Immutable mapping from room anchor to its reachability set.
///
/// Constructed once per map load by
/// [`VisibilityBuilder`](crate::VisibilityBuilder), published whole
/// through [`IndexHandle`](crate::IndexHandle), and read-only until
/// the next map load. This is the only structure consulted on the hot
/// query path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityIndex {
    rooms: IndexMap<RoomCoord, VisibilityData>,
    generation: MapGenerationId,
}

impl VisibilityIndex {
    pub(crate) fn new(
        rooms: IndexMap<RoomCoord, VisibilityData>,
        generation: MapGenerationId,
    ) -> Self {
        Self { rooms, generation }
    }

    /// An index with no rooms, for the interval before the first build.
    ///
    /// Every lookup misses, so queries degrade to the conservative
    /// out-of-range outcome rather than erroring.
    pub fn empty() -> Self {
        Self {
            rooms: IndexMap::new(),
            generation: MapGenerationId::default(),
        }
    }

    /// The reachability set for the room anchored at `coord`, if that
    /// coordinate anchors a room in this map generation.
    pub fn get(&self, coord: RoomCoord) -> Option<&VisibilityData> {
        self.rooms.get(&coord)
    }

    /// Number of rooms in the index.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the index contains no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// The map generation this index was built from.
    pub fn generation(&self) -> MapGenerationId {
        self.generation
    }

    /// Room anchors and their reachability sets, in build order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomCoord, &VisibilityData)> + '_ {
        self.rooms.iter().map(|(c, d)| (*c, d))
    }
}
