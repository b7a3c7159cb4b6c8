//! Offline chain-walk construction of the visibility index.

use crate::data::VisibilityData;
use crate::index::VisibilityIndex;
use crate::table::DirectionTable;
use indexmap::{IndexMap, IndexSet};
use veil_core::{BuildError, ConnectivityOracle, MapGenerationId, RoomCoord, RoomMap};

/// Builds a [`VisibilityIndex`] by straight-line chain propagation.
///
/// For every room, each search direction is walked cell by cell: the
/// chain continues while a room exists at the next cell and the
/// passage into it is open, recording each visited room's anchor. The
/// curated-known waiver skips the connectivity check for the first hop
/// only; every later hop is verified explicitly, so chains never skip
/// a closed passage.
///
/// The build is synchronous and runs once per map load, before any
/// index is published. Connectivity is sampled here and never again:
/// if the host opens or closes passages mid-round, reachability is
/// stale until the next rebuild.
#[derive(Clone, Debug, Default)]
pub struct VisibilityBuilder {
    table: DirectionTable,
}

impl VisibilityBuilder {
    /// Create a builder over the given direction configuration.
    pub fn new(table: DirectionTable) -> Self {
        Self { table }
    }

    /// Walk every room's chains and freeze the result.
    ///
    /// Output is a pure function of (room layout, kinds, orientations,
    /// connectivity graph): identical inputs yield bit-identical index
    /// contents. Fails fast with [`BuildError::DuplicateRoom`] if two
    /// rooms share an anchor coordinate; nothing is published on
    /// failure.
    pub fn build(
        &self,
        map: &dyn RoomMap,
        doors: &dyn ConnectivityOracle,
        generation: MapGenerationId,
    ) -> Result<VisibilityIndex, BuildError> {
        let rooms = map.rooms();

        let mut seen: IndexSet<RoomCoord> = IndexSet::with_capacity(rooms.len());
        for room in &rooms {
            if !seen.insert(room.anchor) {
                return Err(BuildError::DuplicateRoom { coord: room.anchor });
            }
        }

        let mut entries: IndexMap<RoomCoord, VisibilityData> =
            IndexMap::with_capacity(rooms.len());
        for room in &rooms {
            let (directions, is_known) = self.table.search_directions(room);
            let mut reachable: IndexSet<RoomCoord> = IndexSet::new();

            for d in directions {
                let mut prev = room.anchor;
                let mut cur = room.anchor + d;
                let mut first_hop = true;

                while let Some(next) = map.room_at(cur) {
                    if !(doors.are_connected(prev, cur) || (first_hop && is_known)) {
                        break;
                    }
                    // A chain may cross non-anchor cells of the room it
                    // started in; its own anchor is never recorded.
                    if next.anchor != room.anchor {
                        reachable.insert(next.anchor);
                    }
                    prev = cur;
                    cur = cur + d;
                    first_hop = false;
                }
            }

            entries.insert(room.anchor, VisibilityData::new(reachable));
        }

        Ok(VisibilityIndex::new(entries, generation))
    }
}
