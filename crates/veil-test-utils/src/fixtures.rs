//! Reusable scripted collaborators.

use indexmap::IndexMap;
use std::collections::HashSet;
use veil_core::{
    ConnectivityOracle, ForcedVisibilityOracle, ObserverState, Orientation, RaycastOracle, Room,
    RoomCoord, RoomId, RoomKind, RoomMap, TargetState,
};

/// Hand-built room registry implementing [`RoomMap`].
///
/// Rooms enumerate in insertion order, so builds over the same fixture
/// are deterministic. Multi-cell rooms are modelled by registering
/// extra cells against an existing room with [`add_cell`](Self::add_cell).
#[derive(Clone, Debug, Default)]
pub struct GridMap {
    rooms: Vec<Room>,
    cells: IndexMap<RoomCoord, usize>,
}

impl GridMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room anchored at `anchor`. IDs are assigned
    /// sequentially. Returns the new room's ID.
    pub fn add_room(&mut self, kind: RoomKind, orientation: Orientation, anchor: RoomCoord) -> RoomId {
        let id = RoomId(self.rooms.len() as u64);
        self.rooms.push(Room {
            kind,
            orientation,
            anchor,
            id,
        });
        self.cells.insert(anchor, self.rooms.len() - 1);
        id
    }

    /// Register an extra occupied cell for an existing room, for
    /// multi-cell room layouts. The cell resolves to that room (and
    /// hence its anchor) via [`RoomMap::room_at`].
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by [`add_room`](Self::add_room).
    pub fn add_cell(&mut self, id: RoomId, cell: RoomCoord) {
        let idx = self
            .rooms
            .iter()
            .position(|r| r.id == id)
            .expect("add_cell: unknown room id");
        self.cells.insert(cell, idx);
    }

    /// Register a second room sharing an existing anchor coordinate,
    /// for exercising the builder's duplicate-anchor rejection.
    pub fn add_duplicate_anchor(
        &mut self,
        kind: RoomKind,
        orientation: Orientation,
        anchor: RoomCoord,
    ) {
        let id = RoomId(self.rooms.len() as u64);
        self.rooms.push(Room {
            kind,
            orientation,
            anchor,
            id,
        });
    }

    /// Number of registered rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the map has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl RoomMap for GridMap {
    fn rooms(&self) -> Vec<Room> {
        self.rooms.clone()
    }

    fn room_at(&self, coord: RoomCoord) -> Option<Room> {
        self.cells.get(&coord).map(|&idx| self.rooms[idx])
    }
}

/// Connectivity oracle backed by an explicit open-passage set.
///
/// Passages are closed unless scripted open; [`connect`](Self::connect)
/// opens both directions at once.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDoors {
    open: HashSet<(RoomCoord, RoomCoord)>,
}

impl ScriptedDoors {
    /// All passages closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the passage between `a` and `b` (both directions).
    pub fn connect(&mut self, a: RoomCoord, b: RoomCoord) {
        self.open.insert((a, b));
        self.open.insert((b, a));
    }

    /// Close the passage between `a` and `b` (both directions).
    pub fn disconnect(&mut self, a: RoomCoord, b: RoomCoord) {
        self.open.remove(&(a, b));
        self.open.remove(&(b, a));
    }
}

impl ConnectivityOracle for ScriptedDoors {
    fn are_connected(&self, a: RoomCoord, b: RoomCoord) -> bool {
        self.open.contains(&(a, b))
    }
}

/// Forced-visibility oracle returning the same answer for every target.
///
/// `FixedForcedVisibility(None)` simulates an oracle failure.
#[derive(Clone, Copy, Debug)]
pub struct FixedForcedVisibility(pub Option<f32>);

impl ForcedVisibilityOracle for FixedForcedVisibility {
    fn forced_radius(&self, _target: &TargetState) -> Option<f32> {
        self.0
    }
}

/// Raycast oracle returning the same answer for every pair.
///
/// `ScriptedRaycast(None)` simulates an engine failure.
#[derive(Clone, Copy, Debug)]
pub struct ScriptedRaycast(pub Option<bool>);

impl RaycastOracle for ScriptedRaycast {
    fn line_of_sight(&self, _observer: &ObserverState, _target: &TargetState) -> Option<bool> {
        self.0
    }
}
