//! The read-only room model supplied by the host's map generator.

use crate::coord::{Orientation, RoomCoord};
use crate::id::{RoomId, RoomKind};

/// One room in the facility map, immutable for the round.
///
/// A room may span several grid cells; `anchor` is the single cell
/// that identifies it in the visibility index.
/// [`RoomMap::room_at`](crate::traits::RoomMap::room_at) resolves any
/// occupied cell back to its room, whose anchor may differ from the
/// queried cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    /// Archetype tag; selects the curated direction set, if any.
    pub kind: RoomKind,
    /// World placement rotation applied to canonical directions.
    pub orientation: Orientation,
    /// The grid cell identifying this room.
    pub anchor: RoomCoord,
    /// Host-assigned identity, stable for the round.
    pub id: RoomId,
}
