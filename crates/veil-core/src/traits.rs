//! Collaborator traits implemented by the host engine.
//!
//! These seams decouple the visibility engine from the host's map
//! generator, door model, and geometry: the builder and gate only ever
//! talk to trait objects. All traits are object-safe and `Send + Sync`
//! so the gate can be shared across the host's visibility workers.

use crate::actor::{ObserverState, TargetState};
use crate::coord::RoomCoord;
use crate::room::Room;

/// Enumerable room layout for the current map generation.
///
/// Refreshed by the host on each map-generation event; the builder
/// consumes it once per rebuild.
pub trait RoomMap: Send + Sync {
    /// Every room in the current map, in a deterministic order.
    ///
    /// Build output is a pure function of this enumeration, so the
    /// order must be stable for identical maps.
    fn rooms(&self) -> Vec<Room>;

    /// The room occupying `coord`, if any.
    ///
    /// For multi-cell rooms any occupied cell resolves to the room;
    /// the returned room's anchor may differ from `coord`. `None`
    /// means unexplored space and terminates a chain walk.
    fn room_at(&self, coord: RoomCoord) -> Option<Room>;
}

/// Answers whether an open passage currently exists between two
/// adjacent room cells.
pub trait ConnectivityOracle: Send + Sync {
    /// `true` iff an open passage exists between `a` and `b`.
    ///
    /// Implementations must answer `false` when the passage state
    /// cannot be determined; the builder treats that as a closed
    /// passage, which is the conservative outcome.
    fn are_connected(&self, a: RoomCoord, b: RoomCoord) -> bool;
}

/// Supplies a target's forced-visibility radius.
pub trait ForcedVisibilityOracle: Send + Sync {
    /// Minimum distance within which obstruction is ignored for this
    /// target, in world units.
    ///
    /// `None` means the radius could not be determined; the gate
    /// treats it as 0 (no override). Negative values are clamped to 0.
    fn forced_radius(&self, target: &TargetState) -> Option<f32>;
}

/// Exact geometric line-of-sight test, engine-dependent and expensive.
///
/// Only consulted as the deliberately costly tail of the decision
/// chain, after the O(1) graph check has passed, and only when the
/// fallback tier is enabled.
pub trait RaycastOracle: Send + Sync {
    /// `Some(true)` if the observer has geometric line of sight to the
    /// target, `Some(false)` if not.
    ///
    /// `None` means the engine could not answer; the gate treats it as
    /// "no line of sight", the conservative outcome.
    fn line_of_sight(&self, observer: &ObserverState, target: &TargetState) -> Option<bool>;
}
