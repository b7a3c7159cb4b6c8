//! Strongly-typed identifiers for rooms, actors, and map generations.

use std::fmt;

/// Identifies a room within the current map.
///
/// Room IDs are assigned by the host's map generator and are stable
/// for the lifetime of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RoomId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies an actor (observer or target) within the host engine.
///
/// Used by the sense-link exception rule to match a specific target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActorId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Tag for a room archetype (shape template) in the host's room set.
///
/// Curated direction sets are keyed by kind; kinds without a curated
/// entry fall back to the table's default direction set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomKind(pub u16);

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for RoomKind {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// Identifies one published map generation.
///
/// Incremented by the host on every map (re)generation event. Each
/// visibility index is tagged with the generation it was built from,
/// so stale indices are detectable in diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapGenerationId(pub u64);

impl fmt::Display for MapGenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MapGenerationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
