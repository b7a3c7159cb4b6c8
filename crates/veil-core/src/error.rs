//! Error types for the Veil visibility engine.
//!
//! All errors here are configuration errors surfaced during index
//! construction. Nothing in this module can occur at query time: the
//! gate maps collaborator failures to conservative outcomes instead
//! of propagating them.

use crate::coord::RoomCoord;
use crate::id::RoomKind;
use std::error::Error;
use std::fmt;

/// A raw component triple failed the unit axis invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionError {
    /// Squared magnitude of `(dx, dy, dz)` is not exactly 1.
    NotUnit {
        /// X component of the rejected triple.
        dx: i32,
        /// Y component of the rejected triple.
        dy: i32,
        /// Z component of the rejected triple.
        dz: i32,
    },
}

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotUnit { dx, dy, dz } => {
                write!(f, "direction [{dx}, {dy}, {dz}] is not a unit axis step")
            }
        }
    }
}

impl Error for DirectionError {}

/// Errors from direction-table construction or index building.
///
/// All variants fail fast before any index is published, so an invalid
/// configuration can never be observed by a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// A curated direction entry for a room kind is malformed.
    InvalidCuratedDirection {
        /// The room kind whose curated set contains the bad entry.
        kind: RoomKind,
        /// Position of the bad entry within that kind's set.
        index: usize,
        /// The underlying invariant violation.
        source: DirectionError,
    },
    /// An entry in the default direction set is malformed.
    InvalidDefaultDirection {
        /// Position of the bad entry within the default set.
        index: usize,
        /// The underlying invariant violation.
        source: DirectionError,
    },
    /// The same room kind appears twice in the curated configuration.
    DuplicateKind {
        /// The repeated kind.
        kind: RoomKind,
    },
    /// Two rooms in the map share an anchor coordinate.
    ///
    /// Allowing this would make index contents depend on enumeration
    /// order, so the build rejects the map instead.
    DuplicateRoom {
        /// The shared anchor coordinate.
        coord: RoomCoord,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCuratedDirection {
                kind,
                index,
                source,
            } => write!(
                f,
                "curated direction {index} for room kind {kind} is invalid: {source}"
            ),
            Self::InvalidDefaultDirection { index, source } => {
                write!(f, "default direction {index} is invalid: {source}")
            }
            Self::DuplicateKind { kind } => {
                write!(f, "room kind {kind} has more than one curated entry")
            }
            Self::DuplicateRoom { coord } => {
                write!(f, "two rooms share anchor coordinate {coord}")
            }
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCuratedDirection { source, .. }
            | Self::InvalidDefaultDirection { source, .. } => Some(source),
            _ => None,
        }
    }
}
