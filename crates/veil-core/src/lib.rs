//! Core types and collaborator traits for the Veil visibility engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid coordinate space, the room model, strongly-typed IDs,
//! actor states, visibility flags, error types, and the traits through
//! which the host engine supplies map, connectivity, and geometry
//! answers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod actor;
pub mod coord;
pub mod error;
pub mod flags;
pub mod id;
pub mod room;
pub mod traits;

pub use actor::{ObserverSpecial, ObserverState, TargetState};
pub use coord::{Direction, DirectionSet, Orientation, RoomCoord};
pub use error::{BuildError, DirectionError};
pub use flags::VisFlags;
pub use id::{ActorId, MapGenerationId, RoomId, RoomKind};
pub use room::Room;
pub use traits::{ConnectivityOracle, ForcedVisibilityOracle, RaycastOracle, RoomMap};
