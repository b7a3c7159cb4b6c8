//! Veil: two-tier room-graph visibility gating for multi-room
//! facility maps.
//!
//! Veil cheaply approximates "can't see through walls" without running
//! a geometric line-of-sight test on every observer×target pair every
//! tick. An offline builder precomputes, per room, the set of other
//! rooms reachable by straight-line propagation through open
//! connections; a runtime gate combines that frozen reachability with
//! forced-visibility distance overrides, ability exceptions, and an
//! optional exact raycast fallback into a single flag decision.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Veil sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use veil::prelude::*;
//! use veil_test_utils::{FixedForcedVisibility, GridMap, ScriptedDoors, ScriptedRaycast};
//!
//! // Two adjacent rooms with an open passage.
//! let mut map = GridMap::new();
//! map.add_room(RoomKind(0), Orientation::Deg0, RoomCoord::new(0, 0, 0));
//! map.add_room(RoomKind(0), Orientation::Deg0, RoomCoord::new(1, 0, 0));
//! let mut doors = ScriptedDoors::new();
//! doors.connect(RoomCoord::new(0, 0, 0), RoomCoord::new(1, 0, 0));
//!
//! // Offline tier: build and publish the reachability index.
//! let index = VisibilityBuilder::new(DirectionTable::default())
//!     .build(&map, &doors, MapGenerationId(1))
//!     .unwrap();
//! let handle = Arc::new(IndexHandle::new());
//! handle.publish(index);
//!
//! // Runtime tier: gate one observer×target pair.
//! let gate = VisibilityGate::new(
//!     GateConfig::default(),
//!     standard_rules(),
//!     handle,
//!     Box::new(FixedForcedVisibility(Some(0.0))),
//!     Box::new(ScriptedRaycast(Some(true))),
//! );
//! let observer = ObserverState {
//!     actor: ActorId(1),
//!     position: [0.0; 3],
//!     room: RoomCoord::new(0, 0, 0),
//!     special: ObserverSpecial::None,
//! };
//! let target = TargetState {
//!     actor: ActorId(2),
//!     position: [10.0, 0.0, 0.0],
//!     room: RoomCoord::new(1, 0, 0),
//!     emitting_light: false,
//! };
//! let flags = gate.evaluate(VisFlags::NONE, &observer, &target, 100.0);
//! assert!(!flags.is_out_of_range());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `veil-core` | Coordinates, rooms, IDs, flags, collaborator traits |
//! | [`graph`] | `veil-graph` | Direction table, builder, frozen index, publish handle |
//! | [`gate`] | `veil-gate` | Exception rules, gate config, runtime decision gate |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and collaborator traits (`veil-core`).
///
/// Contains the grid coordinate space, room model, actor states,
/// visibility flags, and the [`types::RoomMap`],
/// [`types::ConnectivityOracle`], [`types::ForcedVisibilityOracle`],
/// and [`types::RaycastOracle`] seams to the host engine.
pub use veil_core as types;

/// Reachability precomputation (`veil-graph`).
///
/// [`graph::DirectionTable`], [`graph::VisibilityBuilder`],
/// [`graph::VisibilityIndex`], and the atomically swapped
/// [`graph::IndexHandle`].
pub use veil_graph as graph;

/// Runtime decision gate (`veil-gate`).
///
/// [`gate::VisibilityGate`], [`gate::GateConfig`], and the
/// [`gate::ExceptionRule`] list.
pub use veil_gate as gate;

/// Common imports for typical Veil usage.
///
/// ```rust
/// use veil::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use veil_core::{
        ActorId, Direction, DirectionSet, MapGenerationId, ObserverSpecial, ObserverState,
        Orientation, Room, RoomCoord, RoomId, RoomKind, TargetState, VisFlags,
    };

    // Collaborator traits
    pub use veil_core::{ConnectivityOracle, ForcedVisibilityOracle, RaycastOracle, RoomMap};

    // Errors
    pub use veil_core::{BuildError, DirectionError};

    // Offline tier
    pub use veil_graph::{
        DirectionTable, IndexHandle, VisibilityBuilder, VisibilityData, VisibilityIndex,
    };

    // Runtime tier
    pub use veil_gate::{standard_rules, ExceptionRule, GateConfig, GateMetrics, VisibilityGate};
}
