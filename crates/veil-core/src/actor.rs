//! Observer and target state passed into the runtime gate.
//!
//! Ability and role exceptions are modelled as a small closed set of
//! tagged variants carrying only the fields their predicates need,
//! rather than a type-inspection chain over host objects. Adding an
//! exception means adding a variant here and a rule in `veil-gate`;
//! the query core never changes.

use crate::coord::RoomCoord;
use crate::id::ActorId;

/// Special observer modes that bypass or alter gating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObserverSpecial {
    /// No special mode; the full decision sequence applies.
    #[default]
    None,
    /// Unrestricted free-movement mode (no-clip); sees everything.
    Noclip,
    /// An active sense ability granting unconditional perception of
    /// one specific target.
    SenseLink {
        /// The actor this link is bound to.
        target: ActorId,
    },
    /// A role that maintains an independent visibility model and must
    /// not be gated here.
    UnboundedRole,
}

/// The observing actor's state for one gate evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverState {
    /// Host identity of the observer.
    pub actor: ActorId,
    /// Continuous world position, consumed only by the raycast tier.
    pub position: [f32; 3],
    /// The room cell the observer currently occupies.
    pub room: RoomCoord,
    /// Active special mode, if any.
    pub special: ObserverSpecial,
}

/// The observed actor's state for one gate evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetState {
    /// Host identity of the target.
    pub actor: ActorId,
    /// Continuous world position, consumed only by the raycast tier.
    pub position: [f32; 3],
    /// The room cell the target currently occupies.
    pub room: RoomCoord,
    /// Whether the target is currently emitting light. Light bypasses
    /// obstruction gating by design.
    pub emitting_light: bool,
}
