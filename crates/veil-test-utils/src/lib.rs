//! Scripted collaborator fixtures for Veil tests and benchmarks.
//!
//! Deterministic, in-memory stand-ins for the host engine's map, door
//! model, and geometry oracles:
//!
//! - [`GridMap`] — hand-built room registry implementing `RoomMap`.
//! - [`ScriptedDoors`] — explicit open-passage set.
//! - [`FixedForcedVisibility`] — constant (or failing) radius oracle.
//! - [`ScriptedRaycast`] — constant (or failing) line-of-sight oracle.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{FixedForcedVisibility, GridMap, ScriptedDoors, ScriptedRaycast};
