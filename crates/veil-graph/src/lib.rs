//! Room reachability precomputation for the Veil visibility engine.
//!
//! This crate holds the offline tier: [`DirectionTable`] resolves the
//! straight-line propagation directions for each room,
//! [`VisibilityBuilder`] walks the chains those directions imply and
//! freezes one [`VisibilityData`] reachability set per room into a
//! [`VisibilityIndex`], and [`IndexHandle`] publishes whole indices
//! atomically at map-load boundaries.
//!
//! Build output is a pure function of (room layout, kinds,
//! orientations, connectivity graph): identical inputs always produce
//! bit-identical index contents.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod data;
pub mod handle;
pub mod index;
pub mod table;

pub use builder::VisibilityBuilder;
pub use data::VisibilityData;
pub use handle::IndexHandle;
pub use index::VisibilityIndex;
pub use table::DirectionTable;
