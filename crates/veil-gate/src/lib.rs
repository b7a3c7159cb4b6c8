//! Runtime visibility decision gate for the Veil visibility engine.
//!
//! [`VisibilityGate`] is a pluggable post-processor invoked
//! synchronously after the host's own visibility computation. It takes
//! the host's base flags plus observer/target state and layers, in
//! order: exception rules, the forced-visibility distance override,
//! the precomputed room-graph check, and an optional exact raycast
//! fallback. The only output is the returned flag set; the only bit
//! the gate ever adds is out-of-range.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod gate;
pub mod metrics;
pub mod rules;

pub use config::GateConfig;
pub use gate::VisibilityGate;
pub use metrics::GateMetrics;
pub use rules::{
    standard_rules, ExceptionRule, LightEmissionRule, NoclipRule, SenseLinkRule,
    UnboundedRoleRule,
};
