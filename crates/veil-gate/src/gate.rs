//! The layered runtime decision sequence.

use crate::config::GateConfig;
use crate::metrics::{GateCounters, GateMetrics};
use crate::rules::ExceptionRule;
use std::sync::Arc;
use veil_core::{ForcedVisibilityOracle, ObserverState, RaycastOracle, TargetState, VisFlags};
use veil_graph::IndexHandle;

/// The runtime visibility gate.
///
/// A pure, synchronous post-processor over the host's visibility
/// flags: one call per observer×target pair per visibility refresh.
/// Holds the exception rule list, the shared index handle, and the two
/// override oracles; evaluation takes `&self` and is safe to invoke
/// concurrently from the host's visibility workers.
///
/// Decision sequence, short-circuiting on the first match:
///
/// 1. Gate disabled, or base flags already out-of-range → unchanged.
/// 2. First matching exception rule → unchanged.
/// 3. Squared distance below the target's forced-visibility radius² →
///    unchanged.
/// 4. Observer's room missing from the index, or target's room not in
///    its reachability set → out-of-range.
/// 5. Raycast tier (if enabled): no line of sight → out-of-range;
///    otherwise unchanged.
///
/// Oracle failures never propagate: an unanswerable forced radius
/// counts as 0, an unanswerable raycast counts as "no line of sight".
/// A wrong decision lasts one refresh; the next tick re-derives it.
pub struct VisibilityGate {
    config: GateConfig,
    rules: Vec<Box<dyn ExceptionRule>>,
    index: Arc<IndexHandle>,
    forced: Box<dyn ForcedVisibilityOracle>,
    raycast: Box<dyn RaycastOracle>,
    counters: GateCounters,
}

// Compile-time assertion: VisibilityGate must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<VisibilityGate>();
};

impl VisibilityGate {
    /// Assemble a gate from its configuration and collaborators.
    ///
    /// `rules` are evaluated in the given order; pass
    /// [`standard_rules`](crate::standard_rules) for the stock set.
    pub fn new(
        config: GateConfig,
        rules: Vec<Box<dyn ExceptionRule>>,
        index: Arc<IndexHandle>,
        forced: Box<dyn ForcedVisibilityOracle>,
        raycast: Box<dyn RaycastOracle>,
    ) -> Self {
        Self {
            config,
            rules,
            index,
            forced,
            raycast,
            counters: GateCounters::default(),
        }
    }

    /// Run the decision sequence for one observer×target pair.
    ///
    /// `base` is the host's own visibility result, including its coarse
    /// out-of-range bit; `distance_sq` is the squared straight-line
    /// distance between the two actors in world units. The returned
    /// flags are `base` either unchanged or with the out-of-range bit
    /// added — no other bit is ever touched.
    pub fn evaluate(
        &self,
        base: VisFlags,
        observer: &ObserverState,
        target: &TargetState,
        distance_sq: f32,
    ) -> VisFlags {
        if !self.config.enabled || base.is_out_of_range() {
            return base;
        }
        GateCounters::bump(&self.counters.evaluations);

        if self.rules.iter().any(|r| r.applies(observer, target)) {
            GateCounters::bump(&self.counters.exception_hits);
            return base;
        }

        let radius = match self.forced.forced_radius(target) {
            Some(r) => r.max(0.0),
            None => {
                GateCounters::bump(&self.counters.oracle_fallbacks);
                0.0
            }
        };
        if distance_sq < radius * radius {
            GateCounters::bump(&self.counters.forced_hits);
            return base;
        }

        // The Arc stays alive for the whole evaluation, so a rebuild
        // publishing mid-query cannot mix generations.
        let index = self.index.load();
        let reachable = index
            .get(observer.room)
            .is_some_and(|data| data.contains(target.room));
        if !reachable {
            GateCounters::bump(&self.counters.graph_rejections);
            return base.with_out_of_range();
        }

        if self.config.raycast_fallback {
            let sight = match self.raycast.line_of_sight(observer, target) {
                Some(v) => v,
                None => {
                    GateCounters::bump(&self.counters.oracle_fallbacks);
                    false
                }
            };
            if !sight {
                GateCounters::bump(&self.counters.raycast_rejections);
                return base.with_out_of_range();
            }
        }

        base
    }

    /// The gate's configuration.
    pub fn config(&self) -> GateConfig {
        self.config
    }

    /// Snapshot of the cumulative evaluation counters.
    pub fn metrics(&self) -> GateMetrics {
        self.counters.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::standard_rules;
    use proptest::prelude::*;
    use veil_core::{
        ActorId, MapGenerationId, ObserverSpecial, Orientation, RoomCoord, RoomKind,
    };
    use veil_graph::VisibilityBuilder;
    use veil_test_utils::{FixedForcedVisibility, GridMap, ScriptedDoors, ScriptedRaycast};

    fn c(x: i32) -> RoomCoord {
        RoomCoord::new(x, 0, 0)
    }

    /// Two rooms at x=0,1 with the passage scripted open or closed.
    fn handle_for_pair(connected: bool) -> Arc<IndexHandle> {
        let mut map = GridMap::new();
        map.add_room(RoomKind(0), Orientation::Deg0, c(0));
        map.add_room(RoomKind(0), Orientation::Deg0, c(1));
        let mut doors = ScriptedDoors::new();
        if connected {
            doors.connect(c(0), c(1));
        }
        let index = VisibilityBuilder::default()
            .build(&map, &doors, MapGenerationId(1))
            .unwrap();
        let handle = Arc::new(IndexHandle::new());
        handle.publish(index);
        handle
    }

    fn gate(
        config: GateConfig,
        handle: Arc<IndexHandle>,
        forced: FixedForcedVisibility,
        raycast: ScriptedRaycast,
    ) -> VisibilityGate {
        VisibilityGate::new(
            config,
            standard_rules(),
            handle,
            Box::new(forced),
            Box::new(raycast),
        )
    }

    fn observer_at(x: i32, special: ObserverSpecial) -> ObserverState {
        ObserverState {
            actor: ActorId(1),
            position: [x as f32 * 10.0, 0.0, 0.0],
            room: c(x),
            special,
        }
    }

    fn target_at(x: i32, emitting_light: bool) -> TargetState {
        TargetState {
            actor: ActorId(2),
            position: [x as f32 * 10.0, 0.0, 0.0],
            room: c(x),
            emitting_light,
        }
    }

    // ── Short-circuit tiers ─────────────────────────────────────

    #[test]
    fn disabled_gate_is_passthrough() {
        let g = gate(
            GateConfig {
                enabled: false,
                raycast_fallback: false,
            },
            handle_for_pair(false),
            FixedForcedVisibility(Some(0.0)),
            ScriptedRaycast(Some(false)),
        );
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, false),
            100.0,
        );
        assert_eq!(out, VisFlags::NONE);
        assert_eq!(g.metrics().evaluations, 0);
    }

    #[test]
    fn base_out_of_range_returns_immediately() {
        let g = gate(
            GateConfig::default(),
            handle_for_pair(true),
            FixedForcedVisibility(Some(0.0)),
            ScriptedRaycast(Some(true)),
        );
        let base = VisFlags::NONE.with_out_of_range();
        let out = g.evaluate(
            base,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, false),
            100.0,
        );
        assert_eq!(out, base);
        assert_eq!(g.metrics().evaluations, 0);
    }

    #[test]
    fn exception_rules_short_circuit_before_index_lookup() {
        // Graph would reject this pair; each exception bypasses it.
        let specials = [
            ObserverSpecial::Noclip,
            ObserverSpecial::SenseLink { target: ActorId(2) },
            ObserverSpecial::UnboundedRole,
        ];
        for special in specials {
            let g = gate(
                GateConfig::default(),
                handle_for_pair(false),
                FixedForcedVisibility(Some(0.0)),
                ScriptedRaycast(Some(false)),
            );
            let out = g.evaluate(
                VisFlags::NONE,
                &observer_at(0, special),
                &target_at(1, false),
                100.0,
            );
            assert_eq!(out, VisFlags::NONE, "{special:?} should bypass the gate");
            assert_eq!(g.metrics().exception_hits, 1);
            assert_eq!(g.metrics().graph_rejections, 0);
        }
    }

    #[test]
    fn lit_target_bypasses_obstruction() {
        let g = gate(
            GateConfig::default(),
            handle_for_pair(false),
            FixedForcedVisibility(Some(0.0)),
            ScriptedRaycast(Some(false)),
        );
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, true),
            100.0,
        );
        assert_eq!(out, VisFlags::NONE);
    }

    #[test]
    fn forced_radius_overrides_graph() {
        // No graph path at all; distance within the forced radius.
        let g = gate(
            GateConfig::default(),
            handle_for_pair(false),
            FixedForcedVisibility(Some(2.0)),
            ScriptedRaycast(Some(false)),
        );
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, false),
            3.9, // < 2²
        );
        assert_eq!(out, VisFlags::NONE);
        assert_eq!(g.metrics().forced_hits, 1);

        // At or beyond the radius the override no longer applies.
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, false),
            4.0,
        );
        assert!(out.is_out_of_range());
    }

    #[test]
    fn forced_oracle_failure_means_no_override() {
        let g = gate(
            GateConfig::default(),
            handle_for_pair(false),
            FixedForcedVisibility(None),
            ScriptedRaycast(Some(true)),
        );
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, false),
            0.5,
        );
        assert!(out.is_out_of_range());
        assert_eq!(g.metrics().oracle_fallbacks, 1);
    }

    #[test]
    fn negative_forced_radius_is_clamped() {
        let g = gate(
            GateConfig::default(),
            handle_for_pair(false),
            FixedForcedVisibility(Some(-5.0)),
            ScriptedRaycast(Some(true)),
        );
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, false),
            0.5,
        );
        assert!(out.is_out_of_range());
    }

    // ── Graph tier ──────────────────────────────────────────────

    #[test]
    fn connected_rooms_pass_the_graph_check() {
        let g = gate(
            GateConfig::default(),
            handle_for_pair(true),
            FixedForcedVisibility(Some(0.0)),
            ScriptedRaycast(Some(false)),
        );
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, false),
            100.0,
        );
        assert_eq!(out, VisFlags::NONE);
    }

    #[test]
    fn unreachable_room_sets_out_of_range() {
        let g = gate(
            GateConfig::default(),
            handle_for_pair(false),
            FixedForcedVisibility(Some(0.0)),
            ScriptedRaycast(Some(true)),
        );
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, false),
            100.0,
        );
        assert!(out.is_out_of_range());
        assert_eq!(g.metrics().graph_rejections, 1);
    }

    #[test]
    fn observer_outside_index_is_conservatively_unreachable() {
        let g = gate(
            GateConfig::default(),
            handle_for_pair(true),
            FixedForcedVisibility(Some(0.0)),
            ScriptedRaycast(Some(true)),
        );
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(99, ObserverSpecial::None),
            &target_at(1, false),
            100.0,
        );
        assert!(out.is_out_of_range());
    }

    #[test]
    fn same_room_is_not_self_reachable_by_graph() {
        // A room's own anchor is never in its reachability set; the
        // host's base flags (or forced visibility) cover same-room
        // pairs, not the graph tier.
        let g = gate(
            GateConfig::default(),
            handle_for_pair(true),
            FixedForcedVisibility(Some(0.0)),
            ScriptedRaycast(Some(true)),
        );
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(0, ObserverSpecial::None),
            &target_at(0, false),
            1.0,
        );
        assert!(out.is_out_of_range());
    }

    // ── Raycast tier ────────────────────────────────────────────

    #[test]
    fn raycast_rejection_overrides_graph_pass() {
        let g = gate(
            GateConfig {
                enabled: true,
                raycast_fallback: true,
            },
            handle_for_pair(true),
            FixedForcedVisibility(Some(0.0)),
            ScriptedRaycast(Some(false)),
        );
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, false),
            100.0,
        );
        assert!(out.is_out_of_range());
        assert_eq!(g.metrics().raycast_rejections, 1);
    }

    #[test]
    fn raycast_failure_is_conservative() {
        let g = gate(
            GateConfig {
                enabled: true,
                raycast_fallback: true,
            },
            handle_for_pair(true),
            FixedForcedVisibility(Some(0.0)),
            ScriptedRaycast(None),
        );
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, false),
            100.0,
        );
        assert!(out.is_out_of_range());
        assert_eq!(g.metrics().oracle_fallbacks, 1);
    }

    #[test]
    fn disabled_fallback_never_consults_raycast() {
        // ScriptedRaycast(Some(false)) would reject; with the tier off
        // the graph pass is final.
        let g = gate(
            GateConfig::default(),
            handle_for_pair(true),
            FixedForcedVisibility(Some(0.0)),
            ScriptedRaycast(Some(false)),
        );
        let out = g.evaluate(
            VisFlags::NONE,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, false),
            100.0,
        );
        assert_eq!(out, VisFlags::NONE);
        assert_eq!(g.metrics().raycast_rejections, 0);
    }

    // ── Flag hygiene ────────────────────────────────────────────

    #[test]
    fn host_bits_pass_through_unchanged() {
        let g = gate(
            GateConfig::default(),
            handle_for_pair(false),
            FixedForcedVisibility(Some(0.0)),
            ScriptedRaycast(Some(true)),
        );
        let base = VisFlags::from_bits(0b0110_0000);
        let out = g.evaluate(
            base,
            &observer_at(0, ObserverSpecial::None),
            &target_at(1, false),
            100.0,
        );
        assert!(out.contains(base));
        assert!(out.is_out_of_range());
        assert_eq!(out.bits(), 0b0110_0001);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_special() -> impl Strategy<Value = ObserverSpecial> {
        prop_oneof![
            Just(ObserverSpecial::None),
            Just(ObserverSpecial::Noclip),
            (0u64..4).prop_map(|id| ObserverSpecial::SenseLink { target: ActorId(id) }),
            Just(ObserverSpecial::UnboundedRole),
        ]
    }

    proptest! {
        #[test]
        fn gate_only_ever_adds_the_out_of_range_bit(
            bits in 0u8..=255,
            connected: bool,
            distance_sq in 0.0f32..10_000.0,
            special in arb_special(),
            emitting_light: bool,
            raycast_fallback: bool,
            sight in prop_oneof![Just(None), Just(Some(false)), Just(Some(true))],
        ) {
            let g = gate(
                GateConfig {
                    enabled: true,
                    raycast_fallback,
                },
                handle_for_pair(connected),
                FixedForcedVisibility(Some(2.0)),
                ScriptedRaycast(sight),
            );
            let base = VisFlags::from_bits(bits);
            let out = g.evaluate(
                base,
                &observer_at(0, special),
                &target_at(1, emitting_light),
                distance_sq,
            );
            // Host bits always pass through; the only change the gate
            // may make is adding the out-of-range bit.
            prop_assert!(out.contains(base));
            prop_assert!(out == base || out == base.with_out_of_range());
            if base.is_out_of_range() {
                prop_assert_eq!(out, base);
            }
        }
    }
}
