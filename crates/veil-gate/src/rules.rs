//! Exception rules that bypass the gate entirely.
//!
//! Rules are evaluated as a registered, ordered list before any index
//! lookup; the first match returns the base flags unchanged. Extending
//! the exception set means adding a rule (and, if needed, an
//! `ObserverSpecial` variant) — the gate core never changes.

use veil_core::{ObserverSpecial, ObserverState, TargetState};

/// A predicate over (observer, target) deciding whether gating is
/// bypassed for this pair.
pub trait ExceptionRule: Send + Sync {
    /// Rule name for diagnostics.
    fn name(&self) -> &str;

    /// Whether this pair bypasses the gate.
    fn applies(&self, observer: &ObserverState, target: &TargetState) -> bool;
}

/// Observers in unrestricted free-movement (no-clip) mode see everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoclipRule;

impl ExceptionRule for NoclipRule {
    fn name(&self) -> &str {
        "noclip"
    }

    fn applies(&self, observer: &ObserverState, _target: &TargetState) -> bool {
        observer.special == ObserverSpecial::Noclip
    }
}

/// Targets currently emitting light bypass obstruction by design.
#[derive(Clone, Copy, Debug, Default)]
pub struct LightEmissionRule;

impl ExceptionRule for LightEmissionRule {
    fn name(&self) -> &str {
        "light_emission"
    }

    fn applies(&self, _observer: &ObserverState, target: &TargetState) -> bool {
        target.emitting_light
    }
}

/// An active sense link grants unconditional perception of the linked
/// target — and only that target.
#[derive(Clone, Copy, Debug, Default)]
pub struct SenseLinkRule;

impl ExceptionRule for SenseLinkRule {
    fn name(&self) -> &str {
        "sense_link"
    }

    fn applies(&self, observer: &ObserverState, target: &TargetState) -> bool {
        matches!(
            observer.special,
            ObserverSpecial::SenseLink { target: linked } if linked == target.actor
        )
    }
}

/// Roles with an independent visibility model are never gated here.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnboundedRoleRule;

impl ExceptionRule for UnboundedRoleRule {
    fn name(&self) -> &str {
        "unbounded_role"
    }

    fn applies(&self, observer: &ObserverState, _target: &TargetState) -> bool {
        observer.special == ObserverSpecial::UnboundedRole
    }
}

/// The standard rule set, in evaluation order.
pub fn standard_rules() -> Vec<Box<dyn ExceptionRule>> {
    vec![
        Box::new(NoclipRule),
        Box::new(LightEmissionRule),
        Box::new(SenseLinkRule),
        Box::new(UnboundedRoleRule),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use veil_core::{ActorId, RoomCoord};

    fn observer(special: ObserverSpecial) -> ObserverState {
        ObserverState {
            actor: ActorId(1),
            position: [0.0; 3],
            room: RoomCoord::new(0, 0, 0),
            special,
        }
    }

    fn target(emitting_light: bool) -> TargetState {
        TargetState {
            actor: ActorId(2),
            position: [0.0; 3],
            room: RoomCoord::new(1, 0, 0),
            emitting_light,
        }
    }

    #[test]
    fn noclip_matches_only_noclip() {
        let rule = NoclipRule;
        assert!(rule.applies(&observer(ObserverSpecial::Noclip), &target(false)));
        assert!(!rule.applies(&observer(ObserverSpecial::None), &target(false)));
    }

    #[test]
    fn light_emission_matches_lit_targets() {
        let rule = LightEmissionRule;
        assert!(rule.applies(&observer(ObserverSpecial::None), &target(true)));
        assert!(!rule.applies(&observer(ObserverSpecial::None), &target(false)));
    }

    #[test]
    fn sense_link_matches_exact_target_only() {
        let rule = SenseLinkRule;
        let linked = observer(ObserverSpecial::SenseLink { target: ActorId(2) });
        let other = observer(ObserverSpecial::SenseLink { target: ActorId(3) });
        assert!(rule.applies(&linked, &target(false)));
        assert!(!rule.applies(&other, &target(false)));
    }

    #[test]
    fn unbounded_role_matches_only_that_role() {
        let rule = UnboundedRoleRule;
        assert!(rule.applies(&observer(ObserverSpecial::UnboundedRole), &target(false)));
        assert!(!rule.applies(&observer(ObserverSpecial::Noclip), &target(false)));
    }

    #[test]
    fn standard_rules_order_is_stable() {
        let names: Vec<_> = standard_rules().iter().map(|r| r.name().to_owned()).collect();
        assert_eq!(
            names,
            ["noclip", "light_emission", "sense_link", "unbounded_role"]
        );
    }
}
