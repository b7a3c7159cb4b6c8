//! Gate configuration switches.

/// The two configuration switches the host exposes for the gate.
///
/// Disabling the whole gate makes [`evaluate`] a passthrough; the
/// raycast tier is off by default because it is the deliberately
/// expensive tail of the decision chain and should only be enabled
/// where the host can afford exact geometry per surviving pair.
///
/// [`evaluate`]: crate::VisibilityGate::evaluate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateConfig {
    /// Master switch: when `false`, every evaluation returns the base
    /// flags unchanged.
    pub enabled: bool,
    /// Whether the exact raycast fallback tier runs after a passing
    /// graph check.
    pub raycast_fallback: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            raycast_fallback: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_gate_on_fallback_off() {
        let c = GateConfig::default();
        assert!(c.enabled);
        assert!(!c.raycast_fallback);
    }
}
