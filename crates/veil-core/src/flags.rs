//! Host visibility flag bits.

use std::fmt;
use std::ops::BitOr;

/// Visibility-result flags shared with the host engine.
///
/// The host computes a base flag set per observer×target pair (its
/// own cheap distance/frustum check included); the gate only ever
/// adds the [`VisFlags::OUT_OF_RANGE`] bit, meaning "must not be
/// perceived/synced to this observer". All other bits pass through
/// untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VisFlags(u8);

impl VisFlags {
    /// No flags set.
    pub const NONE: VisFlags = VisFlags(0);

    /// The target must not be perceived/synced to this observer.
    pub const OUT_OF_RANGE: VisFlags = VisFlags(0b0000_0001);

    /// Wrap raw host flag bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw flag bits for handing back to the host.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: VisFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the out-of-range bit is set.
    pub const fn is_out_of_range(self) -> bool {
        self.contains(Self::OUT_OF_RANGE)
    }

    /// This flag set with the out-of-range bit added.
    pub const fn with_out_of_range(self) -> Self {
        Self(self.0 | Self::OUT_OF_RANGE.0)
    }
}

impl BitOr for VisFlags {
    type Output = VisFlags;

    fn bitor(self, rhs: VisFlags) -> VisFlags {
        VisFlags(self.0 | rhs.0)
    }
}

impl fmt::Display for VisFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_round_trip() {
        let base = VisFlags::from_bits(0b1010_0000);
        assert!(!base.is_out_of_range());
        let gated = base.with_out_of_range();
        assert!(gated.is_out_of_range());
        // Host bits are preserved.
        assert!(gated.contains(base));
        assert_eq!(gated.bits(), 0b1010_0001);
    }

    #[test]
    fn with_out_of_range_is_idempotent() {
        let f = VisFlags::NONE.with_out_of_range();
        assert_eq!(f, f.with_out_of_range());
    }

    #[test]
    fn bitor_unions_bits() {
        let f = VisFlags::from_bits(0b10) | VisFlags::OUT_OF_RANGE;
        assert_eq!(f.bits(), 0b11);
    }
}
