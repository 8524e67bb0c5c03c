//! Resolved and effective capacity values

use std::fmt;

/// Capacity used whenever the settings file cannot supply a value.
pub const DEFAULT_CAPACITY: i32 = 10;

/// Slots occupied by participants the operator-facing setting does not
/// count. Currently only the session host.
pub const RESERVED_SLOTS: i32 = 1;

/// Operator-intended number of non-privileged participants.
///
/// Passed through exactly as configured: zero and negative values are not
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedCapacity(i32);

impl ResolvedCapacity {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Derive the ceiling actually written into host state.
    ///
    /// Saturates at `i32::MAX` rather than wrapping into a negative ceiling.
    pub fn effective(self) -> EffectiveCapacity {
        EffectiveCapacity(self.0.saturating_add(RESERVED_SLOTS))
    }
}

impl Default for ResolvedCapacity {
    fn default() -> Self {
        Self(DEFAULT_CAPACITY)
    }
}

impl fmt::Display for ResolvedCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved capacity plus reserved slots. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectiveCapacity(i32);

impl EffectiveCapacity {
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for EffectiveCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
