//! Filter for selecting variants by the override they resolve to.

use virtsort_core::{Behavior, OverrideKey, Variant};

/// Accepts variants whose override for a behavior is the same body as a probe's.
///
/// The probe is only consulted once, at construction; the filter keeps the
/// resolved key, not the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideFilter {
    target: OverrideKey,
}

impl OverrideFilter {
    /// Create a filter matching `probe`'s override of `behavior`.
    pub fn of(probe: &dyn Variant, behavior: Behavior) -> Self {
        Self {
            target: probe.resolve(behavior),
        }
    }

    /// Create a filter matching an already resolved key.
    pub const fn for_key(target: OverrideKey) -> Self {
        Self { target }
    }

    /// The key candidates must resolve to.
    pub const fn target(&self) -> OverrideKey {
        self.target
    }

    /// Whether `candidate` runs the same body as the target.
    pub fn accepts(&self, candidate: &dyn Variant) -> bool {
        candidate.resolve(self.target.behavior()) == self.target
    }
}
