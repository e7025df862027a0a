//! # Lineup
//!
//! An ordered collection of variants that owns its members exclusively.
//!
//! Members are kept in insertion order until [`Lineup::sort_by_override`]
//! reorders them. Sorting, filtering and grouping all go through
//! [`Variant::resolve`], so two members are treated as equal exactly when the
//! same concrete body runs for them.
//!
//! # Representations
//!
//! The element type defaults to `Box<dyn Variant>` (vtable dispatch). Any
//! `Variant` works, so `Lineup<AnyVariant>` gives the same behavior with
//! tag dispatch.

use crate::{
    filter::OverrideFilter,
    variants::{AnyVariant, instantiate},
};
use std::{
    io::{self, Write},
    ops::Range,
    slice,
};
use virtsort_core::{Behavior, Origin, OverrideKey, Variant};

/// Construction order of the demo lineup.
pub const DEMO_ORDER: [Origin; 5] = [
    Origin::Base,
    Origin::Leaf,
    Origin::Mid,
    Origin::Base,
    Origin::Leaf,
];

/// An insertion-ordered sequence of variants.
pub struct Lineup<V = Box<dyn Variant>> {
    members: Vec<V>,
}

impl<V> Lineup<V> {
    /// Create an empty lineup.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append a member at the end.
    pub fn push(&mut self, member: impl Into<V>) {
        self.members.push(member.into());
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the lineup has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in current order.
    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.members.iter()
    }
}

impl Lineup {
    /// The demo lineup as boxed trait objects: Base, Leaf, Mid, Base, Leaf.
    pub fn demo() -> Self {
        DEMO_ORDER.into_iter().map(instantiate).collect()
    }
}

impl Lineup<AnyVariant> {
    /// The demo lineup as tagged-union values.
    pub fn demo_static() -> Self {
        DEMO_ORDER.into_iter().map(AnyVariant::from).collect()
    }
}

impl<V: Variant> Lineup<V> {
    /// Declared kinds of the members, in current order.
    pub fn kinds(&self) -> Vec<Origin> {
        self.iter().map(Variant::kind).collect()
    }

    /// Writes `greet` then `announce` for every member, in current order.
    pub fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        for member in self {
            member.describe(out)?;
        }
        Ok(())
    }

    /// Reorders members by the override they resolve to for `behavior`.
    ///
    /// Members resolving to the same body keep their relative order.
    pub fn sort_by_override(&mut self, behavior: Behavior) {
        #[cfg(feature = "tracing")]
        tracing::debug!(members = self.members.len(), ?behavior, "sorting lineup by override");

        self.members.sort_by_key(|member| member.resolve(behavior));
    }

    /// Members accepted by `filter`, in current order.
    pub fn select(&self, filter: OverrideFilter) -> impl Iterator<Item = &V> + '_ {
        self.members
            .iter()
            .filter(move |member| filter.accepts(*member))
    }

    /// Members running the same `behavior` body as `probe`, in current order.
    pub fn matching<'a>(
        &'a self,
        probe: &dyn Variant,
        behavior: Behavior,
    ) -> impl Iterator<Item = &'a V> + use<'a, V> {
        let filter = OverrideFilter::of(probe, behavior);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            key = %filter.target(),
            matches = self.members.iter().filter(|m| filter.accepts(*m)).count(),
            "filtering lineup by override"
        );

        self.select(filter)
    }

    /// Writes `greet` then `announce` for every member matching `probe`.
    pub fn print_matching(
        &self,
        probe: &dyn Variant,
        behavior: Behavior,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        for member in self.matching(probe, behavior) {
            member.describe(out)?;
        }
        Ok(())
    }

    /// Contiguous runs of members sharing the same override for `behavior`.
    ///
    /// After [`sort_by_override`](Self::sort_by_override) there is exactly
    /// one run per distinct key.
    pub fn groups(&self, behavior: Behavior) -> Vec<(OverrideKey, Range<usize>)> {
        let mut runs: Vec<(OverrideKey, Range<usize>)> = Vec::new();
        for (index, member) in self.members.iter().enumerate() {
            let key = member.resolve(behavior);
            if let Some((last, range)) = runs.last_mut() {
                if *last == key {
                    range.end = index + 1;
                    continue;
                }
            }
            runs.push((key, index..index + 1));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(runs = runs.len(), ?behavior, "grouped lineup");

        runs
    }
}

impl<V> Default for Lineup<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<V> for Lineup<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a, V> IntoIterator for &'a Lineup<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
