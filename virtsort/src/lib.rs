//! # virtsort - Sorting and Filtering by Override
//!
//! A small demo of polymorphic dispatch. A mixed lineup of related variants is
//! printed through the base capability, sorted by *which* override of
//! `announce` actually runs for each member, and filtered down to the members
//! sharing one variant's override.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use virtsort::{Behavior, Lineup, Mid};
//!
//! let mut lineup = Lineup::demo();
//! lineup.sort_by_override(Behavior::Announce);
//! for member in lineup.matching(&Mid, Behavior::Announce) {
//!     member.describe(&mut std::io::stdout())?;
//! }
//! ```
//!
//! `Leaf` never overrides `announce`, so it is selected alongside `Mid`.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod driver;

pub use driver::{FILTERED_HEADER, SORTED_HEADER, UNSORTED_HEADER, run, run_lineup};

pub use virtsort_core::{
    // Identity
    Behavior,
    Origin,
    OverrideKey,
    // Capability
    Variant,
    // Error types
    VirtsortError,
    enum_variant,
};

pub use virtsort_std::{
    AnyVariant, Base, DEMO_ORDER, Leaf, Lineup, Mid, OverrideFilter, instantiate,
};

/// Testing utilities.
pub mod testing {
    pub use virtsort_std::testing::{CountingVariant, Entry, Section, Transcript};
}

/// Prelude module - common imports for virtsort.
///
/// # Usage
///
/// ```rust,ignore
/// use virtsort::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AnyVariant, Base, Behavior, Leaf, Lineup, Mid, Origin, OverrideFilter, OverrideKey,
        Variant, VirtsortError,
    };
}
