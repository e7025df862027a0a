//! # Behavior identity
//!
//! Which body actually runs when a behavior is invoked through the base
//! capability. A variant reports this explicitly as an [`OverrideKey`]
//! rather than having callers hash method handles at runtime.

use std::fmt;

/// One of the overridable behaviors of a [`Variant`].
///
/// [`Variant`]: crate::Variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Behavior {
    /// Writes the class label, e.g. `"Class A "`.
    Greet,
    /// Writes the `Foo` message, e.g. `"A::Foo"`.
    Announce,
}

impl Behavior {
    /// All behaviors, in declaration order.
    pub const ALL: [Behavior; 2] = [Behavior::Greet, Behavior::Announce];
}

/// A concrete variant whose body executes for some behavior.
///
/// Ordered by specialization depth: `Base < Mid < Leaf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Origin {
    /// The root of the hierarchy.
    Base,
    /// Specializes [`Origin::Base`].
    Mid,
    /// Specializes [`Origin::Mid`].
    Leaf,
}

impl Origin {
    /// All origins, root first.
    pub const ALL: [Origin; 3] = [Origin::Base, Origin::Mid, Origin::Leaf];

    /// The single-letter class label printed by this origin's bodies.
    pub const fn label(self) -> &'static str {
        match self {
            Origin::Base => "A",
            Origin::Mid => "B",
            Origin::Leaf => "C",
        }
    }

    /// The origin this one specializes, if any.
    pub const fn parent(self) -> Option<Origin> {
        match self {
            Origin::Base => None,
            Origin::Mid => Some(Origin::Base),
            Origin::Leaf => Some(Origin::Mid),
        }
    }

    /// The text this origin's body writes for `behavior`.
    ///
    /// Greet labels carry a trailing space and no newline; announce
    /// messages carry no terminator (the newline is added when written).
    pub fn text(self, behavior: Behavior) -> String {
        match behavior {
            Behavior::Greet => format!("Class {} ", self.label()),
            Behavior::Announce => format!("{}::Foo", self.label()),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity of the override that executes for one behavior.
///
/// Two instances compare equal under this key iff the same concrete body
/// runs for them. Sorting by it groups instances by implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverrideKey {
    behavior: Behavior,
    origin: Origin,
}

impl OverrideKey {
    /// Create a key for `behavior` implemented by `origin`.
    pub const fn new(behavior: Behavior, origin: Origin) -> Self {
        Self { behavior, origin }
    }

    /// The behavior this key identifies an override of.
    pub const fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// The variant whose body runs.
    pub const fn origin(&self) -> Origin {
        self.origin
    }
}

impl fmt::Display for OverrideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{:?}", self.origin, self.behavior)
    }
}
