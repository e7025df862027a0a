//! The three concrete variants and their tagged union.
//!
//! `Leaf` specializes `Mid`, which specializes `Base`. `Base` uses the root
//! bodies from [`Variant`]'s defaults; `Mid` overrides both behaviors; `Leaf`
//! overrides only `greet` and forwards `announce` to the `Mid` it holds.

use std::io::{self, Write};
use virtsort_core::{Behavior, Origin, OverrideKey, Variant, enum_variant};

/// The root variant. Every behavior is the default body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base;

impl Variant for Base {
    fn kind(&self) -> Origin {
        Origin::Base
    }
}

/// Overrides both behaviors of [`Base`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mid;

impl Variant for Mid {
    fn kind(&self) -> Origin {
        Origin::Mid
    }

    fn greet(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"Class B ")
    }

    fn announce(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "B::Foo")
    }

    fn resolve(&self, behavior: Behavior) -> OverrideKey {
        OverrideKey::new(behavior, Origin::Mid)
    }
}

/// Overrides only `greet`; `announce` is inherited from [`Mid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Leaf {
    parent: Mid,
}

impl Leaf {
    /// The specialized parent this variant forwards to.
    pub fn parent(&self) -> &Mid {
        &self.parent
    }
}

impl Variant for Leaf {
    fn kind(&self) -> Origin {
        Origin::Leaf
    }

    fn greet(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"Class C ")
    }

    fn announce(&self, out: &mut dyn Write) -> io::Result<()> {
        self.parent.announce(out)
    }

    fn resolve(&self, behavior: Behavior) -> OverrideKey {
        match behavior {
            Behavior::Greet => OverrideKey::new(behavior, Origin::Leaf),
            Behavior::Announce => self.parent.resolve(behavior),
        }
    }
}

enum_variant! {
    /// Any concrete variant, dispatched by tag instead of vtable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AnyVariant {
        /// A [`Base`] instance.
        Base(Base),
        /// A [`Mid`] instance.
        Mid(Mid),
        /// A [`Leaf`] instance.
        Leaf(Leaf),
    }
}

impl From<Origin> for AnyVariant {
    fn from(origin: Origin) -> Self {
        match origin {
            Origin::Base => Base.into(),
            Origin::Mid => Mid.into(),
            Origin::Leaf => Leaf::default().into(),
        }
    }
}

/// Construct a boxed instance of the concrete variant named by `origin`.
pub fn instantiate(origin: Origin) -> Box<dyn Variant> {
    match origin {
        Origin::Base => Box::new(Base),
        Origin::Mid => Box::new(Mid),
        Origin::Leaf => Box::new(Leaf::default()),
    }
}
