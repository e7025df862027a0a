//! # Base capability (Variant)
//!
//! The behaviors every member of the hierarchy exposes. Invoking them through
//! `&dyn Variant` runs the most specialized override reachable from the
//! instance's concrete type.
//!
//! # Specialization
//!
//! The default method bodies are the root variant's. A type "specializes"
//! another by holding it and forwarding every behavior it does not override,
//! including [`Variant::resolve`], so that the reported [`OverrideKey`] always
//! names the body that actually runs.

use crate::behavior::{Behavior, Origin, OverrideKey};
use std::io::{self, Write};

/// The base capability set of the hierarchy.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Variant`",
    label = "missing `Variant` implementation",
    note = "Variants must at least implement `kind`; other behaviors default to the root bodies."
)]
pub trait Variant: Send + Sync + 'static {
    /// The concrete variant this instance was declared as.
    fn kind(&self) -> Origin;

    /// Writes the class label.
    fn greet(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"Class A ")
    }

    /// Writes the `Foo` message, newline terminated.
    fn announce(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "A::Foo")
    }

    /// Identity of the override that runs for `behavior` on this instance.
    ///
    /// Must agree with the body [`greet`](Variant::greet) or
    /// [`announce`](Variant::announce) actually executes.
    fn resolve(&self, behavior: Behavior) -> OverrideKey {
        OverrideKey::new(behavior, Origin::Base)
    }

    /// Writes [`greet`](Variant::greet) followed by [`announce`](Variant::announce).
    fn describe(&self, out: &mut dyn Write) -> io::Result<()> {
        self.greet(out)?;
        self.announce(out)
    }
}

// Allow Box<dyn Variant> to be used where Variant is expected.
impl<T: Variant + ?Sized> Variant for Box<T> {
    fn kind(&self) -> Origin {
        (**self).kind()
    }

    fn greet(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).greet(out)
    }

    fn announce(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).announce(out)
    }

    fn resolve(&self, behavior: Behavior) -> OverrideKey {
        (**self).resolve(behavior)
    }

    fn describe(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).describe(out)
    }
}

// ============================================================================
// Enum Dispatch Macro
// ============================================================================

/// Generate an enum that dispatches to inner `Variant` implementations via match.
///
/// Each enum variant wraps a type implementing [`Variant`], and the enum
/// itself implements [`Variant`] by matching on the tag. No vtable is
/// involved; this is the tagged-union counterpart of `Box<dyn Variant>`.
///
/// # Example
///
/// ```rust,ignore
/// use virtsort_core::enum_variant;
///
/// enum_variant! {
///     /// Every concrete shape.
///     pub enum AnyShape {
///         /// Four equal sides.
///         Square(Square),
///         Circle(Circle),
///     }
/// }
///
/// let shape: AnyShape = Square::default().into();
/// shape.describe(&mut out)?;
/// ```
///
/// # Generated Code
///
/// - The enum definition with the specified variants
/// - `impl Variant for EnumName` with a match dispatching to each variant
/// - `impl From<VariantType> for EnumName` for each variant
#[macro_export]
macro_rules! enum_variant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($inner:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($inner),
            )+
        }

        impl $crate::Variant for $name {
            fn kind(&self) -> $crate::Origin {
                match self {
                    $(
                        Self::$variant(inner) => $crate::Variant::kind(inner),
                    )+
                }
            }

            fn greet(&self, out: &mut dyn ::std::io::Write) -> ::std::io::Result<()> {
                match self {
                    $(
                        Self::$variant(inner) => $crate::Variant::greet(inner, out),
                    )+
                }
            }

            fn announce(&self, out: &mut dyn ::std::io::Write) -> ::std::io::Result<()> {
                match self {
                    $(
                        Self::$variant(inner) => $crate::Variant::announce(inner, out),
                    )+
                }
            }

            fn resolve(&self, behavior: $crate::Behavior) -> $crate::OverrideKey {
                match self {
                    $(
                        Self::$variant(inner) => $crate::Variant::resolve(inner, behavior),
                    )+
                }
            }
        }

        // Generate From impls for ergonomic construction
        $(
            impl From<$inner> for $name {
                fn from(inner: $inner) -> Self {
                    Self::$variant(inner)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Root;

    impl Variant for Root {
        fn kind(&self) -> Origin {
            Origin::Base
        }
    }

    #[derive(Debug)]
    struct Loud;

    impl Variant for Loud {
        fn kind(&self) -> Origin {
            Origin::Mid
        }

        fn greet(&self, out: &mut dyn Write) -> io::Result<()> {
            out.write_all(b"Class B ")
        }

        fn resolve(&self, behavior: Behavior) -> OverrideKey {
            match behavior {
                Behavior::Greet => OverrideKey::new(behavior, Origin::Mid),
                Behavior::Announce => OverrideKey::new(behavior, Origin::Base),
            }
        }
    }

    fn render(variant: &dyn Variant) -> String {
        let mut out = Vec::new();
        variant.describe(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn defaults_are_root_bodies() {
        assert_eq!(render(&Root), "Class A A::Foo\n");
        assert_eq!(
            Root.resolve(Behavior::Announce),
            OverrideKey::new(Behavior::Announce, Origin::Base)
        );
    }

    #[test]
    fn partial_override_keeps_default_for_the_rest() {
        assert_eq!(render(&Loud), "Class B A::Foo\n");
        assert_eq!(Loud.resolve(Behavior::Greet).origin(), Origin::Mid);
        assert_eq!(Loud.resolve(Behavior::Announce).origin(), Origin::Base);
    }

    #[test]
    fn boxed_variant_forwards_everything() {
        let boxed: Box<dyn Variant> = Box::new(Loud);
        assert_eq!(boxed.kind(), Origin::Mid);
        assert_eq!(render(&boxed), "Class B A::Foo\n");
        assert_eq!(
            boxed.resolve(Behavior::Greet),
            Loud.resolve(Behavior::Greet)
        );
    }

    crate::enum_variant! {
        #[derive(Debug)]
        enum Either {
            /// Root bodies only.
            Root(Root),
            /// Overrides `greet` only.
            Loud(Loud),
        }
    }

    #[test]
    fn enum_variant_keeps_variant_attributes() {
        let root: Either = Root.into();
        assert_eq!(format!("{root:?}"), "Root(Root)");
    }

    #[test]
    fn enum_variant_dispatches_by_tag() {
        let root: Either = Root.into();
        let loud: Either = Loud.into();

        assert_eq!(render(&root), "Class A A::Foo\n");
        assert_eq!(render(&loud), "Class B A::Foo\n");
        assert_eq!(loud.kind(), Origin::Mid);
        assert_eq!(
            root.resolve(Behavior::Announce),
            loud.resolve(Behavior::Announce)
        );
    }
}
