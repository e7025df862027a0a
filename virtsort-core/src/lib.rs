//! # virtsort-core
//!
//! Core traits for the virtsort override-dispatch demo.
//!
//! This crate has minimal dependencies: it defines the base capability
//! ([`Variant`]), the explicit identity of an override ([`OverrideKey`]), and
//! the error types. Concrete variants and collections live in `virtsort-std`.
//!
//! # Dispatch
//!
//! Two representations are supported side by side:
//!
//! - **Dynamic**: `Box<dyn Variant>` / `&dyn Variant`, resolved through the vtable
//! - **Static**: an enum generated by [`enum_variant!`], resolved by `match`
//!
//! Both report the same [`OverrideKey`] for the same instance, so sorting and
//! filtering by implementation does not depend on the representation.
//!
//! # Error Types
//!
//! - [`VirtsortError`] - Top-level error type

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod behavior;
mod error;
mod variant;

// Re-exports
pub use behavior::{Behavior, Origin, OverrideKey};
pub use error::VirtsortError;
pub use variant::Variant;
