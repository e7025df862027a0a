//! # virtsort-std
//!
//! Standard implementations for the virtsort override-dispatch demo.
//!
//! This crate provides:
//! - **Variants**: [`Base`], [`Mid`], [`Leaf`] and their tagged union [`AnyVariant`]
//! - **Collection**: [`Lineup`], with sort / filter / grouping by override
//! - **Filtering**: [`OverrideFilter`]
//! - **Testing**: [`testing`] utilities

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use virtsort_core;

// Modules
pub mod filter;
pub mod lineup;
pub mod testing;
pub mod variants;

pub use filter::OverrideFilter;
pub use lineup::{DEMO_ORDER, Lineup};
pub use variants::{AnyVariant, Base, Leaf, Mid, instantiate};
