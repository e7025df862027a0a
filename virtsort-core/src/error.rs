//! Error types for virtsort.
//!
//! Behaviors themselves only fail when their output sink does, so the
//! hierarchy is a single type:
//!
//! - [`VirtsortError`] - Top-level error type for driver operations

use thiserror::Error;

/// Top-level error type for all virtsort operations.
#[derive(Error, Debug)]
pub enum VirtsortError {
    /// Writing behavior output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
