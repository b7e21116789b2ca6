//! Parallel engine extensions.
//!
//! This layer supplies the forest pass injected into the `delprime`
//! execution engine when parallel execution is enabled.

/// Parallel forest pass built on rayon.
pub mod executor;
