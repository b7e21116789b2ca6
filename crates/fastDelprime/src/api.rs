//! High-level API for deletable-prime searches with parallel execution.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for parallel
//! searches. It extends the `delprime` API with an adapter that expands
//! each root's subtree on its own CPU core.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `delprime` builder pattern.
//! * **Parallel-First**: The Batch marker defaults to parallel execution.
//! * **Transparent**: The merged result is identical to a sequential run.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DelprimeBuilder`] via `Delprime::new()`.
//! 2. Chain configuration methods (`.base()`, `.side()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution
//!    builder.

// Internal dependencies
use crate::adapters::batch::ParallelBatchSearchBuilder;

// Import base marker types for delegation
use delprime::internals::api::Batch as BaseBatch;

// Publicly re-exported types
pub use delprime::internals::adapters::streaming::LeafStream;
pub use delprime::internals::algorithms::extension::Side;
pub use delprime::internals::api::Streaming;
pub use delprime::internals::api::{DelprimeAdapter, DelprimeBuilder};
pub use delprime::internals::engine::output::{SearchResult, SearchStats};
pub use delprime::internals::primitives::digits::RadixInt;
pub use delprime::internals::primitives::errors::DelprimeError;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Streaming};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl DelprimeAdapter for Batch {
    type Output = ParallelBatchSearchBuilder;

    fn convert(builder: DelprimeBuilder) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for
        // fastDelprime Batch
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create the base builder
        let base = <BaseBatch as DelprimeAdapter>::convert(builder);

        // Wrap with extension fields
        ParallelBatchSearchBuilder { base, parallel }
    }
}
