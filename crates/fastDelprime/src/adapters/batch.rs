//! Batch adapter for parallel deletable-prime searches.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter with parallel per-root
//! processing. It wraps the `delprime` batch adapter and injects the rayon
//! forest pass when parallel execution is enabled.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation and execution live in the `delprime` crate;
//!   this wrapper only decides which forest pass runs.
//! * **Parallelism**: Defaults to parallel; `.parallel(false)` restores the
//!   sequential pass.
//! * **Determinism**: The merged result is identical to a sequential run.
//!
//! ## Invariants
//!
//! * A parallel run and a sequential run of the same configuration return
//!   equal results.
//!
//! ## Non-goals
//!
//! * This adapter does not stream leaves lazily; use the `delprime`
//!   streaming adapter, which is inherently sequential.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::forest_pass_parallel;

// Export dependencies from delprime crate
use delprime::internals::adapters::batch::BatchSearchBuilder;
use delprime::internals::algorithms::extension::Side;
use delprime::internals::engine::executor::LeafObserverFn;
use delprime::internals::engine::output::SearchResult;
use delprime::internals::primitives::errors::DelprimeError;

// ============================================================================
// Extended Batch Search Builder
// ============================================================================

/// Builder for a batch deletable-prime search with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchSearchBuilder {
    /// Base builder from the delprime crate.
    pub base: BatchSearchBuilder,

    /// Whether the forest pass runs on all cores.
    pub parallel: bool,
}

impl Default for ParallelBatchSearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelBatchSearchBuilder {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the delprime BatchSearchBuilder
    /// * parallel: true (fastDelprime extension)
    fn new() -> Self {
        Self {
            base: BatchSearchBuilder::default(),
            parallel: true,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the digit radix.
    pub fn base(mut self, base: u32) -> Self {
        self.base = self.base.base(base);
        self
    }

    /// Set the extension side.
    pub fn side(mut self, side: Side) -> Self {
        self.base = self.base.side(side);
        self
    }

    /// Bound the search at `max_digits` digits per number.
    pub fn max_digits(mut self, max_digits: usize) -> Self {
        self.base = self.base.max_digits(max_digits);
        self
    }

    /// Set the per-leaf reporting hook.
    ///
    /// With parallel execution the hook fires from worker threads; leaves
    /// of different roots interleave nondeterministically.
    pub fn observer(mut self, observer: LeafObserverFn) -> Self {
        self.base = self.base.observer(observer);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch searcher.
    pub fn build(self) -> Result<ParallelBatchSearch, DelprimeError> {
        // Check for deferred errors from adapter conversion
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        // Validate by attempting to build the base searcher; this reuses
        // the validation logic centralized in the delprime crate.
        let _ = self.base.clone().build()?;

        Ok(ParallelBatchSearch { config: self })
    }
}

// ============================================================================
// Extended Batch Search Processor
// ============================================================================

/// Batch deletable-prime searcher with parallel support.
#[derive(Debug)]
pub struct ParallelBatchSearch {
    config: ParallelBatchSearchBuilder,
}

impl ParallelBatchSearch {
    /// Run the search to completion.
    pub fn run(self) -> Result<SearchResult, DelprimeError> {
        let mut builder = self.config.base;

        #[cfg(feature = "cpu")]
        {
            if self.config.parallel && builder.custom_forest_pass.is_none() {
                builder = builder.custom_forest_pass(forest_pass_parallel);
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Without the cpu feature every run is sequential.
            let _ = self.config.parallel;
        }

        builder.build()?.run()
    }
}
