//! Batch adapter for deletable-prime searches.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: it runs the whole
//! forest to exhaustion (or the configured digit bound) and returns the
//! collected [`SearchResult`] in one call.
//!
//! ## Design notes
//!
//! * **Validation**: Parameters are validated at `build()`, fail-fast.
//! * **Delegation**: Computation is delegated to the execution engine.
//! * **Builder Pattern**: Fluent API with sensible defaults (base 10,
//!   right side, unbounded).
//!
//! ## Invariants
//!
//! * `run()` on a built searcher cannot fail on configuration; only
//!   digit-generation defects surface as errors.
//! * Output order is the deterministic depth-first order.
//!
//! ## Non-goals
//!
//! * This adapter does not stream leaves incrementally (use the streaming
//!   adapter).
//! * This adapter does not parallelize subtrees (see the `fastDelprime`
//!   extension crate).

// Internal dependencies
use crate::algorithms::extension::Side;
use crate::engine::executor::{ForestPassFn, LeafObserverFn, SearchExecutor};
use crate::engine::output::SearchResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::DelprimeError;

// ============================================================================
// Batch Search Builder
// ============================================================================

/// Builder for a batch deletable-prime search.
#[derive(Debug, Clone)]
pub struct BatchSearchBuilder {
    /// Digit radix.
    pub base: u32,

    /// Extension side.
    pub side: Side,

    /// Optional digit-count bound.
    pub max_digits: Option<usize>,

    /// Optional per-leaf reporting hook.
    pub observer: Option<LeafObserverFn>,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<DelprimeError>,

    /// Custom forest pass function.
    #[doc(hidden)]
    pub custom_forest_pass: Option<ForestPassFn>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for BatchSearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchSearchBuilder {
    /// Create a new batch search builder with default parameters.
    fn new() -> Self {
        Self {
            base: 10,
            side: Side::default(),
            max_digits: None,
            observer: None,
            deferred_error: None,
            custom_forest_pass: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the digit radix.
    pub fn base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Set the extension side.
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Bound the search at `max_digits` digits per number.
    pub fn max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = Some(max_digits);
        self
    }

    /// Set the per-leaf reporting hook.
    pub fn observer(mut self, observer: LeafObserverFn) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Set a custom forest pass function.
    #[doc(hidden)]
    pub fn custom_forest_pass(mut self, pass: ForestPassFn) -> Self {
        self.custom_forest_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch searcher.
    pub fn build(self) -> Result<BatchSearch, DelprimeError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate radix
        Validator::validate_base(self.base)?;

        // Validate digit bound
        if let Some(max_digits) = self.max_digits {
            Validator::validate_max_digits(max_digits)?;
        }

        Ok(BatchSearch { config: self })
    }
}

// ============================================================================
// Batch Search Processor
// ============================================================================

/// Batch deletable-prime searcher.
#[derive(Debug)]
pub struct BatchSearch {
    config: BatchSearchBuilder,
}

impl BatchSearch {
    /// Run the search to completion.
    pub fn run(self) -> Result<SearchResult, DelprimeError> {
        SearchExecutor::new()
            .base(self.config.base)
            .side(self.config.side)
            .max_digits(self.config.max_digits)
            .observer(self.config.observer)
            .custom_forest_pass(self.config.custom_forest_pass)
            .run()
    }
}
