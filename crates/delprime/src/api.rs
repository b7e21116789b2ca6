//! High-level API for deletable-prime searches.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder pattern for configuring search parameters and choosing an
//! execution adapter (Batch or Streaming).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Core parameters are validated during adapter construction.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch and Streaming modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//! * **Validation**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DelprimeBuilder`] via `Delprime::new()`.
//! 2. Chain configuration methods (`.base()`, `.side()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// Internal dependencies
use crate::adapters::batch::BatchSearchBuilder;
use crate::adapters::streaming::StreamingSearchBuilder;
use crate::engine::executor::{ForestPassFn, LeafObserverFn};

// Publicly re-exported types
pub use crate::adapters::streaming::LeafStream;
pub use crate::algorithms::extension::Side;
pub use crate::engine::output::{SearchResult, SearchStats};
pub use crate::primitives::digits::RadixInt;
pub use crate::primitives::errors::DelprimeError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Streaming};
}

/// Fluent builder for configuring deletable-prime search parameters.
#[derive(Debug, Clone)]
pub struct DelprimeBuilder {
    /// Digit radix.
    pub base: Option<u32>,

    /// Extension side (append or prepend).
    pub side: Option<Side>,

    /// Digit-count bound.
    pub max_digits: Option<usize>,

    /// Per-leaf reporting hook.
    pub observer: Option<LeafObserverFn>,

    // ======================================
    // DEV
    // ======================================
    /// Custom forest pass function.
    #[doc(hidden)]
    pub custom_forest_pass: Option<ForestPassFn>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for DelprimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DelprimeBuilder {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: DelprimeAdapter,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base: None,
            side: None,
            max_digits: None,
            observer: None,
            custom_forest_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the digit radix (default: 10).
    pub fn base(mut self, base: u32) -> Self {
        if self.base.is_some() {
            self.duplicate_param = Some("base");
        }
        self.base = Some(base);
        self
    }

    /// Set the extension side (default: Right).
    pub fn side(mut self, side: Side) -> Self {
        if self.side.is_some() {
            self.duplicate_param = Some("side");
        }
        self.side = Some(side);
        self
    }

    /// Bound the search at `max_digits` digits per number.
    ///
    /// The forest for bases 3 and up is believed finite but unproven;
    /// the bound makes every search provably terminating.
    pub fn max_digits(mut self, max_digits: usize) -> Self {
        if self.max_digits.is_some() {
            self.duplicate_param = Some("max_digits");
        }
        self.max_digits = Some(max_digits);
        self
    }

    /// Report each maximal prime to `observer` as it is found.
    pub fn observer(mut self, observer: LeafObserverFn) -> Self {
        if self.observer.is_some() {
            self.duplicate_param = Some("observer");
        }
        self.observer = Some(observer);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom forest pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_forest_pass(mut self, pass: ForestPassFn) -> Self {
        self.custom_forest_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait DelprimeAdapter {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`DelprimeBuilder`] into a specialized execution builder.
    fn convert(builder: DelprimeBuilder) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl DelprimeAdapter for Batch {
    type Output = BatchSearchBuilder;

    fn convert(builder: DelprimeBuilder) -> Self::Output {
        let mut result = BatchSearchBuilder::default();

        if let Some(base) = builder.base {
            result.base = base;
        }
        if let Some(side) = builder.side {
            result.side = side;
        }
        if let Some(max_digits) = builder.max_digits {
            result.max_digits = Some(max_digits);
        }
        if let Some(observer) = builder.observer {
            result.observer = Some(observer);
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(fp) = builder.custom_forest_pass {
            result.custom_forest_pass = Some(fp);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for lazy streaming processing.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl DelprimeAdapter for Streaming {
    type Output = StreamingSearchBuilder;

    fn convert(builder: DelprimeBuilder) -> Self::Output {
        let mut result = StreamingSearchBuilder::default();

        // Override with user-provided values
        if let Some(base) = builder.base {
            result.base = base;
        }
        if let Some(side) = builder.side {
            result.side = side;
        }
        if let Some(max_digits) = builder.max_digits {
            result.max_digits = Some(max_digits);
        }
        if let Some(observer) = builder.observer {
            result.observer = Some(observer);
        }

        // Custom forest passes only apply to whole-forest execution; the
        // streaming walk drives subtrees directly and ignores the hook.

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
