//! Streaming adapter for deletable-prime searches.
//!
//! ## Purpose
//!
//! This module provides the streaming execution adapter: leaves are
//! produced lazily, one `next()` at a time, without collecting the whole
//! forest first. It suits unbounded exploration, early termination, and
//! pipelines that process leaves as they arrive.
//!
//! ## Design notes
//!
//! * **Laziness**: Each `next()` advances the depth-first walk just far
//!   enough to surface the next maximal prime.
//! * **Roots up front**: The single-digit roots are computed eagerly at
//!   stream construction so configuration errors surface before the
//!   first `next()`.
//! * **Statistics**: Counters accumulate across roots and are readable
//!   at any point, not only after the stream drains.
//!
//! ## Invariants
//!
//! * The leaf sequence is identical to the batch adapter's output order.
//! * `exhausted()` is meaningful only once the stream has been drained;
//!   before that it reports the truncation state observed so far.
//!
//! ## Non-goals
//!
//! * This adapter does not parallelize subtrees (see the `fastDelprime`
//!   extension crate).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(feature = "std")]
use std::vec;

// Internal dependencies
use crate::algorithms::extension::Side;
use crate::engine::executor::{LeafObserverFn, SearchConfig, SearchExecutor, SubtreeWalk};
use crate::engine::output::SearchStats;
use crate::engine::validator::Validator;
use crate::primitives::digits::RadixInt;
use crate::primitives::errors::DelprimeError;

// ============================================================================
// Streaming Search Builder
// ============================================================================

/// Builder for a streaming deletable-prime search.
#[derive(Debug, Clone)]
pub struct StreamingSearchBuilder {
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

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for StreamingSearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingSearchBuilder {
    /// Create a new streaming search builder with default parameters.
    fn new() -> Self {
        Self {
            base: 10,
            side: Side::default(),
            max_digits: None,
            observer: None,
            deferred_error: None,
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

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the streaming searcher.
    pub fn build(self) -> Result<StreamingSearch, DelprimeError> {
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

        Ok(StreamingSearch { config: self })
    }
}

// ============================================================================
// Streaming Search Processor
// ============================================================================

/// Streaming deletable-prime searcher.
#[derive(Debug)]
pub struct StreamingSearch {
    config: StreamingSearchBuilder,
}

impl StreamingSearch {
    /// Start the search and return the lazy leaf stream.
    pub fn run(self) -> Result<LeafStream, DelprimeError> {
        let executor = SearchExecutor::new()
            .base(self.config.base)
            .side(self.config.side)
            .max_digits(self.config.max_digits)
            .observer(self.config.observer);

        let roots = executor.roots()?;
        let config = executor.to_config();

        Ok(LeafStream {
            config,
            roots: roots.into_iter(),
            walk: None,
            stats: SearchStats::default(),
            exhausted: true,
        })
    }
}

// ============================================================================
// Leaf Stream
// ============================================================================

/// Lazy iterator over the maximal primes of a search forest.
///
/// Yields leaves in the same deterministic order as the batch adapter:
/// roots ascending, siblings in ascending digit order, depth-first.
pub struct LeafStream {
    /// Frozen search configuration.
    config: SearchConfig,

    /// Roots not yet walked.
    roots: vec::IntoIter<RadixInt>,

    /// Walk over the current root's subtree, if one is in progress.
    walk: Option<SubtreeWalk>,

    /// Counters accumulated from finished walks.
    stats: SearchStats,

    /// Whether every subtree finished so far ran to natural exhaustion.
    exhausted: bool,
}

impl LeafStream {
    /// Search statistics accumulated so far.
    ///
    /// Includes the in-progress subtree, so the counters are monotone
    /// across calls to `next()`.
    pub fn stats(&self) -> SearchStats {
        let mut stats = self.stats;
        if let Some(walk) = &self.walk {
            stats.merge(&walk.stats());
        }
        stats
    }

    /// Whether the search has hit the digit bound anywhere so far.
    ///
    /// Returns `true` while no truncation has been observed; once the
    /// stream is drained this is the definitive exhaustion flag.
    pub fn exhausted(&self) -> bool {
        self.exhausted && self.walk.as_ref().map_or(true, |w| w.exhausted())
    }

    /// Retire the current walk, folding its counters into the totals.
    fn finish_walk(&mut self) {
        if let Some(walk) = self.walk.take() {
            self.stats.merge(&walk.stats());
            if !walk.exhausted() {
                self.exhausted = false;
            }
        }
    }
}

impl Iterator for LeafStream {
    type Item = Result<RadixInt, DelprimeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.walk.is_none() {
                let root = self.roots.next()?;
                match SubtreeWalk::new(self.config.clone(), root) {
                    Ok(walk) => self.walk = Some(walk),
                    Err(err) => return Some(Err(err)),
                }
            }

            // Walk is present here; advance it to the next leaf.
            let step = match self.walk.as_mut() {
                Some(walk) => walk.advance(),
                None => return None,
            };

            match step {
                Ok(Some(leaf)) => return Some(Ok(leaf)),
                Ok(None) => self.finish_walk(),
                Err(err) => {
                    self.finish_walk();
                    return Some(Err(err));
                }
            }
        }
    }
}
