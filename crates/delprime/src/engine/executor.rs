//! Execution engine for deletable-prime searches.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that orchestrates the
//! tree search: scanning the single-digit roots, walking each root's
//! subtree depth-first, testing every digit extension with the primality
//! oracle, and collecting the maximal leaves.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and parameter-based entry points.
//! * Traversal uses an explicit work stack ([`SubtreeWalk`]) rather than
//!   recursion; the known largest deletable primes run to hundreds of
//!   digits.
//! * Leaf discovery order is deterministic: roots ascending, sibling
//!   digits ascending, depth-first.
//! * A custom forest pass can be injected through a fn-pointer hook,
//!   which is how the parallel extension crate plugs in.
//! * The optional leaf observer is a pure side channel; it never affects
//!   the returned result.
//!
//! ## Invariants
//!
//! * Every node pushed onto the walk is prime.
//! * Extension digits are drawn from `1..base`; zero never appears.
//! * A digit-count bound only stops future expansion: leaves of fully
//!   expanded subtrees are always reported, bounded-off nodes never are,
//!   and the outcome is marked non-exhausted.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`
//!   at adapter build time).
//! * This module does not format or print results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::extension::{candidate_digits, extend, Side};
use crate::math::primality::is_prime;
use crate::primitives::digits::RadixInt;
use crate::primitives::errors::DelprimeError;
pub use crate::engine::output::{SearchResult, SearchStats};

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(feature = "std")]
use std::vec;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for the per-leaf reporting hook.
///
/// Fired once per discovered leaf, in discovery order. Pure side channel:
/// the returned result is identical with or without an observer.
pub type LeafObserverFn = fn(&RadixInt);

/// Signature for a custom forest pass function.
///
/// Given the surviving roots and the search configuration, expand the whole
/// forest and return its merged outcome. Injected by extension crates
/// (e.g., a rayon-parallel pass).
pub type ForestPassFn = fn(&[RadixInt], &SearchConfig) -> Result<ForestOutcome, DelprimeError>;

/// Outcome of expanding one or more subtrees.
#[derive(Debug, Clone)]
pub struct ForestOutcome {
    /// Leaves in discovery order.
    pub leaves: Vec<RadixInt>,

    /// Merged traversal counters.
    pub stats: SearchStats,

    /// Whether every subtree ran to natural exhaustion.
    pub exhausted: bool,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one deletable-prime search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Digit radix (at least 2).
    pub base: u32,

    /// Which end extensions land on.
    pub side: Side,

    /// Optional digit-count bound; `None` searches to natural exhaustion.
    pub max_digits: Option<usize>,

    /// Optional per-leaf reporting hook.
    pub observer: Option<LeafObserverFn>,

    /// Custom forest pass (e.g., parallel execution).
    #[doc(hidden)]
    pub custom_forest_pass: Option<ForestPassFn>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base: 10,
            side: Side::Right,
            max_digits: None,
            observer: None,
            custom_forest_pass: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for deletable-prime searches.
#[derive(Debug, Clone)]
pub struct SearchExecutor {
    /// Digit radix.
    pub base: u32,

    /// Extension side.
    pub side: Side,

    /// Optional digit-count bound.
    pub max_digits: Option<usize>,

    /// Optional per-leaf reporting hook.
    pub observer: Option<LeafObserverFn>,

    /// Custom forest pass function.
    #[doc(hidden)]
    pub custom_forest_pass: Option<ForestPassFn>,
}

impl Default for SearchExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchExecutor {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default parameters (base 10, right side).
    pub fn new() -> Self {
        Self {
            base: 10,
            side: Side::Right,
            max_digits: None,
            observer: None,
            custom_forest_pass: None,
        }
    }

    /// Create a new executor from a [`SearchConfig`].
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new()
            .base(config.base)
            .side(config.side)
            .max_digits(config.max_digits)
            .observer(config.observer)
            .custom_forest_pass(config.custom_forest_pass)
    }

    /// Convert executor settings back to a [`SearchConfig`].
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig {
            base: self.base,
            side: self.side,
            max_digits: self.max_digits,
            observer: self.observer,
            custom_forest_pass: self.custom_forest_pass,
        }
    }

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

    /// Set the optional digit-count bound.
    pub fn max_digits(mut self, max_digits: Option<usize>) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Set the per-leaf reporting hook.
    pub fn observer(mut self, observer: Option<LeafObserverFn>) -> Self {
        self.observer = observer;
        self
    }

    /// Set a custom forest pass function (e.g., for parallelization).
    #[doc(hidden)]
    pub fn custom_forest_pass(mut self, pass: Option<ForestPassFn>) -> Self {
        self.custom_forest_pass = pass;
        self
    }

    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Scan every single digit of the base and keep the prime ones.
    ///
    /// Digits 0 and 1 are scanned like the rest; the oracle rejects them,
    /// so the surviving roots are exactly the prime single digits.
    pub fn roots(&self) -> Result<Vec<RadixInt>, DelprimeError> {
        let mut roots = Vec::new();
        for digit in 0..self.base {
            let root = RadixInt::from_digit(self.base, digit)?;
            if is_prime(root.value()) {
                roots.push(root);
            }
        }
        Ok(roots)
    }

    /// Run the search to completion and collect the result.
    pub fn run(&self) -> Result<SearchResult, DelprimeError> {
        let roots = self.roots()?;
        let config = self.to_config();

        let outcome = if let Some(pass) = self.custom_forest_pass {
            pass(&roots, &config)?
        } else {
            Self::forest_pass(&roots, &config)?
        };

        Ok(SearchResult {
            base: self.base,
            side: self.side,
            roots,
            leaves: outcome.leaves,
            exhausted: outcome.exhausted,
            stats: outcome.stats,
        })
    }

    /// Expand every root's subtree sequentially, in root order.
    pub fn forest_pass(
        roots: &[RadixInt],
        config: &SearchConfig,
    ) -> Result<ForestOutcome, DelprimeError> {
        let mut leaves = Vec::new();
        let mut stats = SearchStats::default();
        let mut exhausted = true;

        for root in roots {
            let outcome = Self::expand_root(root, config)?;
            leaves.extend(outcome.leaves);
            stats.merge(&outcome.stats);
            exhausted &= outcome.exhausted;
        }

        Ok(ForestOutcome {
            leaves,
            stats,
            exhausted,
        })
    }

    /// Expand a single root's subtree to exhaustion (or the digit bound).
    pub fn expand_root(
        root: &RadixInt,
        config: &SearchConfig,
    ) -> Result<ForestOutcome, DelprimeError> {
        let mut walk = SubtreeWalk::new(config.clone(), root.clone())?;
        let mut leaves = Vec::new();
        while let Some(leaf) = walk.advance()? {
            leaves.push(leaf);
        }
        Ok(ForestOutcome {
            leaves,
            stats: walk.stats(),
            exhausted: walk.exhausted(),
        })
    }
}

// ============================================================================
// Subtree Walk
// ============================================================================

/// One stack frame of the depth-first walk.
#[derive(Debug)]
struct Frame {
    /// The (prime) node this frame expands.
    node: RadixInt,

    /// Prime children not yet descended into, ascending digit order.
    pending: vec::IntoIter<RadixInt>,

    /// Whether any prime extension survived.
    fertile: bool,

    /// Whether the digit-count bound suppressed expansion of this node.
    truncated: bool,
}

/// Explicit-stack depth-first walk over one root's subtree.
///
/// `advance` drives the walk until the next leaf pops, which makes the
/// walk equally usable for batch collection and lazy streaming.
#[derive(Debug)]
pub struct SubtreeWalk {
    config: SearchConfig,
    stack: Vec<Frame>,
    stats: SearchStats,
    exhausted: bool,
}

impl SubtreeWalk {
    /// Start a walk at `root`, which callers guarantee is prime.
    pub fn new(config: SearchConfig, root: RadixInt) -> Result<Self, DelprimeError> {
        let mut walk = Self {
            config,
            stack: Vec::new(),
            stats: SearchStats::default(),
            exhausted: true,
        };
        let frame = walk.open(root)?;
        walk.stack.push(frame);
        Ok(walk)
    }

    /// Advance to the next leaf, or `None` once the subtree is spent.
    pub fn advance(&mut self) -> Result<Option<RadixInt>, DelprimeError> {
        loop {
            let next_child = match self.stack.last_mut() {
                Some(top) => top.pending.next(),
                None => return Ok(None),
            };

            match next_child {
                Some(child) => {
                    let frame = self.open(child)?;
                    self.stack.push(frame);
                }
                None => {
                    if let Some(frame) = self.stack.pop() {
                        if frame.truncated {
                            self.exhausted = false;
                        } else if !frame.fertile {
                            if let Some(observer) = self.config.observer {
                                observer(&frame.node);
                            }
                            return Ok(Some(frame.node));
                        }
                    }
                }
            }
        }
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Whether no node was suppressed by the digit-count bound so far.
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    /// Generate a node's prime extensions and wrap it in a frame.
    fn open(&mut self, node: RadixInt) -> Result<Frame, DelprimeError> {
        self.stats.max_digits = self.stats.max_digits.max(node.len());

        let truncated = self
            .config
            .max_digits
            .is_some_and(|bound| node.len() >= bound);

        let mut children = Vec::new();
        if !truncated {
            self.stats.nodes_expanded += 1;
            for digit in candidate_digits(self.config.base) {
                let candidate = extend(&node, digit, self.config.side)?;
                self.stats.candidates_tested += 1;
                if is_prime(candidate.value()) {
                    children.push(candidate);
                }
            }
        }

        Ok(Frame {
            node,
            fertile: !children.is_empty(),
            truncated,
            pending: children.into_iter(),
        })
    }
}
