//! Output types and result structures for deletable-prime searches.
//!
//! ## Purpose
//!
//! This module defines the [`SearchResult`] struct which encapsulates all
//! outputs of a completed search: the leaf primes, the surviving roots,
//! exhaustion status, and traversal statistics.
//!
//! ## Design notes
//!
//! * **Deterministic**: Leaves appear in depth-first order (roots ascending,
//!   sibling digits ascending); identical configurations produce identical
//!   results.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * Every leaf is prime, and so is every ancestor obtained by deleting
//!   digits from the extension end.
//! * `exhausted` is `false` exactly when a digit-count bound pruned at
//!   least one unexpanded node; leaves of fully expanded subtrees are
//!   always present.
//!
//! ## Non-goals
//!
//! * This module does not perform the search; it only stores results.
//! * This module does not format digit sequences (see `RadixInt`'s
//!   `Display`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::algorithms::extension::Side;
use crate::primitives::digits::RadixInt;

// ============================================================================
// Traversal Statistics
// ============================================================================

/// Counters accumulated over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose extensions were generated and tested.
    pub nodes_expanded: u64,

    /// Extension candidates handed to the primality oracle.
    pub candidates_tested: u64,

    /// Longest digit sequence reached.
    pub max_digits: usize,
}

impl SearchStats {
    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes_expanded += other.nodes_expanded;
        self.candidates_tested += other.candidates_tested;
        self.max_digits = self.max_digits.max(other.max_digits);
    }
}

// ============================================================================
// Result Structure
// ============================================================================

/// Complete output of a deletable-prime search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The digit radix searched.
    pub base: u32,

    /// The extension side searched.
    pub side: Side,

    /// Prime single digits the forest grew from, ascending.
    pub roots: Vec<RadixInt>,

    /// Maximal deletable primes in depth-first discovery order.
    pub leaves: Vec<RadixInt>,

    /// Whether the forest was expanded to natural exhaustion. `false`
    /// when a digit-count bound stopped future expansion.
    pub exhausted: bool,

    /// Traversal counters.
    pub stats: SearchStats,
}

impl SearchResult {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// The numerically largest leaf, if any.
    pub fn largest(&self) -> Option<&RadixInt> {
        self.leaves.iter().max()
    }

    /// Number of leaves found.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Whether no leaves were found.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SearchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Base:       {}", self.base)?;
        writeln!(f, "  Side:       {}", self.side)?;
        writeln!(f, "  Roots:      {}", self.roots.len())?;
        writeln!(f, "  Leaves:     {}", self.leaves.len())?;
        writeln!(
            f,
            "  Exhausted:  {}",
            if self.exhausted { "yes" } else { "no (bounded)" }
        )?;
        writeln!(f, "  Expanded:   {} nodes", self.stats.nodes_expanded)?;
        writeln!(f, "  Tested:     {} candidates", self.stats.candidates_tested)?;
        writeln!(f, "  Max digits: {}", self.stats.max_digits)?;

        if let Some(largest) = self.largest() {
            writeln!(f, "  Largest:    {largest}")?;
        }

        // Full listings get unwieldy for deep searches; show a prefix.
        const SHOWN: usize = 16;
        if !self.leaves.is_empty() {
            writeln!(f, "Leaves:")?;
            for leaf in self.leaves.iter().take(SHOWN) {
                writeln!(f, "  {leaf}")?;
            }
            if self.leaves.len() > SHOWN {
                writeln!(f, "  ... ({} more)", self.leaves.len() - SHOWN)?;
            }
        }

        Ok(())
    }
}
