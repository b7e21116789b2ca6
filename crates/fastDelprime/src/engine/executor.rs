//! Parallel execution engine for deletable-prime searches.
//!
//! ## Purpose
//!
//! This module provides the parallel forest pass that is injected into the
//! `delprime` crate's execution engine. Each surviving root's subtree is an
//! independent unit of work, so the forest decomposes naturally across CPU
//! cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Provides a drop-in replacement for the sequential
//!   forest pass.
//! * **Parallelism**: Uses `rayon` for per-root execution across CPU cores.
//! * **Stable merge**: Per-root outcomes are collected in root order, so the
//!   final leaf sequence is identical to the sequential pass.
//! * **Integration**: Plugs into the `delprime` executor via the
//!   `ForestPassFn` hook.
//!
//! ## Invariants
//!
//! * The merged leaf sequence equals the sequential pass output exactly.
//! * Statistics sum across roots; exhaustion is the conjunction.
//!
//! ## Non-goals
//!
//! * This module does not split a single root's subtree across threads; the
//!   unit of work is one root.
//! * This module does not serialize observer calls. An observer fires from
//!   whichever thread finds the leaf, so cross-root observation order is
//!   nondeterministic (the returned result is not).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// Export dependencies from delprime crate
use delprime::internals::engine::executor::{ForestOutcome, SearchConfig, SearchExecutor};
use delprime::internals::engine::output::SearchStats;
use delprime::internals::primitives::digits::RadixInt;
use delprime::internals::primitives::errors::DelprimeError;

// ============================================================================
// Parallel Forest Pass
// ============================================================================

/// Expand every root's subtree in parallel, merging in root order.
#[cfg(feature = "cpu")]
pub fn forest_pass_parallel(
    roots: &[RadixInt],
    config: &SearchConfig,
) -> Result<ForestOutcome, DelprimeError> {
    let outcomes = roots
        .par_iter()
        .map(|root| SearchExecutor::expand_root(root, config))
        .collect::<Result<Vec<ForestOutcome>, DelprimeError>>()?;

    let mut leaves = Vec::new();
    let mut stats = SearchStats::default();
    let mut exhausted = true;

    // collect() preserves root order, so this merge is stable.
    for outcome in outcomes {
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
