#![cfg(all(feature = "dev", feature = "cpu"))]
//! Tests for parallel/sequential result consistency.
//!
//! These tests verify the parallel forest pass:
//! - Leaf sequences match the sequential pass exactly
//! - Statistics and exhaustion merge correctly
//! - The pass function can be injected directly
//!
//! ## Test Organization
//!
//! 1. **Consistency Tests** - Parallel equals sequential, both sides
//! 2. **Bound Tests** - Exhaustion merging under a digit bound
//! 3. **Injection Tests** - Direct use of the pass function

use fastDelprime::internals::engine::executor::forest_pass_parallel;

use delprime::internals::algorithms::extension::Side;
use delprime::internals::engine::executor::SearchExecutor;

// ============================================================================
// Consistency Tests
// ============================================================================

/// Test parallel and sequential passes agree on the append side.
#[test]
fn test_parallel_matches_sequential_right() {
    let sequential = SearchExecutor::new().base(10).side(Side::Right).run().unwrap();
    let parallel = SearchExecutor::new()
        .base(10)
        .side(Side::Right)
        .custom_forest_pass(Some(forest_pass_parallel))
        .run()
        .unwrap();

    assert_eq!(parallel.leaves, sequential.leaves);
    assert_eq!(parallel.stats, sequential.stats);
    assert_eq!(parallel.exhausted, sequential.exhausted);
}

/// Test parallel and sequential passes agree on the prepend side.
#[test]
fn test_parallel_matches_sequential_left() {
    let sequential = SearchExecutor::new().base(10).side(Side::Left).run().unwrap();
    let parallel = SearchExecutor::new()
        .base(10)
        .side(Side::Left)
        .custom_forest_pass(Some(forest_pass_parallel))
        .run()
        .unwrap();

    assert_eq!(parallel.leaves, sequential.leaves);
    assert_eq!(parallel.stats, sequential.stats);
}

/// Test agreement across a sweep of bases.
#[test]
fn test_parallel_matches_sequential_base_sweep() {
    for base in 2..=9 {
        let sequential = SearchExecutor::new().base(base).run().unwrap();
        let parallel = SearchExecutor::new()
            .base(base)
            .custom_forest_pass(Some(forest_pass_parallel))
            .run()
            .unwrap();

        assert_eq!(
            parallel.leaves, sequential.leaves,
            "Parallel pass must match in base {base}"
        );
    }
}

// ============================================================================
// Bound Tests
// ============================================================================

/// Test exhaustion merges as a conjunction under a digit bound.
#[test]
fn test_bounded_parallel_exhaustion() {
    let parallel = SearchExecutor::new()
        .base(10)
        .side(Side::Left)
        .max_digits(Some(4))
        .custom_forest_pass(Some(forest_pass_parallel))
        .run()
        .unwrap();

    assert!(!parallel.exhausted);
    assert!(parallel.leaves.iter().all(|l| l.len() < 4));
}

// ============================================================================
// Injection Tests
// ============================================================================

/// Test calling the pass function directly on a root subset.
#[test]
fn test_pass_on_root_subset() {
    let executor = SearchExecutor::new().base(10).side(Side::Right);
    let roots = executor.roots().unwrap();
    let config = executor.to_config();

    // Only the subtree of root 7.
    let outcome = forest_pass_parallel(&roots[3..], &config).unwrap();

    assert!(outcome.exhausted);
    assert!(!outcome.leaves.is_empty());
    assert!(outcome.leaves.iter().all(|l| l.digits()[0] == 7));
}
