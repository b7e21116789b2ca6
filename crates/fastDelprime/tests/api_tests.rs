#![cfg(feature = "dev")]
//! Tests for the fastDelprime public API.
//!
//! These tests verify the parallel adapter surface:
//! - Marker conversion defaults to parallel
//! - The parallel hint flows through the base builder
//! - End-to-end runs through the prelude
//! - Validation is delegated to the base crate
//!
//! ## Test Organization
//!
//! 1. **Conversion Tests** - Marker behavior and parallel defaults
//! 2. **Execution Tests** - Full runs through the prelude
//! 3. **Validation Tests** - Delegated error paths

use fastDelprime::internals::api::{Adapter, DelprimeBuilder};
use fastDelprime::prelude::*;

// ============================================================================
// Conversion Tests
// ============================================================================

/// Test the Batch marker defaults to parallel execution.
#[test]
fn test_batch_defaults_to_parallel() {
    let builder = DelprimeBuilder::new().base(10).adapter(Adapter::Batch);

    assert!(builder.parallel);
    assert_eq!(builder.base.base, 10);
}

/// Test the parallel hint on the base builder is honored.
#[test]
fn test_parallel_hint_flows_through() {
    let builder = DelprimeBuilder::new()
        .parallel(false)
        .adapter(Adapter::Batch);

    assert!(!builder.parallel);
}

/// Test the wrapper setter overrides the hint.
#[test]
fn test_parallel_setter_overrides() {
    let builder = DelprimeBuilder::new()
        .adapter(Adapter::Batch)
        .parallel(false)
        .parallel(true);

    assert!(builder.parallel);
}

// ============================================================================
// Execution Tests
// ============================================================================

/// Test the documented parallel journey through the prelude.
#[test]
fn test_prelude_parallel_journey() {
    let result = Delprime::new()
        .base(10)
        .side(Right)
        .adapter(Batch)
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(result.len(), 27);
    assert_eq!(result.largest().unwrap().to_string(), "73939133");
}

/// Test parallel and sequential adapter runs agree.
#[test]
fn test_adapter_runs_agree() {
    let parallel = Delprime::new()
        .base(10)
        .side(Left)
        .max_digits(8)
        .adapter(Batch)
        .build()
        .unwrap()
        .run()
        .unwrap();

    let sequential = Delprime::new()
        .base(10)
        .side(Left)
        .max_digits(8)
        .adapter(Batch)
        .parallel(false)
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(parallel.leaves, sequential.leaves);
    assert_eq!(parallel.stats, sequential.stats);
    assert_eq!(parallel.exhausted, sequential.exhausted);
}

/// Test the re-exported streaming adapter still works from this crate.
#[test]
fn test_streaming_reexport() {
    let stream = Delprime::new()
        .base(3)
        .adapter(Streaming)
        .build()
        .unwrap()
        .run()
        .unwrap();

    let leaves: Vec<String> = stream.map(|leaf| leaf.unwrap().to_string()).collect();
    assert_eq!(leaves, vec!["2122"]);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test base-crate validation surfaces through the wrapper build().
#[test]
fn test_validation_delegated() {
    let err = Delprime::new()
        .base(1)
        .adapter(Batch)
        .build()
        .unwrap_err();

    assert_eq!(err, DelprimeError::InvalidBase(1));
}

/// Test a built searcher is debug-formattable.
#[test]
fn test_searcher_debug_format() {
    let search = Delprime::new().base(3).adapter(Batch).build();
    assert!(format!("{:?}", search).contains("ParallelBatchSearch"));
}

/// Test duplicate-parameter detection survives the wrapper.
#[test]
fn test_duplicate_parameter_delegated() {
    let err = Delprime::new()
        .base(10)
        .base(12)
        .adapter(Batch)
        .build()
        .unwrap_err();

    assert_eq!(err, DelprimeError::DuplicateParameter { parameter: "base" });
}
