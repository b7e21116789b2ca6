#![cfg(feature = "dev")]
//! Tests for the high-level fluent API.
//!
//! These tests verify the public builder surface:
//! - Defaults and fluent configuration
//! - Adapter marker conversion to execution builders
//! - Duplicate-parameter detection through build()
//! - End-to-end runs through the prelude
//!
//! ## Test Organization
//!
//! 1. **Builder Tests** - Defaults and setters
//! 2. **Conversion Tests** - Marker-driven adapter selection
//! 3. **Hygiene Tests** - Duplicate parameters
//! 4. **Prelude Tests** - The documented user journey

use delprime::internals::api::{Adapter, DelprimeBuilder};
use delprime::prelude::*;

// ============================================================================
// Builder Tests
// ============================================================================

/// Test that a fresh builder has no parameters set.
#[test]
fn test_builder_defaults() {
    let builder = DelprimeBuilder::new();

    assert_eq!(builder.base, None);
    assert_eq!(builder.side, None);
    assert_eq!(builder.max_digits, None);
    assert!(builder.observer.is_none());
    assert!(builder.duplicate_param.is_none());
}

/// Test fluent configuration records every parameter.
#[test]
fn test_builder_setters() {
    let builder = DelprimeBuilder::new()
        .base(16)
        .side(Side::Left)
        .max_digits(32);

    assert_eq!(builder.base, Some(16));
    assert_eq!(builder.side, Some(Side::Left));
    assert_eq!(builder.max_digits, Some(32));
}

// ============================================================================
// Conversion Tests
// ============================================================================

/// Test conversion to the batch execution builder carries parameters.
#[test]
fn test_batch_conversion() {
    let batch = DelprimeBuilder::new()
        .base(12)
        .side(Side::Left)
        .max_digits(9)
        .adapter(Adapter::Batch);

    assert_eq!(batch.base, 12);
    assert_eq!(batch.side, Side::Left);
    assert_eq!(batch.max_digits, Some(9));
}

/// Test conversion defaults when parameters are unset.
#[test]
fn test_conversion_defaults() {
    let batch = DelprimeBuilder::new().adapter(Adapter::Batch);

    assert_eq!(batch.base, 10);
    assert_eq!(batch.side, Side::Right);
    assert_eq!(batch.max_digits, None);
}

/// Test conversion to the streaming execution builder.
#[test]
fn test_streaming_conversion() {
    let streaming = DelprimeBuilder::new()
        .base(7)
        .adapter(Adapter::Streaming);

    assert_eq!(streaming.base, 7);
    assert_eq!(streaming.side, Side::Right);
}

// ============================================================================
// Hygiene Tests
// ============================================================================

/// Test that setting a parameter twice fails at build().
#[test]
fn test_duplicate_parameter_rejected() {
    let err = DelprimeBuilder::new()
        .base(10)
        .base(12)
        .adapter(Adapter::Batch)
        .build()
        .unwrap_err();

    assert_eq!(err, DelprimeError::DuplicateParameter { parameter: "base" });
}

/// Test duplicate detection survives the streaming conversion too.
#[test]
fn test_duplicate_parameter_in_streaming() {
    let err = DelprimeBuilder::new()
        .side(Side::Left)
        .side(Side::Right)
        .adapter(Adapter::Streaming)
        .build()
        .unwrap_err();

    assert_eq!(err, DelprimeError::DuplicateParameter { parameter: "side" });
}

// ============================================================================
// Prelude Tests
// ============================================================================

/// Test the documented batch journey through the prelude.
#[test]
fn test_prelude_batch_journey() {
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

/// Test the documented streaming journey through the prelude.
#[test]
fn test_prelude_streaming_journey() {
    let stream = Delprime::new()
        .base(3)
        .side(Right)
        .adapter(Streaming)
        .build()
        .unwrap()
        .run()
        .unwrap();

    let leaves: Vec<String> = stream.map(|leaf| leaf.unwrap().to_string()).collect();
    assert_eq!(leaves, vec!["2122"]);
}

/// Test prelude types cover the error and result surface.
#[test]
fn test_prelude_surface() {
    fn touches(_result: &SearchResult, _stats: &SearchStats, _side: Side) {}

    let result = Delprime::new()
        .base(2)
        .adapter(Batch)
        .build()
        .unwrap()
        .run()
        .unwrap();

    touches(&result, &result.stats, Left);
    assert!(result.is_empty());
}
