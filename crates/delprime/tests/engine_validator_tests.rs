#![cfg(feature = "dev")]
//! Tests for search parameter validation.
//!
//! These tests verify the Validator's static checks:
//! - Base validation
//! - Digit-bound validation
//! - Duplicate-parameter detection
//!
//! ## Test Organization
//!
//! 1. **Base Tests** - Accept/reject boundaries
//! 2. **Bound Tests** - max_digits floor
//! 3. **Duplicate Tests** - Builder hygiene

use delprime::internals::engine::validator::Validator;
use delprime::internals::primitives::errors::DelprimeError;

// ============================================================================
// Base Tests
// ============================================================================

/// Test base validation at the boundary.
#[test]
fn test_validate_base() {
    assert!(Validator::validate_base(2).is_ok());
    assert!(Validator::validate_base(10).is_ok());
    assert!(Validator::validate_base(u32::MAX).is_ok());

    assert_eq!(
        Validator::validate_base(0).unwrap_err(),
        DelprimeError::InvalidBase(0)
    );
    assert_eq!(
        Validator::validate_base(1).unwrap_err(),
        DelprimeError::InvalidBase(1)
    );
}

// ============================================================================
// Bound Tests
// ============================================================================

/// Test digit-bound validation at the boundary.
#[test]
fn test_validate_max_digits() {
    assert!(Validator::validate_max_digits(1).is_ok());
    assert!(Validator::validate_max_digits(usize::MAX).is_ok());

    assert_eq!(
        Validator::validate_max_digits(0).unwrap_err(),
        DelprimeError::InvalidMaxDigits(0)
    );
}

// ============================================================================
// Duplicate Tests
// ============================================================================

/// Test duplicate-parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());

    assert_eq!(
        Validator::validate_no_duplicates(Some("base")).unwrap_err(),
        DelprimeError::DuplicateParameter { parameter: "base" }
    );
}
