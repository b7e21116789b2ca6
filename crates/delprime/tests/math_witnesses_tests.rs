#![cfg(feature = "dev")]
//! Tests for Miller-Rabin witness selection.
//!
//! These tests verify the two witness regimes:
//! - The fixed 13-witness set below the deterministic bound
//! - The bit-length-scaled set above it
//!
//! ## Test Organization
//!
//! 1. **Selection Tests** - Regime choice at and around the bound
//! 2. **Iteration Tests** - Witness enumeration order and count

use num_bigint::BigUint;

use delprime::internals::math::witnesses::{
    WitnessSet, FIXED_WITNESSES, FIXED_WITNESS_BOUND,
};

// ============================================================================
// Selection Tests
// ============================================================================

/// Test that small candidates get the fixed witness set.
#[test]
fn test_select_fixed_below_bound() {
    let n = BigUint::from(1_000_003u32);
    assert_eq!(WitnessSet::select(&n), WitnessSet::Fixed);
}

/// Test regime choice exactly at the bound.
#[test]
fn test_select_at_bound() {
    let bound = BigUint::from(FIXED_WITNESS_BOUND);

    // One below the bound still qualifies for the fixed set.
    let below = &bound - 1u32;
    assert_eq!(WitnessSet::select(&below), WitnessSet::Fixed);

    // The bound itself does not.
    assert!(matches!(WitnessSet::select(&bound), WitnessSet::Scaled { .. }));
}

/// Test the scaled regime computes 3 * (bits + 1)^2.
#[test]
fn test_select_scaled_max() {
    // 2^89 - 1 has 89 bits; 3 * 90^2 = 24300.
    let m89 = (BigUint::from(1u32) << 89) - 1u32;
    assert_eq!(WitnessSet::select(&m89), WitnessSet::Scaled { max: 24_300 });
}

// ============================================================================
// Iteration Tests
// ============================================================================

/// Test the fixed set yields its 13 witnesses ascending.
#[test]
fn test_fixed_iteration() {
    let set = WitnessSet::Fixed;

    assert_eq!(set.len(), 13);
    assert!(!set.is_empty());

    let collected: Vec<u64> = set.iter().collect();
    let expected: Vec<u64> = FIXED_WITNESSES.iter().map(|&w| u64::from(w)).collect();
    assert_eq!(collected, expected);
}

/// Test the scaled set yields 2..=max ascending.
#[test]
fn test_scaled_iteration() {
    let set = WitnessSet::Scaled { max: 6 };

    assert_eq!(set.len(), 5);

    let collected: Vec<u64> = set.iter().collect();
    assert_eq!(collected, vec![2, 3, 4, 5, 6]);
}
