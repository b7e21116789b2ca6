#![cfg(feature = "dev")]
//! Tests for the deterministic primality oracle.
//!
//! These tests verify the layered oracle:
//! - Table fast path, trial-division prefilter, Miller-Rabin rounds
//! - Agreement with a sieve over a contiguous range
//! - Correct verdicts in both witness regimes
//!
//! ## Test Organization
//!
//! 1. **Small Value Tests** - Edge values and the table fast path
//! 2. **Sieve Cross-Check** - Exhaustive agreement up to 100,000
//! 3. **Large Value Tests** - Mersenne numbers in both witness regimes
//! 4. **Decomposition Tests** - n - 1 = s * 2^t extraction

use num_bigint::BigUint;

use delprime::internals::math::primality::{decompose, is_prime, miller_rabin};

// ============================================================================
// Small Value Tests
// ============================================================================

/// Test the edge values below the first prime.
#[test]
fn test_zero_and_one_are_not_prime() {
    assert!(!is_prime(&BigUint::from(0u32)));
    assert!(!is_prime(&BigUint::from(1u32)));
}

/// Test values decided by the table fast path.
#[test]
fn test_table_fast_path() {
    assert!(is_prime(&BigUint::from(2u32)));
    assert!(is_prime(&BigUint::from(3u32)));
    assert!(is_prime(&BigUint::from(997u32)));
    assert!(!is_prime(&BigUint::from(4u32)));
    assert!(!is_prime(&BigUint::from(999u32)));
}

/// Test values just above the table, decided by trial division or
/// Miller-Rabin.
#[test]
fn test_above_table_boundary() {
    assert!(is_prime(&BigUint::from(1009u32)), "1009 is prime");
    assert!(!is_prime(&BigUint::from(1007u32)), "1007 = 19 * 53");

    // 1018081 = 1009^2 has no factor below 1000; only Miller-Rabin
    // rejects it.
    assert!(!is_prime(&BigUint::from(1_018_081u32)));
}

// ============================================================================
// Sieve Cross-Check
// ============================================================================

/// Test exhaustive agreement with a sieve of Eratosthenes.
#[test]
fn test_agreement_with_sieve() {
    const LIMIT: usize = 100_000;

    let mut composite = vec![false; LIMIT];
    composite[0] = true;
    composite[1] = true;
    for i in 2..LIMIT {
        if !composite[i] {
            let mut j = i * i;
            while j < LIMIT {
                composite[j] = true;
                j += i;
            }
        }
    }

    for n in 0..LIMIT {
        assert_eq!(
            is_prime(&BigUint::from(n)),
            !composite[n],
            "Oracle disagrees with the sieve at {n}"
        );
    }
}

// ============================================================================
// Large Value Tests
// ============================================================================

/// Test Mersenne numbers below the fixed-witness bound.
#[test]
fn test_mersenne_fixed_regime() {
    // 2^61 - 1 is prime; 2^67 - 1 = 193707721 * 761838257287.
    let m61 = (BigUint::from(1u32) << 61) - 1u32;
    let m67 = (BigUint::from(1u32) << 67) - 1u32;

    assert!(is_prime(&m61));
    assert!(!is_prime(&m67));
}

/// Test candidates above the fixed-witness bound (scaled regime).
#[test]
fn test_mersenne_scaled_regime() {
    // 2^89 - 1 is prime and exceeds the deterministic bound.
    let m89 = (BigUint::from(1u32) << 89) - 1u32;
    assert!(is_prime(&m89));

    // The square of a prime is a classic strong-pseudoprime trap.
    let m61 = (BigUint::from(1u32) << 61) - 1u32;
    assert!(!is_prime(&(&m61 * &m61)));
}

/// Test a known strong pseudoprime to base 2.
#[test]
fn test_strong_pseudoprime_rejected() {
    // 3215031751 = 151 * 751 * 28351 is a strong pseudoprime to bases
    // 2, 3, 5, and 7 simultaneously.
    assert!(!miller_rabin(&BigUint::from(3_215_031_751u64)));
}

/// Test the 24-digit champion left-truncatable prime directly.
#[test]
fn test_champion_value_is_prime() {
    let champion: BigUint = "357686312646216567629137".parse().unwrap();
    assert!(is_prime(&champion));

    // Truncating its leading digit must leave a prime as well.
    let truncated: BigUint = "57686312646216567629137".parse().unwrap();
    assert!(is_prime(&truncated));
}

// ============================================================================
// Decomposition Tests
// ============================================================================

/// Test extraction of the odd part and power of two.
#[test]
fn test_decompose() {
    // 12 = 3 * 2^2
    let (s, t) = decompose(&BigUint::from(12u32));
    assert_eq!(s, BigUint::from(3u32));
    assert_eq!(t, 2);

    // 2^10 = 1 * 2^10
    let (s, t) = decompose(&BigUint::from(1024u32));
    assert_eq!(s, BigUint::from(1u32));
    assert_eq!(t, 10);
}

/// Test that the decomposition reassembles to the input.
#[test]
fn test_decompose_roundtrip() {
    let n = BigUint::from(73_939_132u32);
    let (s, t) = decompose(&n);

    assert_eq!(s.clone() << t, n);
    assert!(s.bit(0), "Odd part must be odd");
}
