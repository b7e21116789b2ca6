//! Deterministic primality oracle.
//!
//! ## Purpose
//!
//! This module provides the compositeness test every tree extension is
//! checked against: a small-prime table fast path, trial division, and a
//! deterministic Miller-Rabin round per selected witness.
//!
//! ## Design notes
//!
//! * **Deterministic**: No randomness anywhere; the witness set alone decides
//!   correctness (see `math::witnesses`).
//! * **Short-circuit**: The first witness that proves compositeness ends the
//!   test immediately.
//! * **Unbounded**: All arithmetic is on [`BigUint`]; candidates may be
//!   hundreds of digits. Modular exponentiation uses `BigUint::modpow`,
//!   which reduces at every step and never materializes `a^s` in full.
//! * **Pure**: No side effects; safe to call from parallel workers.
//!
//! ## Invariants
//!
//! * `is_prime` is total over all non-negative candidates; values below 2
//!   are simply reported non-prime by the table fast path.
//! * Candidates reaching the Miller-Rabin rounds are odd and greater than
//!   the table maximum.
//!
//! ## Non-goals
//!
//! * This module does not enumerate primes or factorize.
//! * This module does not cache verdicts; callers own any memoization.

// External dependencies
use num_bigint::BigUint;
use num_traits::One;

// Internal dependencies
use crate::math::table;
use crate::math::witnesses::WitnessSet;

// ============================================================================
// Oracle
// ============================================================================

/// Deterministically decide whether `n` is prime.
pub fn is_prime(n: &BigUint) -> bool {
    // Fast path: exact verdict for everything at or below the table maximum.
    if let Some(verdict) = table::lookup(n) {
        return verdict;
    }

    // Trial division eliminates most composites cheaply. `n` exceeds every
    // table prime here, so a divisor always proves compositeness.
    if table::has_small_factor(n) {
        return false;
    }

    miller_rabin(n)
}

// ============================================================================
// Miller-Rabin
// ============================================================================

/// Run deterministic Miller-Rabin rounds over the selected witness set.
///
/// Callers guarantee `n` is odd and greater than the small-prime table
/// maximum, so `n - 1` has at least one factor of two.
pub fn miller_rabin(n: &BigUint) -> bool {
    let n_minus_one = n - 1u32;
    let (s, t) = decompose(&n_minus_one);
    if t == 0 {
        // Even candidate; unreachable after trial division by 2.
        return false;
    }

    for witness in WitnessSet::select(n).iter() {
        let mut v = BigUint::from(witness).modpow(&s, n);
        if v.is_one() {
            continue;
        }

        let mut squarings = 0u64;
        while v != n_minus_one {
            if squarings == t - 1 {
                return false;
            }
            squarings += 1;
            v = (&v * &v) % n;
        }
    }

    true
}

/// Split an even number into `s * 2^t` with `s` odd.
pub fn decompose(even: &BigUint) -> (BigUint, u64) {
    let t = even.trailing_zeros().unwrap_or(0);
    (even >> t, t)
}
