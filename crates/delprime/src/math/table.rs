//! Fixed table of small primes for fast-path lookup and trial division.
//!
//! ## Purpose
//!
//! This module provides the precomputed table of all 168 primes up to 997.
//! The primality oracle uses it two ways: exact membership decides every
//! candidate at or below the table maximum, and trial division against the
//! table eliminates most composites before the Miller-Rabin rounds run.
//!
//! ## Invariants
//!
//! * The table is sorted ascending and contains exactly the primes in
//!   `[2, 997]`.
//! * Membership lookup is O(log n) via binary search.
//!
//! ## Non-goals
//!
//! * This module does not decide primality above the table maximum
//!   (see `math::primality`).

// External dependencies
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

// ============================================================================
// Small-Prime Table
// ============================================================================

/// All 168 primes up to [`MAX_SMALL_PRIME`], ascending.
pub const SMALL_PRIMES: [u32; 168] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293,
    307, 311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419,
    421, 431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541,
    547, 557, 563, 569, 571, 577, 587, 593, 599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653,
    659, 661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743, 751, 757, 761, 769, 773, 787,
    797, 809, 811, 821, 823, 827, 829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911, 919,
    929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
];

/// Largest entry in [`SMALL_PRIMES`].
pub const MAX_SMALL_PRIME: u32 = 997;

// ============================================================================
// Lookup and Trial Division
// ============================================================================

/// Whether `candidate` appears in the small-prime table.
///
/// Decides primality exactly for every `candidate <= MAX_SMALL_PRIME`.
#[inline]
pub fn is_listed(candidate: u32) -> bool {
    SMALL_PRIMES.binary_search(&candidate).is_ok()
}

/// If `n` fits below the table maximum, decide its primality exactly.
///
/// Returns `None` when `n > MAX_SMALL_PRIME` and the caller must continue
/// with trial division and Miller-Rabin.
pub fn lookup(n: &BigUint) -> Option<bool> {
    match n.to_u32() {
        Some(small) if small <= MAX_SMALL_PRIME => Some(is_listed(small)),
        _ => None,
    }
}

/// Whether any table prime divides `n` evenly.
///
/// Callers guarantee `n > MAX_SMALL_PRIME`, so a hit always proves `n`
/// composite.
pub fn has_small_factor(n: &BigUint) -> bool {
    SMALL_PRIMES.iter().any(|&p| (n % p).is_zero())
}
